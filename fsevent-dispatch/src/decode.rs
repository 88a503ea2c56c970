//! Flag decoding
//!
//! Turns one raw record into the ordered list of notifications its flags describe. Flags are
//! independent bits and several of them are often set on the same record, so a record can decode
//! to more than one notification. They are produced in this order:
//!
//! 1. stream signals: ids wrapped, history done, root changed. If any of them is set, nothing
//!    else is decoded from the record;
//! 2. volume mounted, then volume unmounted;
//! 3. must scan sub-directories, for the rescan bit or either drop hint;
//! 4. one per-item notification per item bit, all sharing the record's item kind;
//! 5. a generic folder change, when nothing from 2 to 4 matched.

use crate::{Error, RawRecord, Result, StreamFlags};
use fsevent_types::notification::{
    EventId, ItemEvent, ItemKind, Notification, NotificationKind, ScanReason,
};
use std::path::Path;

/// Most notifications a single record can decode to: both volume bits, a rescan and every item
/// bit.
pub const MAX_NOTIFICATIONS_PER_RECORD: usize = 2 + 1 + ITEM_FLAGS.len();

const ITEM_FLAGS: [(StreamFlags, NotificationKind); 9] = [
    (StreamFlags::ITEM_CREATED, NotificationKind::ItemCreated),
    (StreamFlags::ITEM_REMOVED, NotificationKind::ItemRemoved),
    (
        StreamFlags::INODE_META_MOD,
        NotificationKind::ItemInodeMetadataModified,
    ),
    (StreamFlags::ITEM_RENAMED, NotificationKind::ItemRenamed),
    (StreamFlags::ITEM_MODIFIED, NotificationKind::ItemDataModified),
    (
        StreamFlags::FINDER_INFO_MOD,
        NotificationKind::ItemFinderInfoModified,
    ),
    (
        StreamFlags::ITEM_CHANGE_OWNER,
        NotificationKind::ItemOwnershipModified,
    ),
    (StreamFlags::ITEM_XATTR_MOD, NotificationKind::ItemXattrModified),
    (StreamFlags::ITEM_CLONED, NotificationKind::ItemCloned),
];

/// Returns the kinds of notification the flags describe, in delivery order.
///
/// Never empty: flags matching nothing yield a generic folder change.
pub fn classify(flags: StreamFlags) -> Vec<NotificationKind> {
    let mut kinds = Vec::with_capacity(MAX_NOTIFICATIONS_PER_RECORD);

    // The service never reports item changes together with these, whatever the other bits say.
    if flags.intersects(StreamFlags::STREAM_SIGNALS) {
        if flags.contains(StreamFlags::IDS_WRAPPED) {
            kinds.push(NotificationKind::StreamEventIdsWrapped);
        }
        if flags.contains(StreamFlags::HISTORY_DONE) {
            kinds.push(NotificationKind::StreamHistoryDone);
        }
        if flags.contains(StreamFlags::ROOT_CHANGED) {
            kinds.push(NotificationKind::RootChanged);
        }
        return kinds;
    }

    if flags.contains(StreamFlags::MOUNT) {
        kinds.push(NotificationKind::VolumeMounted);
    }
    if flags.contains(StreamFlags::UNMOUNT) {
        kinds.push(NotificationKind::VolumeUnmounted);
    }

    // A rescan demand may come along with an item change on the same record; both are kept.
    if flags.intersects(StreamFlags::RESCAN) {
        kinds.push(NotificationKind::MustScanSubDirectories);
    }

    kinds.extend(
        ITEM_FLAGS
            .iter()
            .filter(|(flag, _)| flags.contains(*flag))
            .map(|(_, kind)| *kind),
    );

    if kinds.is_empty() {
        kinds.push(NotificationKind::GenericFolderChanged);
    }

    kinds
}

/// Decodes one raw record.
///
/// Every notification decoded from the record carries its unmodified path, identifier, origin
/// marker and item kind. The result is never empty.
///
/// A missing or empty path makes the first notification needing one an
/// [`ErrorKind::MalformedRecord`](crate::ErrorKind::MalformedRecord), and the record's remaining
/// notifications are skipped. Notifications which need no path and precede it are kept.
///
/// # Example
///
/// ```
/// use fsevent_dispatch::{decode, RawRecord, StreamFlags};
/// use fsevent_dispatch::notification::{ItemEvent, ItemKind, Notification};
/// use std::path::Path;
///
/// let flags = StreamFlags::ITEM_CREATED | StreamFlags::IS_FILE;
/// let record = RawRecord::new(Path::new("/tmp/a.txt"), 42, flags.bits());
///
/// let decoded: Vec<_> = decode(&record).into_iter().map(Result::unwrap).collect();
/// assert_eq!(
///     decoded,
///     [Notification::ItemCreated(ItemEvent::new("/tmp/a.txt", ItemKind::File, 42, false))]
/// );
/// ```
pub fn decode(record: &RawRecord<'_>) -> Vec<Result<Notification>> {
    let flags = record.stream_flags();

    log::trace!(
        "FSEvent: path = {:?}, id = {}, flags = {:?}",
        record.path,
        record.event_id,
        flags
    );

    if flags.unknown_bits() != 0 {
        log::debug!(
            "ignoring unrecognized flag bits {:#x} of event {}",
            flags.unknown_bits(),
            record.event_id
        );
    }

    let kinds = classify(flags);
    if kinds == [NotificationKind::GenericFolderChanged]
        && !(flags - StreamFlags::OWN_EVENT).is_empty()
    {
        log::debug!(
            "no specific notification for flags {:#x} of event {}, reporting a folder change",
            record.flags,
            record.event_id
        );
    }

    let fields = Fields {
        path: record.usable_path(),
        event_id: record.event_id,
        item_kind: flags.item_kind(),
        reason: flags.scan_reason(),
        own_event: flags.own_event(),
    };

    let mut results = Vec::with_capacity(kinds.len());
    for kind in kinds {
        if kind.requires_path() && fields.path.is_none() {
            // All remaining kinds need the same missing path.
            results.push(Err(Error::malformed_record(kind)
                .set_event_id(record.event_id)
                .set_flags(record.flags)));
            break;
        }
        results.extend(fields.build(kind).map(Ok));
    }
    results
}

/// Values computed once per record and shared by all its notifications.
struct Fields<'a> {
    path: Option<&'a Path>,
    event_id: EventId,
    item_kind: ItemKind,
    reason: ScanReason,
    own_event: bool,
}

impl Fields<'_> {
    /// Builds the notification of the given kind.
    ///
    /// Returns `None` exactly when [`NotificationKind::requires_path`] holds and there is no path.
    fn build(&self, kind: NotificationKind) -> Option<Notification> {
        let own_event = self.own_event;
        let event_id = self.event_id;
        let item = || {
            self.path
                .map(|path| ItemEvent::new(path, self.item_kind, event_id, own_event))
        };

        Some(match kind {
            NotificationKind::StreamEventIdsWrapped => Notification::StreamEventIdsWrapped,
            NotificationKind::StreamHistoryDone => Notification::StreamHistoryDone,
            NotificationKind::RootChanged => Notification::RootChanged {
                path: self.path?.to_path_buf(),
                own_event,
            },
            NotificationKind::VolumeMounted => Notification::VolumeMounted {
                path: self.path?.to_path_buf(),
                event_id,
                own_event,
            },
            NotificationKind::VolumeUnmounted => Notification::VolumeUnmounted {
                path: self.path?.to_path_buf(),
                event_id,
                own_event,
            },
            NotificationKind::MustScanSubDirectories => Notification::MustScanSubDirectories {
                path: self.path?.to_path_buf(),
                reason: self.reason,
                event_id,
                own_event,
            },
            NotificationKind::ItemCreated => Notification::ItemCreated(item()?),
            NotificationKind::ItemRemoved => Notification::ItemRemoved(item()?),
            NotificationKind::ItemInodeMetadataModified => {
                Notification::ItemInodeMetadataModified(item()?)
            }
            NotificationKind::ItemRenamed => Notification::ItemRenamed(item()?),
            NotificationKind::ItemDataModified => Notification::ItemDataModified(item()?),
            NotificationKind::ItemFinderInfoModified => {
                Notification::ItemFinderInfoModified(item()?)
            }
            NotificationKind::ItemOwnershipModified => {
                Notification::ItemOwnershipModified(item()?)
            }
            NotificationKind::ItemXattrModified => Notification::ItemXattrModified(item()?),
            NotificationKind::ItemCloned => Notification::ItemCloned(item()?),
            NotificationKind::GenericFolderChanged => Notification::GenericFolderChanged {
                path: self.path?.to_path_buf(),
                own_event,
            },
        })
    }
}
