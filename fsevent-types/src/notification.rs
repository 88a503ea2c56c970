//! The `Notification` type and its per-record descriptors.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier assigned by the notification service to a single record.
///
/// Identifiers increase monotonically within a stream. `0` is a sentinel meaning the record has
/// no meaningful identifier, which is always the case for root-changed records.
pub type EventId = u64;

/// The kind of file system item a record is about.
///
/// Derived from the "is-*" flags of a record. A record that carries none of them, or more than
/// one, is about an `Unknown` item.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ItemKind {
    /// The item kind was not reported, or was reported ambiguously.
    #[default]
    Unknown,

    /// A regular file.
    File,

    /// A directory.
    Directory,

    /// A symbolic link.
    Symlink,

    /// A hard link to a file which has other links.
    Hardlink,

    /// The last remaining hard link to a file.
    LastHardlink,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ItemKind::Unknown => "unknown",
            ItemKind::File => "file",
            ItemKind::Directory => "directory",
            ItemKind::Symlink => "symlink",
            ItemKind::Hardlink => "hardlink",
            ItemKind::LastHardlink => "last hardlink",
        })
    }
}

/// Why a subtree has to be scanned again.
///
/// The service provides two hints as to why events were dropped. Documentation on what they mean
/// exactly is scant: user-dropped is generally the receiver being too slow, kernel-dropped is
/// buffer pressure in the kernel.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ScanReason {
    /// No hint, or both hints at once.
    #[default]
    Unknown,

    /// Events were dropped in user space.
    UserDropped,

    /// Events were dropped in the kernel.
    KernelDropped,
}

impl fmt::Display for ScanReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScanReason::Unknown => "unknown",
            ScanReason::UserDropped => "user dropped",
            ScanReason::KernelDropped => "kernel dropped",
        })
    }
}

/// A change to a single item, shared by all per-item notifications.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemEvent {
    /// Path of the item.
    pub path: PathBuf,

    /// Kind of the item, identical for every notification decoded from the same record.
    pub kind: ItemKind,

    /// Identifier of the record the notification was decoded from.
    pub event_id: EventId,

    /// Whether the change was caused by the process that created the watch.
    ///
    /// Only meaningful if the watch was created with self-marking enabled.
    pub own_event: bool,
}

impl ItemEvent {
    /// Creates a new `ItemEvent`.
    pub fn new(path: impl Into<PathBuf>, kind: ItemKind, event_id: EventId, own_event: bool) -> Self {
        Self {
            path: path.into(),
            kind,
            event_id,
            own_event,
        }
    }
}

/// A typed notification decoded from one raw record.
///
/// A single record may decode to several notifications, e.g. a rescan demand and an item
/// creation. They then all carry the record's path, identifier and origin marker unchanged.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum Notification {
    /// The stream's identifier counter wrapped around.
    ///
    /// Any identifier saved to resume the stream later is meaningless from now on.
    StreamEventIdsWrapped,

    /// Marks the end of replayed historical records.
    ///
    /// Never sent for a stream watching from "now".
    StreamHistoryDone,

    /// The watched root path, or one of its parents, was moved or removed.
    ///
    /// The identifier of such a record is always the `0` sentinel, so it isn't carried.
    RootChanged {
        /// Path of the watched root.
        path: PathBuf,
        /// Whether the change was caused by the watching process.
        own_event: bool,
    },

    /// A volume was mounted under the watched path.
    VolumeMounted {
        /// Mount point.
        path: PathBuf,
        /// Identifier of the record.
        event_id: EventId,
        /// Whether the change was caused by the watching process.
        own_event: bool,
    },

    /// A volume was unmounted from under the watched path.
    VolumeUnmounted {
        /// Former mount point.
        path: PathBuf,
        /// Identifier of the record.
        event_id: EventId,
        /// Whether the change was caused by the watching process.
        own_event: bool,
    },

    /// Records were coalesced or dropped; the subtree at `path` has to be enumerated again.
    MustScanSubDirectories {
        /// Root of the subtree to scan.
        path: PathBuf,
        /// Hint as to why the scan is needed.
        reason: ScanReason,
        /// Identifier of the record.
        event_id: EventId,
        /// Whether the change was caused by the watching process.
        own_event: bool,
    },

    /// An item was created.
    ItemCreated(ItemEvent),

    /// An item was removed.
    ItemRemoved(ItemEvent),

    /// The inode metadata of an item changed.
    ItemInodeMetadataModified(ItemEvent),

    /// An item was renamed.
    ///
    /// The path is either the old or the new name; the service provides no way of telling the
    /// two sides of a rename apart, but they usually come one after the other in the same batch.
    ItemRenamed(ItemEvent),

    /// The data of an item changed.
    ItemDataModified(ItemEvent),

    /// The Finder info of an item changed.
    ItemFinderInfoModified(ItemEvent),

    /// The ownership of an item changed.
    ItemOwnershipModified(ItemEvent),

    /// An extended attribute of an item changed.
    ItemXattrModified(ItemEvent),

    /// An item was cloned.
    ItemCloned(ItemEvent),

    /// Something changed in the folder at `path`, without more detail.
    GenericFolderChanged {
        /// Path of the folder.
        path: PathBuf,
        /// Whether the change was caused by the watching process.
        own_event: bool,
    },
}

impl Notification {
    /// Returns the fieldless kind of this notification.
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::StreamEventIdsWrapped => NotificationKind::StreamEventIdsWrapped,
            Notification::StreamHistoryDone => NotificationKind::StreamHistoryDone,
            Notification::RootChanged { .. } => NotificationKind::RootChanged,
            Notification::VolumeMounted { .. } => NotificationKind::VolumeMounted,
            Notification::VolumeUnmounted { .. } => NotificationKind::VolumeUnmounted,
            Notification::MustScanSubDirectories { .. } => NotificationKind::MustScanSubDirectories,
            Notification::ItemCreated(_) => NotificationKind::ItemCreated,
            Notification::ItemRemoved(_) => NotificationKind::ItemRemoved,
            Notification::ItemInodeMetadataModified(_) => {
                NotificationKind::ItemInodeMetadataModified
            }
            Notification::ItemRenamed(_) => NotificationKind::ItemRenamed,
            Notification::ItemDataModified(_) => NotificationKind::ItemDataModified,
            Notification::ItemFinderInfoModified(_) => NotificationKind::ItemFinderInfoModified,
            Notification::ItemOwnershipModified(_) => NotificationKind::ItemOwnershipModified,
            Notification::ItemXattrModified(_) => NotificationKind::ItemXattrModified,
            Notification::ItemCloned(_) => NotificationKind::ItemCloned,
            Notification::GenericFolderChanged { .. } => NotificationKind::GenericFolderChanged,
        }
    }

    /// Returns the item change, for per-item notifications.
    pub fn item(&self) -> Option<&ItemEvent> {
        match self {
            Notification::ItemCreated(item)
            | Notification::ItemRemoved(item)
            | Notification::ItemInodeMetadataModified(item)
            | Notification::ItemRenamed(item)
            | Notification::ItemDataModified(item)
            | Notification::ItemFinderInfoModified(item)
            | Notification::ItemOwnershipModified(item)
            | Notification::ItemXattrModified(item)
            | Notification::ItemCloned(item) => Some(item),
            _ => None,
        }
    }

    /// Returns the path this notification is about, if it is about one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Notification::StreamEventIdsWrapped | Notification::StreamHistoryDone => None,
            Notification::RootChanged { path, .. }
            | Notification::VolumeMounted { path, .. }
            | Notification::VolumeUnmounted { path, .. }
            | Notification::MustScanSubDirectories { path, .. }
            | Notification::GenericFolderChanged { path, .. } => Some(path),
            _ => self.item().map(|item| item.path.as_path()),
        }
    }

    /// Returns the record identifier, for notifications which carry one.
    pub fn event_id(&self) -> Option<EventId> {
        match self {
            Notification::VolumeMounted { event_id, .. }
            | Notification::VolumeUnmounted { event_id, .. }
            | Notification::MustScanSubDirectories { event_id, .. } => Some(*event_id),
            _ => self.item().map(|item| item.event_id),
        }
    }

    /// Returns the item kind, for per-item notifications.
    pub fn item_kind(&self) -> Option<ItemKind> {
        self.item().map(|item| item.kind)
    }

    /// Returns the origin marker, for notifications which carry one.
    pub fn own_event(&self) -> Option<bool> {
        match self {
            Notification::StreamEventIdsWrapped | Notification::StreamHistoryDone => None,
            Notification::RootChanged { own_event, .. }
            | Notification::VolumeMounted { own_event, .. }
            | Notification::VolumeUnmounted { own_event, .. }
            | Notification::MustScanSubDirectories { own_event, .. }
            | Notification::GenericFolderChanged { own_event, .. } => Some(*own_event),
            _ => self.item().map(|item| item.own_event),
        }
    }

    /// Returns whether some changes may have been missed. If true, you should assume anything
    /// under [`Notification::path`] might have been modified.
    pub fn needs_rescan(&self) -> bool {
        matches!(self, Notification::MustScanSubDirectories { .. })
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        if let Some(path) = self.path() {
            write!(f, " {}", path.display())?;
        }
        match self {
            Notification::MustScanSubDirectories { reason, .. } => write!(f, " ({reason})"),
            _ => match self.item_kind() {
                Some(kind) => write!(f, " ({kind})"),
                None => Ok(()),
            },
        }
    }
}

/// Fieldless counterpart of [`Notification`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NotificationKind {
    /// See [`Notification::StreamEventIdsWrapped`].
    StreamEventIdsWrapped,
    /// See [`Notification::StreamHistoryDone`].
    StreamHistoryDone,
    /// See [`Notification::RootChanged`].
    RootChanged,
    /// See [`Notification::VolumeMounted`].
    VolumeMounted,
    /// See [`Notification::VolumeUnmounted`].
    VolumeUnmounted,
    /// See [`Notification::MustScanSubDirectories`].
    MustScanSubDirectories,
    /// See [`Notification::ItemCreated`].
    ItemCreated,
    /// See [`Notification::ItemRemoved`].
    ItemRemoved,
    /// See [`Notification::ItemInodeMetadataModified`].
    ItemInodeMetadataModified,
    /// See [`Notification::ItemRenamed`].
    ItemRenamed,
    /// See [`Notification::ItemDataModified`].
    ItemDataModified,
    /// See [`Notification::ItemFinderInfoModified`].
    ItemFinderInfoModified,
    /// See [`Notification::ItemOwnershipModified`].
    ItemOwnershipModified,
    /// See [`Notification::ItemXattrModified`].
    ItemXattrModified,
    /// See [`Notification::ItemCloned`].
    ItemCloned,
    /// See [`Notification::GenericFolderChanged`].
    GenericFolderChanged,
}

impl NotificationKind {
    /// Returns whether notifications of this kind carry a path.
    pub fn requires_path(&self) -> bool {
        !matches!(
            self,
            NotificationKind::StreamEventIdsWrapped | NotificationKind::StreamHistoryDone
        )
    }

    /// Returns the single mask bit selecting this kind.
    pub fn mask(&self) -> NotificationMask {
        match self {
            NotificationKind::StreamEventIdsWrapped => NotificationMask::STREAM_IDS_WRAPPED,
            NotificationKind::StreamHistoryDone => NotificationMask::STREAM_HISTORY_DONE,
            NotificationKind::RootChanged => NotificationMask::ROOT_CHANGED,
            NotificationKind::VolumeMounted => NotificationMask::VOLUME_MOUNTED,
            NotificationKind::VolumeUnmounted => NotificationMask::VOLUME_UNMOUNTED,
            NotificationKind::MustScanSubDirectories => NotificationMask::MUST_SCAN_SUBDIRS,
            NotificationKind::ItemCreated => NotificationMask::ITEM_CREATED,
            NotificationKind::ItemRemoved => NotificationMask::ITEM_REMOVED,
            NotificationKind::ItemInodeMetadataModified => NotificationMask::ITEM_INODE_META,
            NotificationKind::ItemRenamed => NotificationMask::ITEM_RENAMED,
            NotificationKind::ItemDataModified => NotificationMask::ITEM_DATA,
            NotificationKind::ItemFinderInfoModified => NotificationMask::ITEM_FINDER_INFO,
            NotificationKind::ItemOwnershipModified => NotificationMask::ITEM_OWNERSHIP,
            NotificationKind::ItemXattrModified => NotificationMask::ITEM_XATTR,
            NotificationKind::ItemCloned => NotificationMask::ITEM_CLONED,
            NotificationKind::GenericFolderChanged => NotificationMask::GENERIC_FOLDER_CHANGED,
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotificationKind::StreamEventIdsWrapped => "stream event ids wrapped",
            NotificationKind::StreamHistoryDone => "stream history done",
            NotificationKind::RootChanged => "root changed",
            NotificationKind::VolumeMounted => "volume mounted",
            NotificationKind::VolumeUnmounted => "volume unmounted",
            NotificationKind::MustScanSubDirectories => "must scan sub-directories",
            NotificationKind::ItemCreated => "item created",
            NotificationKind::ItemRemoved => "item removed",
            NotificationKind::ItemInodeMetadataModified => "item inode metadata modified",
            NotificationKind::ItemRenamed => "item renamed",
            NotificationKind::ItemDataModified => "item data modified",
            NotificationKind::ItemFinderInfoModified => "item finder info modified",
            NotificationKind::ItemOwnershipModified => "item ownership modified",
            NotificationKind::ItemXattrModified => "item xattr modified",
            NotificationKind::ItemCloned => "item cloned",
            NotificationKind::GenericFolderChanged => "generic folder changed",
        })
    }
}

bitflags! {
    /// A bitmask specifying which notification kinds are delivered.
    ///
    /// Filtering happens in userspace, after decoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsevent_types::notification::NotificationMask;
    ///
    /// // Only creations and removals
    /// let mask = NotificationMask::ITEM_CREATED | NotificationMask::ITEM_REMOVED;
    ///
    /// // Default: everything
    /// assert_eq!(NotificationMask::default(), NotificationMask::ALL);
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct NotificationMask: u32 {
        /// Stream identifier counter wrap-arounds.
        const STREAM_IDS_WRAPPED = 1 << 0;

        /// End of the replayed history.
        const STREAM_HISTORY_DONE = 1 << 1;

        /// Watched root changes.
        const ROOT_CHANGED = 1 << 2;

        /// Volume mounts.
        const VOLUME_MOUNTED = 1 << 3;

        /// Volume unmounts.
        const VOLUME_UNMOUNTED = 1 << 4;

        /// Rescan demands.
        const MUST_SCAN_SUBDIRS = 1 << 5;

        /// Item creations.
        const ITEM_CREATED = 1 << 6;

        /// Item removals.
        const ITEM_REMOVED = 1 << 7;

        /// Inode metadata changes.
        const ITEM_INODE_META = 1 << 8;

        /// Renames.
        const ITEM_RENAMED = 1 << 9;

        /// Data changes.
        const ITEM_DATA = 1 << 10;

        /// Finder info changes.
        const ITEM_FINDER_INFO = 1 << 11;

        /// Ownership changes.
        const ITEM_OWNERSHIP = 1 << 12;

        /// Extended attribute changes.
        const ITEM_XATTR = 1 << 13;

        /// Clones.
        const ITEM_CLONED = 1 << 14;

        /// Plain folder changes.
        const GENERIC_FOLDER_CHANGED = 1 << 15;

        /// Stream-wide signals.
        const ALL_STREAM = Self::STREAM_IDS_WRAPPED.bits() | Self::STREAM_HISTORY_DONE.bits();

        /// Mounts and unmounts.
        const ALL_VOLUME = Self::VOLUME_MOUNTED.bits() | Self::VOLUME_UNMOUNTED.bits();

        /// All metadata changes of an item.
        const ALL_ITEM_META = Self::ITEM_INODE_META.bits()
            | Self::ITEM_FINDER_INFO.bits()
            | Self::ITEM_OWNERSHIP.bits()
            | Self::ITEM_XATTR.bits();

        /// All per-item notifications.
        const ALL_ITEM = Self::ITEM_CREATED.bits()
            | Self::ITEM_REMOVED.bits()
            | Self::ITEM_RENAMED.bits()
            | Self::ITEM_DATA.bits()
            | Self::ITEM_CLONED.bits()
            | Self::ALL_ITEM_META.bits();

        /// Everything.
        const ALL = Self::ALL_STREAM.bits()
            | Self::ROOT_CHANGED.bits()
            | Self::ALL_VOLUME.bits()
            | Self::MUST_SCAN_SUBDIRS.bits()
            | Self::ALL_ITEM.bits()
            | Self::GENERIC_FOLDER_CHANGED.bits();
    }
}

impl Default for NotificationMask {
    fn default() -> Self {
        NotificationMask::ALL
    }
}

impl NotificationMask {
    /// Returns whether the given notification passes this mask.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsevent_types::notification::{Notification, NotificationMask};
    ///
    /// let mask = NotificationMask::ALL_STREAM;
    /// assert!(mask.matches(&Notification::StreamHistoryDone));
    /// assert!(!NotificationMask::empty().matches(&Notification::StreamHistoryDone));
    /// ```
    pub fn matches(&self, notification: &Notification) -> bool {
        self.matches_kind(notification.kind())
    }

    /// Returns whether notifications of the given kind pass this mask.
    pub fn matches_kind(&self, kind: NotificationKind) -> bool {
        self.contains(kind.mask())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn item(kind: ItemKind) -> ItemEvent {
        ItemEvent::new("/tmp/a.txt", kind, 42, false)
    }

    #[test]
    fn accessors_on_item_notifications() {
        let n = Notification::ItemCreated(item(ItemKind::File));
        assert_eq!(n.kind(), NotificationKind::ItemCreated);
        assert_eq!(n.path(), Some(Path::new("/tmp/a.txt")));
        assert_eq!(n.event_id(), Some(42));
        assert_eq!(n.item_kind(), Some(ItemKind::File));
        assert_eq!(n.own_event(), Some(false));
        assert!(!n.needs_rescan());
    }

    #[test]
    fn display_notifications() {
        assert_eq!(
            Notification::ItemRemoved(item(ItemKind::Directory)).to_string(),
            "item removed /tmp/a.txt (directory)"
        );
        assert_eq!(
            Notification::MustScanSubDirectories {
                path: "/w".into(),
                reason: ScanReason::UserDropped,
                event_id: 3,
                own_event: false,
            }
            .to_string(),
            "must scan sub-directories /w (user dropped)"
        );
        assert_eq!(
            Notification::StreamHistoryDone.to_string(),
            "stream history done"
        );
    }

    #[test]
    fn stream_signals_carry_nothing() {
        for n in [
            Notification::StreamEventIdsWrapped,
            Notification::StreamHistoryDone,
        ] {
            assert_eq!(n.path(), None);
            assert_eq!(n.event_id(), None);
            assert_eq!(n.own_event(), None);
            assert_eq!(n.item_kind(), None);
        }
    }

    #[test]
    fn root_changed_has_no_event_id() {
        let n = Notification::RootChanged {
            path: "/watched".into(),
            own_event: true,
        };
        assert_eq!(n.event_id(), None);
        assert_eq!(n.own_event(), Some(true));
        assert_eq!(n.path(), Some(Path::new("/watched")));
    }

    #[test]
    fn must_scan_needs_rescan() {
        let n = Notification::MustScanSubDirectories {
            path: "/watched".into(),
            reason: ScanReason::KernelDropped,
            event_id: 7,
            own_event: false,
        };
        assert!(n.needs_rescan());
        assert_eq!(n.event_id(), Some(7));
    }

    #[rustfmt::skip]
    #[rstest]
    #[case(NotificationKind::StreamEventIdsWrapped, false)]
    #[case(NotificationKind::StreamHistoryDone, false)]
    #[case(NotificationKind::RootChanged, true)]
    #[case(NotificationKind::VolumeMounted, true)]
    #[case(NotificationKind::MustScanSubDirectories, true)]
    #[case(NotificationKind::ItemCloned, true)]
    #[case(NotificationKind::GenericFolderChanged, true)]
    fn requires_path(#[case] kind: NotificationKind, #[case] expected: bool) {
        assert_eq!(kind.requires_path(), expected);
    }

    #[test]
    fn default_mask_is_all() {
        assert_eq!(NotificationMask::default(), NotificationMask::ALL);
    }

    #[test]
    fn every_kind_has_a_distinct_bit() {
        let kinds = [
            NotificationKind::StreamEventIdsWrapped,
            NotificationKind::StreamHistoryDone,
            NotificationKind::RootChanged,
            NotificationKind::VolumeMounted,
            NotificationKind::VolumeUnmounted,
            NotificationKind::MustScanSubDirectories,
            NotificationKind::ItemCreated,
            NotificationKind::ItemRemoved,
            NotificationKind::ItemInodeMetadataModified,
            NotificationKind::ItemRenamed,
            NotificationKind::ItemDataModified,
            NotificationKind::ItemFinderInfoModified,
            NotificationKind::ItemOwnershipModified,
            NotificationKind::ItemXattrModified,
            NotificationKind::ItemCloned,
            NotificationKind::GenericFolderChanged,
        ];
        let mut seen = NotificationMask::empty();
        for kind in kinds {
            assert!(!seen.intersects(kind.mask()), "{kind} shares a bit");
            seen |= kind.mask();
        }
        assert_eq!(seen, NotificationMask::ALL);
    }

    #[test]
    fn item_mask_excludes_structural_kinds() {
        let mask = NotificationMask::ALL_ITEM;
        assert!(mask.matches(&Notification::ItemRenamed(item(ItemKind::Directory))));
        assert!(mask.matches(&Notification::ItemXattrModified(item(ItemKind::File))));
        assert!(!mask.matches(&Notification::StreamHistoryDone));
        assert!(!mask.matches(&Notification::GenericFolderChanged {
            path: "/tmp".into(),
            own_event: false,
        }));
    }

    #[test]
    fn empty_mask_matches_nothing() {
        let empty = NotificationMask::empty();
        assert!(!empty.matches(&Notification::StreamEventIdsWrapped));
        assert!(!empty.matches(&Notification::ItemCreated(item(ItemKind::File))));
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(ItemKind::LastHardlink.to_string(), "last hardlink");
        assert_eq!(ScanReason::UserDropped.to_string(), "user dropped");
        assert_eq!(
            NotificationKind::MustScanSubDirectories.to_string(),
            "must scan sub-directories"
        );
    }
}
