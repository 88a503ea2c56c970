//! Closure based handler

use crate::{Error, NotificationHandler};
use fsevent_types::notification::{EventId, ItemEvent, NotificationKind, ScanReason};
use std::{fmt, path::Path};

type SignalFn<'a> = Box<dyn FnMut() + 'a>;
type PathFn<'a> = Box<dyn FnMut(&Path, bool) + 'a>;
type VolumeFn<'a> = Box<dyn FnMut(&Path, EventId, bool) + 'a>;
type RescanFn<'a> = Box<dyn FnMut(&Path, ScanReason, EventId, bool) + 'a>;
type ItemFn<'a> = Box<dyn FnMut(&ItemEvent) + 'a>;
type ErrorFn<'a> = Box<dyn FnMut(&Error) + 'a>;

/// A table of optional closures, one per notification kind.
///
/// Notifications of a kind without a registered closure are ignored.
///
/// ```
/// use fsevent_dispatch::{dispatch, Callbacks, RawRecord, StreamFlags};
/// use std::path::Path;
///
/// let mut rescans = 0;
/// let mut callbacks = Callbacks::new()
///     .on_must_scan_sub_directories(|_path, _reason, _id, _own| rescans += 1);
///
/// let flags = (StreamFlags::MUST_SCAN_SUBDIRS | StreamFlags::USER_DROPPED).bits();
/// dispatch([RawRecord::new(Path::new("/w"), 3, flags)], &mut callbacks);
/// drop(callbacks);
///
/// assert_eq!(rescans, 1);
/// ```
#[derive(Default)]
pub struct Callbacks<'a> {
    stream_event_ids_wrapped: Option<SignalFn<'a>>,
    stream_history_done: Option<SignalFn<'a>>,
    root_changed: Option<PathFn<'a>>,
    volume_mounted: Option<VolumeFn<'a>>,
    volume_unmounted: Option<VolumeFn<'a>>,
    must_scan_sub_directories: Option<RescanFn<'a>>,
    item_created: Option<ItemFn<'a>>,
    item_removed: Option<ItemFn<'a>>,
    item_inode_metadata_modified: Option<ItemFn<'a>>,
    item_renamed: Option<ItemFn<'a>>,
    item_data_modified: Option<ItemFn<'a>>,
    item_finder_info_modified: Option<ItemFn<'a>>,
    item_ownership_modified: Option<ItemFn<'a>>,
    item_xattr_modified: Option<ItemFn<'a>>,
    item_cloned: Option<ItemFn<'a>>,
    generic_folder_changed: Option<PathFn<'a>>,
    malformed_record: Option<ErrorFn<'a>>,
}

impl<'a> Callbacks<'a> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the identifier counter wraps around.
    pub fn on_stream_event_ids_wrapped(mut self, f: impl FnMut() + 'a) -> Self {
        self.stream_event_ids_wrapped = Some(Box::new(f));
        self
    }

    /// Called when the replay of historical events is done.
    pub fn on_stream_history_done(mut self, f: impl FnMut() + 'a) -> Self {
        self.stream_history_done = Some(Box::new(f));
        self
    }

    /// Called with the path and origin marker when the watched root changes.
    pub fn on_root_changed(mut self, f: impl FnMut(&Path, bool) + 'a) -> Self {
        self.root_changed = Some(Box::new(f));
        self
    }

    /// Called with the path, identifier and origin marker when a volume is mounted.
    pub fn on_volume_mounted(mut self, f: impl FnMut(&Path, EventId, bool) + 'a) -> Self {
        self.volume_mounted = Some(Box::new(f));
        self
    }

    /// Called with the path, identifier and origin marker when a volume is unmounted.
    pub fn on_volume_unmounted(mut self, f: impl FnMut(&Path, EventId, bool) + 'a) -> Self {
        self.volume_unmounted = Some(Box::new(f));
        self
    }

    /// Called when a subtree must be scanned again.
    pub fn on_must_scan_sub_directories(
        mut self,
        f: impl FnMut(&Path, ScanReason, EventId, bool) + 'a,
    ) -> Self {
        self.must_scan_sub_directories = Some(Box::new(f));
        self
    }

    /// Called when an item is created.
    pub fn on_item_created(mut self, f: impl FnMut(&ItemEvent) + 'a) -> Self {
        self.item_created = Some(Box::new(f));
        self
    }

    /// Called when an item is removed.
    pub fn on_item_removed(mut self, f: impl FnMut(&ItemEvent) + 'a) -> Self {
        self.item_removed = Some(Box::new(f));
        self
    }

    /// Called when the inode metadata of an item changes.
    pub fn on_item_inode_metadata_modified(mut self, f: impl FnMut(&ItemEvent) + 'a) -> Self {
        self.item_inode_metadata_modified = Some(Box::new(f));
        self
    }

    /// Called when an item is renamed.
    pub fn on_item_renamed(mut self, f: impl FnMut(&ItemEvent) + 'a) -> Self {
        self.item_renamed = Some(Box::new(f));
        self
    }

    /// Called when the data of an item changes.
    pub fn on_item_data_modified(mut self, f: impl FnMut(&ItemEvent) + 'a) -> Self {
        self.item_data_modified = Some(Box::new(f));
        self
    }

    /// Called when the Finder info of an item changes.
    pub fn on_item_finder_info_modified(mut self, f: impl FnMut(&ItemEvent) + 'a) -> Self {
        self.item_finder_info_modified = Some(Box::new(f));
        self
    }

    /// Called when the ownership of an item changes.
    pub fn on_item_ownership_modified(mut self, f: impl FnMut(&ItemEvent) + 'a) -> Self {
        self.item_ownership_modified = Some(Box::new(f));
        self
    }

    /// Called when an extended attribute of an item changes.
    pub fn on_item_xattr_modified(mut self, f: impl FnMut(&ItemEvent) + 'a) -> Self {
        self.item_xattr_modified = Some(Box::new(f));
        self
    }

    /// Called when an item is cloned.
    pub fn on_item_cloned(mut self, f: impl FnMut(&ItemEvent) + 'a) -> Self {
        self.item_cloned = Some(Box::new(f));
        self
    }

    /// Called with the path and origin marker when a record matches nothing more precise.
    pub fn on_generic_folder_changed(mut self, f: impl FnMut(&Path, bool) + 'a) -> Self {
        self.generic_folder_changed = Some(Box::new(f));
        self
    }

    /// Called when a record cannot be decoded completely.
    pub fn on_malformed_record(mut self, f: impl FnMut(&Error) + 'a) -> Self {
        self.malformed_record = Some(Box::new(f));
        self
    }

    /// Returns whether a closure is registered for the given kind.
    pub fn is_registered(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::StreamEventIdsWrapped => self.stream_event_ids_wrapped.is_some(),
            NotificationKind::StreamHistoryDone => self.stream_history_done.is_some(),
            NotificationKind::RootChanged => self.root_changed.is_some(),
            NotificationKind::VolumeMounted => self.volume_mounted.is_some(),
            NotificationKind::VolumeUnmounted => self.volume_unmounted.is_some(),
            NotificationKind::MustScanSubDirectories => self.must_scan_sub_directories.is_some(),
            NotificationKind::ItemCreated => self.item_created.is_some(),
            NotificationKind::ItemRemoved => self.item_removed.is_some(),
            NotificationKind::ItemInodeMetadataModified => {
                self.item_inode_metadata_modified.is_some()
            }
            NotificationKind::ItemRenamed => self.item_renamed.is_some(),
            NotificationKind::ItemDataModified => self.item_data_modified.is_some(),
            NotificationKind::ItemFinderInfoModified => self.item_finder_info_modified.is_some(),
            NotificationKind::ItemOwnershipModified => self.item_ownership_modified.is_some(),
            NotificationKind::ItemXattrModified => self.item_xattr_modified.is_some(),
            NotificationKind::ItemCloned => self.item_cloned.is_some(),
            NotificationKind::GenericFolderChanged => self.generic_folder_changed.is_some(),
        }
    }
}

impl fmt::Debug for Callbacks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("stream_event_ids_wrapped", &self.stream_event_ids_wrapped.is_some())
            .field("stream_history_done", &self.stream_history_done.is_some())
            .field("root_changed", &self.root_changed.is_some())
            .field("volume_mounted", &self.volume_mounted.is_some())
            .field("volume_unmounted", &self.volume_unmounted.is_some())
            .field("must_scan_sub_directories", &self.must_scan_sub_directories.is_some())
            .field("item_created", &self.item_created.is_some())
            .field("item_removed", &self.item_removed.is_some())
            .field(
                "item_inode_metadata_modified",
                &self.item_inode_metadata_modified.is_some(),
            )
            .field("item_renamed", &self.item_renamed.is_some())
            .field("item_data_modified", &self.item_data_modified.is_some())
            .field("item_finder_info_modified", &self.item_finder_info_modified.is_some())
            .field("item_ownership_modified", &self.item_ownership_modified.is_some())
            .field("item_xattr_modified", &self.item_xattr_modified.is_some())
            .field("item_cloned", &self.item_cloned.is_some())
            .field("generic_folder_changed", &self.generic_folder_changed.is_some())
            .field("malformed_record", &self.malformed_record.is_some())
            .finish()
    }
}

impl NotificationHandler for Callbacks<'_> {
    fn stream_event_ids_wrapped(&mut self) {
        if let Some(f) = self.stream_event_ids_wrapped.as_mut() {
            f();
        }
    }

    fn stream_history_done(&mut self) {
        if let Some(f) = self.stream_history_done.as_mut() {
            f();
        }
    }

    fn root_changed(&mut self, path: &Path, own_event: bool) {
        if let Some(f) = self.root_changed.as_mut() {
            f(path, own_event);
        }
    }

    fn volume_mounted(&mut self, path: &Path, event_id: EventId, own_event: bool) {
        if let Some(f) = self.volume_mounted.as_mut() {
            f(path, event_id, own_event);
        }
    }

    fn volume_unmounted(&mut self, path: &Path, event_id: EventId, own_event: bool) {
        if let Some(f) = self.volume_unmounted.as_mut() {
            f(path, event_id, own_event);
        }
    }

    fn must_scan_sub_directories(
        &mut self,
        path: &Path,
        reason: ScanReason,
        event_id: EventId,
        own_event: bool,
    ) {
        if let Some(f) = self.must_scan_sub_directories.as_mut() {
            f(path, reason, event_id, own_event);
        }
    }

    fn item_created(&mut self, item: &ItemEvent) {
        if let Some(f) = self.item_created.as_mut() {
            f(item);
        }
    }

    fn item_removed(&mut self, item: &ItemEvent) {
        if let Some(f) = self.item_removed.as_mut() {
            f(item);
        }
    }

    fn item_inode_metadata_modified(&mut self, item: &ItemEvent) {
        if let Some(f) = self.item_inode_metadata_modified.as_mut() {
            f(item);
        }
    }

    fn item_renamed(&mut self, item: &ItemEvent) {
        if let Some(f) = self.item_renamed.as_mut() {
            f(item);
        }
    }

    fn item_data_modified(&mut self, item: &ItemEvent) {
        if let Some(f) = self.item_data_modified.as_mut() {
            f(item);
        }
    }

    fn item_finder_info_modified(&mut self, item: &ItemEvent) {
        if let Some(f) = self.item_finder_info_modified.as_mut() {
            f(item);
        }
    }

    fn item_ownership_modified(&mut self, item: &ItemEvent) {
        if let Some(f) = self.item_ownership_modified.as_mut() {
            f(item);
        }
    }

    fn item_xattr_modified(&mut self, item: &ItemEvent) {
        if let Some(f) = self.item_xattr_modified.as_mut() {
            f(item);
        }
    }

    fn item_cloned(&mut self, item: &ItemEvent) {
        if let Some(f) = self.item_cloned.as_mut() {
            f(item);
        }
    }

    fn generic_folder_changed(&mut self, path: &Path, own_event: bool) {
        if let Some(f) = self.generic_folder_changed.as_mut() {
            f(path, own_event);
        }
    }

    fn malformed_record(&mut self, error: &Error) {
        if let Some(f) = self.malformed_record.as_mut() {
            f(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dispatch, RawRecord, StreamFlags};
    use fsevent_types::notification::ItemKind;
    use std::{cell::RefCell, path::PathBuf};

    use pretty_assertions::assert_eq;

    #[test]
    fn unregistered_kinds_are_ignored() {
        let mut callbacks = Callbacks::new();
        let summary = dispatch(
            [
                RawRecord::new(Path::new("/a"), 1, StreamFlags::all().bits()),
                RawRecord::new(Path::new("/b"), 2, StreamFlags::ITEM_CLONED.bits()),
            ],
            &mut callbacks,
        );
        assert_eq!(summary.delivered, 4);
    }

    #[test]
    fn closures_receive_the_record_fields() {
        let log = RefCell::new(Vec::new());
        let mut callbacks = Callbacks::new()
            .on_root_changed(|path, own| log.borrow_mut().push(format!("root {path:?} {own}")))
            .on_volume_unmounted(|path, id, _| {
                log.borrow_mut().push(format!("unmount {path:?} {id}"))
            })
            .on_item_created(|item| log.borrow_mut().push(format!("created {:?}", item.kind)))
            .on_item_data_modified(|item| {
                log.borrow_mut().push(format!("modified {:?}", item.kind))
            });

        let created_modified = (StreamFlags::ITEM_CREATED
            | StreamFlags::ITEM_MODIFIED
            | StreamFlags::IS_SYMLINK)
            .bits();
        dispatch(
            [
                RawRecord::new(
                    Path::new("/r"),
                    0,
                    (StreamFlags::ROOT_CHANGED | StreamFlags::OWN_EVENT).bits(),
                ),
                RawRecord::new(Path::new("/Volumes/U"), 8, StreamFlags::UNMOUNT.bits()),
                RawRecord::new(Path::new("/l"), 9, created_modified),
            ],
            &mut callbacks,
        );
        drop(callbacks);

        assert_eq!(
            log.into_inner(),
            [
                r#"root "/r" true"#,
                r#"unmount "/Volumes/U" 8"#,
                "created Symlink",
                "modified Symlink",
            ]
        );
    }

    #[test]
    fn malformed_record_closure() {
        let mut errors = Vec::new();
        let mut items = Vec::<PathBuf>::new();
        {
            let mut callbacks = Callbacks::new()
                .on_malformed_record(|e| errors.push(e.clone()))
                .on_item_removed(|item| items.push(item.path.clone()));
            dispatch(
                [RawRecord::new(
                    Path::new(""),
                    4,
                    (StreamFlags::ITEM_REMOVED | StreamFlags::IS_FILE).bits(),
                )],
                &mut callbacks,
            );
        }
        assert!(items.is_empty());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].event_id, Some(4));
    }

    #[test]
    fn hardlink_kinds_are_passed_through() {
        let mut kinds = Vec::new();
        {
            let mut callbacks = Callbacks::new().on_item_removed(|item| kinds.push(item.kind));
            dispatch(
                [
                    RawRecord::new(
                        Path::new("/h"),
                        1,
                        (StreamFlags::ITEM_REMOVED | StreamFlags::IS_HARDLINK).bits(),
                    ),
                    RawRecord::new(
                        Path::new("/h2"),
                        2,
                        (StreamFlags::ITEM_REMOVED | StreamFlags::IS_LAST_HARDLINK).bits(),
                    ),
                ],
                &mut callbacks,
            );
        }
        assert_eq!(kinds, [ItemKind::Hardlink, ItemKind::LastHardlink]);
    }

    #[test]
    fn is_registered() {
        let callbacks = Callbacks::new().on_item_cloned(|_| {});
        assert!(callbacks.is_registered(NotificationKind::ItemCloned));
        assert!(!callbacks.is_registered(NotificationKind::ItemCreated));
    }
}
