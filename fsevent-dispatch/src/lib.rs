//! Typed decoding and dispatching of macOS FSEvents notifications
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! fsevent-dispatch = "0.1.0"
//! ```
//!
//! The FSEvents service hands its client batches of raw records, each one a path, a monotonically
//! increasing event identifier and a bitmask of flags. This crate turns every record into the
//! ordered [`Notification`]s its flags describe, and routes them to a [`NotificationHandler`].
//! Creating streams and running the callback thread is left to the caller; this crate starts
//! where the service's callback hands over its arrays.
//!
//! ## Features
//!
//! List of compilation features, see below for details
//!
//! - `serde` for serialization of notifications
//! - `crossbeam-channel` to use a `crossbeam_channel::Sender` as a handler
//!
//! ### Serde
//!
//! Notifications are serializable via [serde](https://serde.rs) if the `serde` feature is enabled:
//!
//! ```toml
//! fsevent-dispatch = { version = "0.1.0", features = ["serde"] }
//! ```
//!
//! # Known Problems
//!
//! ### Coalesced flags
//!
//! The service coalesces changes to the same path. A record can carry, for example, both the
//! created and the removed bit with no way to tell in which order they happened. Each set bit is
//! reported as its own notification, in a fixed order which says nothing about the order of the
//! underlying changes. Check the file system if the final state matters.
//!
//! ### Own events
//!
//! The origin marker of a notification is only meaningful when the stream was created with
//! self-marking enabled. It is reported as-is otherwise.
//!
//! # Examples
//!
//! ```
//! use fsevent_dispatch::{dispatch_batch_with, notification::Notification, Result};
//! use std::sync::mpsc;
//!
//! fn main() -> Result<()> {
//!     let (tx, rx) = mpsc::channel::<Result<Notification>>();
//!
//!     // The three parallel arrays handed over by the service callback. A `Sender` can be used
//!     // as a handler directly, as can a closure or any type the trait is implemented for.
//!     let paths = ["/Users/me/project/main.rs"];
//!     let ids = [1042];
//!     let flags = [0x0001_1100]; // created, modified, is file
//!
//!     dispatch_batch_with(&paths, &ids, &flags, &mut tx.clone())?;
//!     drop(tx);
//!
//!     for res in rx {
//!         match res {
//!             Ok(notification) => println!("notification: {notification}"),
//!             Err(e) => println!("malformed record: {e}"),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## With callbacks
//!
//! Handlers which are only interested in some notifications can implement just the matching
//! methods of [`NotificationHandler`], or register closures on a [`Callbacks`] table:
//!
//! ```
//! use fsevent_dispatch::{dispatch, Callbacks, RawRecord, StreamFlags};
//! use std::path::Path;
//!
//! let mut created = Vec::new();
//! let mut callbacks = Callbacks::new().on_item_created(|item| created.push(item.path.clone()));
//!
//! let flags = (StreamFlags::ITEM_CREATED | StreamFlags::IS_DIR).bits();
//! dispatch([RawRecord::new(Path::new("/tmp/new"), 7, flags)], &mut callbacks);
//! drop(callbacks);
//!
//! assert_eq!(created, [Path::new("/tmp/new")]);
//! ```

#![deny(missing_docs)]

pub use callbacks::Callbacks;
pub use config::Config;
pub use decode::{classify, decode, MAX_NOTIFICATIONS_PER_RECORD};
pub use dispatch::{dispatch, DispatchSummary, Dispatcher};
pub use error::{Error, ErrorKind, Result};
pub use flags::StreamFlags;
pub use fsevent_types::notification::{
    self, EventId, ItemEvent, ItemKind, Notification, NotificationKind, NotificationMask,
    ScanReason,
};
pub use record::{records, RawRecord};
use std::path::Path;

mod callbacks;
mod config;
mod decode;
mod dispatch;
mod error;
mod flags;
mod record;

/// The set of requirements for notification handlers.
///
/// Every method has an empty default implementation, so a handler only implements what it is
/// interested in. By default [`handle_notification`](NotificationHandler::handle_notification)
/// calls the method matching the notification's variant; overriding it receives every
/// notification whole instead.
///
/// Handlers are borrowed for the duration of a dispatch and always called on the dispatching
/// thread, one notification at a time and in order.
///
/// # Example implementation
///
/// ```no_run
/// use fsevent_dispatch::{ItemEvent, NotificationHandler};
/// use std::path::Path;
///
/// /// Prints removals and rescan demands
/// struct Printer;
///
/// impl NotificationHandler for Printer {
///     fn item_removed(&mut self, item: &ItemEvent) {
///         println!("removed {} {:?}", item.kind, item.path);
///     }
///
///     fn generic_folder_changed(&mut self, path: &Path, _own_event: bool) {
///         println!("something changed in {path:?}");
///     }
/// }
/// ```
#[allow(unused_variables)]
pub trait NotificationHandler {
    /// Handles a notification.
    fn handle_notification(&mut self, notification: Notification) {
        match &notification {
            Notification::StreamEventIdsWrapped => self.stream_event_ids_wrapped(),
            Notification::StreamHistoryDone => self.stream_history_done(),
            Notification::RootChanged { path, own_event } => self.root_changed(path, *own_event),
            Notification::VolumeMounted {
                path,
                event_id,
                own_event,
            } => self.volume_mounted(path, *event_id, *own_event),
            Notification::VolumeUnmounted {
                path,
                event_id,
                own_event,
            } => self.volume_unmounted(path, *event_id, *own_event),
            Notification::MustScanSubDirectories {
                path,
                reason,
                event_id,
                own_event,
            } => self.must_scan_sub_directories(path, *reason, *event_id, *own_event),
            Notification::ItemCreated(item) => self.item_created(item),
            Notification::ItemRemoved(item) => self.item_removed(item),
            Notification::ItemInodeMetadataModified(item) => {
                self.item_inode_metadata_modified(item)
            }
            Notification::ItemRenamed(item) => self.item_renamed(item),
            Notification::ItemDataModified(item) => self.item_data_modified(item),
            Notification::ItemFinderInfoModified(item) => self.item_finder_info_modified(item),
            Notification::ItemOwnershipModified(item) => self.item_ownership_modified(item),
            Notification::ItemXattrModified(item) => self.item_xattr_modified(item),
            Notification::ItemCloned(item) => self.item_cloned(item),
            Notification::GenericFolderChanged { path, own_event } => {
                self.generic_folder_changed(path, *own_event)
            }
        }
    }

    /// The stream's identifier counter wrapped around.
    fn stream_event_ids_wrapped(&mut self) {}

    /// Replay of historical events is done.
    fn stream_history_done(&mut self) {}

    /// The watched root, or one of its ancestors, was moved, renamed or removed.
    fn root_changed(&mut self, path: &Path, own_event: bool) {}

    /// A volume was mounted below the watched root.
    fn volume_mounted(&mut self, path: &Path, event_id: EventId, own_event: bool) {}

    /// A volume was unmounted below the watched root.
    fn volume_unmounted(&mut self, path: &Path, event_id: EventId, own_event: bool) {}

    /// Changes below `path` were lost and it must be scanned again.
    fn must_scan_sub_directories(
        &mut self,
        path: &Path,
        reason: ScanReason,
        event_id: EventId,
        own_event: bool,
    ) {
    }

    /// An item was created.
    fn item_created(&mut self, item: &ItemEvent) {}

    /// An item was removed.
    fn item_removed(&mut self, item: &ItemEvent) {}

    /// The inode metadata of an item changed.
    fn item_inode_metadata_modified(&mut self, item: &ItemEvent) {}

    /// An item was renamed.
    ///
    /// The service reports both ends of a rename with this notification and does not pair them.
    fn item_renamed(&mut self, item: &ItemEvent) {}

    /// The data of an item changed.
    fn item_data_modified(&mut self, item: &ItemEvent) {}

    /// The Finder info of an item changed.
    fn item_finder_info_modified(&mut self, item: &ItemEvent) {}

    /// The ownership of an item changed.
    fn item_ownership_modified(&mut self, item: &ItemEvent) {}

    /// An extended attribute of an item changed.
    fn item_xattr_modified(&mut self, item: &ItemEvent) {}

    /// An item was cloned.
    fn item_cloned(&mut self, item: &ItemEvent) {}

    /// Something changed in a folder, with no more precise information.
    fn generic_folder_changed(&mut self, path: &Path, own_event: bool) {}

    /// A record could not be decoded completely.
    ///
    /// The notifications of the record which did not need its path have already been handled.
    fn malformed_record(&mut self, error: &Error) {}
}

impl<F> NotificationHandler for F
where
    F: FnMut(Result<Notification>),
{
    fn handle_notification(&mut self, notification: Notification) {
        (self)(Ok(notification));
    }

    fn malformed_record(&mut self, error: &Error) {
        (self)(Err(error.clone()));
    }
}

#[cfg(feature = "crossbeam-channel")]
impl NotificationHandler for crossbeam_channel::Sender<Result<Notification>> {
    fn handle_notification(&mut self, notification: Notification) {
        let _ = self.send(Ok(notification));
    }

    fn malformed_record(&mut self, error: &Error) {
        let _ = self.send(Err(error.clone()));
    }
}

impl NotificationHandler for std::sync::mpsc::Sender<Result<Notification>> {
    fn handle_notification(&mut self, notification: Notification) {
        let _ = self.send(Ok(notification));
    }

    fn malformed_record(&mut self, error: &Error) {
        let _ = self.send(Err(error.clone()));
    }
}

/// Dispatches one delivery given as three parallel sequences, with the default configuration.
///
/// See [`Dispatcher::dispatch_batch`].
pub fn dispatch_batch_with<P, H>(
    paths: &[P],
    ids: &[EventId],
    flags: &[u32],
    handler: &mut H,
) -> Result<DispatchSummary>
where
    P: AsRef<Path>,
    H: NotificationHandler + ?Sized,
{
    Dispatcher::default().dispatch_batch(paths, ids, flags, handler)
}
