//! Raw FSEvents event flags.

use fsevent_types::notification::{ItemKind, ScanReason};

bitflags::bitflags! {
    /// The per-record flag bitmask delivered by the notification service.
    ///
    /// Values are those of the `kFSEventStreamEventFlag*` constants. Several bits may be set on
    /// one record. Bits without a constant here are kept as-is so they can be reported.
    #[repr(C)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StreamFlags: u32 {
        /// Events were coalesced or dropped; the subtree must be scanned again.
        const MUST_SCAN_SUBDIRS = 0x0000_0001;
        /// Rescan hint: events were dropped in user space.
        const USER_DROPPED = 0x0000_0002;
        /// Rescan hint: events were dropped in the kernel.
        const KERNEL_DROPPED = 0x0000_0004;
        /// The event identifier counter wrapped around.
        const IDS_WRAPPED = 0x0000_0008;
        /// Sentinel marking the end of replayed historical events.
        const HISTORY_DONE = 0x0000_0010;
        /// The watched root changed.
        const ROOT_CHANGED = 0x0000_0020;
        /// A volume was mounted.
        const MOUNT = 0x0000_0040;
        /// A volume was unmounted.
        const UNMOUNT = 0x0000_0080;
        /// An item was created.
        const ITEM_CREATED = 0x0000_0100;
        /// An item was removed.
        const ITEM_REMOVED = 0x0000_0200;
        /// Inode metadata of an item changed.
        const INODE_META_MOD = 0x0000_0400;
        /// An item was renamed.
        const ITEM_RENAMED = 0x0000_0800;
        /// The data of an item changed.
        const ITEM_MODIFIED = 0x0000_1000;
        /// The Finder info of an item changed.
        const FINDER_INFO_MOD = 0x0000_2000;
        /// The ownership of an item changed.
        const ITEM_CHANGE_OWNER = 0x0000_4000;
        /// An extended attribute of an item changed.
        const ITEM_XATTR_MOD = 0x0000_8000;
        /// The item is a regular file.
        const IS_FILE = 0x0001_0000;
        /// The item is a directory.
        const IS_DIR = 0x0002_0000;
        /// The item is a symbolic link.
        const IS_SYMLINK = 0x0004_0000;
        /// The change was caused by the watching process.
        const OWN_EVENT = 0x0008_0000;
        /// The item is a hard link.
        const IS_HARDLINK = 0x0010_0000;
        /// The item is the last hard link.
        const IS_LAST_HARDLINK = 0x0020_0000;
        /// An item was cloned.
        const ITEM_CLONED = 0x0040_0000;

        /// Signals that exclude any item-level reporting on the same record.
        const STREAM_SIGNALS = Self::IDS_WRAPPED.bits()
            | Self::HISTORY_DONE.bits()
            | Self::ROOT_CHANGED.bits();

        /// Any bit asking for a rescan.
        const RESCAN = Self::MUST_SCAN_SUBDIRS.bits()
            | Self::USER_DROPPED.bits()
            | Self::KERNEL_DROPPED.bits();

        /// Bits describing the kind of the item.
        const ITEM_KIND = Self::IS_FILE.bits()
            | Self::IS_DIR.bits()
            | Self::IS_SYMLINK.bits()
            | Self::IS_HARDLINK.bits()
            | Self::IS_LAST_HARDLINK.bits();
    }
}

impl StreamFlags {
    /// Wraps a raw mask, keeping unknown bits.
    pub fn from_raw(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }

    /// Returns the kind of item the record is about.
    ///
    /// Exactly one "is-*" bit must be set for the kind to be known.
    pub fn item_kind(&self) -> ItemKind {
        let kind = *self & StreamFlags::ITEM_KIND;
        if kind == StreamFlags::IS_FILE {
            ItemKind::File
        } else if kind == StreamFlags::IS_DIR {
            ItemKind::Directory
        } else if kind == StreamFlags::IS_SYMLINK {
            ItemKind::Symlink
        } else if kind == StreamFlags::IS_HARDLINK {
            ItemKind::Hardlink
        } else if kind == StreamFlags::IS_LAST_HARDLINK {
            ItemKind::LastHardlink
        } else {
            ItemKind::Unknown
        }
    }

    /// Returns the rescan reason hinted at by the drop bits.
    pub fn scan_reason(&self) -> ScanReason {
        match (
            self.contains(StreamFlags::USER_DROPPED),
            self.contains(StreamFlags::KERNEL_DROPPED),
        ) {
            (true, false) => ScanReason::UserDropped,
            (false, true) => ScanReason::KernelDropped,
            _ => ScanReason::Unknown,
        }
    }

    /// Returns the literal value of the own-event bit.
    pub fn own_event(&self) -> bool {
        self.contains(StreamFlags::OWN_EVENT)
    }

    /// Returns the bits this crate has no constant for.
    pub fn unknown_bits(&self) -> u32 {
        self.bits() & !StreamFlags::all().bits()
    }
}

impl From<u32> for StreamFlags {
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}
