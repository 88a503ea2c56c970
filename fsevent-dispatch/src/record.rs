//! Raw records as handed over by the notification service.

use crate::{Error, Result, StreamFlags};
use fsevent_types::notification::EventId;
use std::path::Path;

/// One raw record of a notification batch.
///
/// Records borrow their path from the caller and are never retained past a dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawRecord<'a> {
    /// Path of the record, or `None` if it could not be decoded.
    pub path: Option<&'a Path>,

    /// Identifier of the record; `0` means there is no meaningful identifier.
    pub event_id: EventId,

    /// Raw flag mask.
    pub flags: u32,
}

impl<'a> RawRecord<'a> {
    /// Creates a new record.
    pub fn new(path: &'a Path, event_id: EventId, flags: u32) -> Self {
        Self {
            path: Some(path),
            event_id,
            flags,
        }
    }

    /// Creates a record whose path could not be decoded.
    pub fn without_path(event_id: EventId, flags: u32) -> Self {
        Self {
            path: None,
            event_id,
            flags,
        }
    }

    /// Creates a record from the raw bytes of a C string path, without its terminator.
    #[cfg(unix)]
    pub fn from_bytes(path: &'a [u8], event_id: EventId, flags: u32) -> Self {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        Self::new(Path::new(OsStr::from_bytes(path)), event_id, flags)
    }

    /// Returns the flags as [`StreamFlags`], unknown bits included.
    pub fn stream_flags(&self) -> StreamFlags {
        StreamFlags::from_raw(self.flags)
    }

    /// Returns the path if it is present and non-empty.
    pub fn usable_path(&self) -> Option<&'a Path> {
        self.path.filter(|path| !path.as_os_str().is_empty())
    }
}

/// Zips the three parallel sequences of a batch delivery into records.
///
/// # Errors
///
/// Returns [`ErrorKind::BatchLengthMismatch`](crate::ErrorKind::BatchLengthMismatch) if the
/// sequences are not all the same length; no record is produced in that case.
pub fn records<'a, P>(
    paths: &'a [P],
    ids: &'a [EventId],
    flags: &'a [u32],
) -> Result<impl ExactSizeIterator<Item = RawRecord<'a>> + 'a>
where
    P: AsRef<Path> + 'a,
{
    if paths.len() != ids.len() || paths.len() != flags.len() {
        return Err(Error::batch_length_mismatch(
            paths.len(),
            ids.len(),
            flags.len(),
        ));
    }

    Ok(paths
        .iter()
        .zip(ids)
        .zip(flags)
        .map(|((path, id), flags)| RawRecord::new(path.as_ref(), *id, *flags)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    use pretty_assertions::assert_eq;

    #[test]
    fn usable_path_rejects_empty_and_missing() {
        assert_eq!(RawRecord::new(Path::new(""), 1, 0).usable_path(), None);
        assert_eq!(RawRecord::without_path(1, 0).usable_path(), None);
        assert_eq!(
            RawRecord::new(Path::new("/tmp"), 1, 0).usable_path(),
            Some(Path::new("/tmp"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn from_bytes_keeps_non_utf8() {
        let record = RawRecord::from_bytes(b"/tmp/\xff", 3, 0x100);
        assert_eq!(record.path.map(|p| p.as_os_str().len()), Some(6));
        assert_eq!(record.event_id, 3);
        assert!(record.stream_flags().contains(StreamFlags::ITEM_CREATED));
    }

    #[test]
    fn records_zips_in_order() {
        let paths = ["/a", "/b"];
        let records: Vec<_> = records(&paths, &[1, 2], &[0x100, 0x200])
            .unwrap()
            .collect();
        assert_eq!(
            records,
            vec![
                RawRecord::new(Path::new("/a"), 1, 0x100),
                RawRecord::new(Path::new("/b"), 2, 0x200),
            ]
        );
    }

    #[test]
    fn records_rejects_mismatched_lengths() {
        let paths = ["/a", "/b"];
        let err = records(&paths, &[1], &[0, 0]).err().unwrap();
        assert_eq!(
            err.kind,
            ErrorKind::BatchLengthMismatch {
                paths: 2,
                ids: 1,
                flags: 2
            }
        );
    }
}
