//! Error types

use fsevent_types::notification::{EventId, NotificationKind};
use std::{error::Error as StdError, fmt, result::Result as StdResult};

/// Type alias to use this library's [`Error`] type in a Result
pub type Result<T> = StdResult<T, Error>;

/// Error kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A record's path is missing or empty, but the notification decoded from it requires one.
    ///
    /// Carries the kind of the first notification which could not be built.
    MalformedRecord(NotificationKind),

    /// The parallel sequences of a batch are not all the same length.
    BatchLengthMismatch {
        /// Number of paths.
        paths: usize,
        /// Number of event identifiers.
        ids: usize,
        /// Number of flag masks.
        flags: usize,
    },
}

/// FSEvents decoding error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Kind of the error.
    pub kind: ErrorKind,

    /// Identifier of the record the error relates to, if any.
    pub event_id: Option<EventId>,

    /// Raw flag mask of the record the error relates to, if any.
    pub flags: Option<u32>,
}

impl Error {
    /// Creates a new Error with an empty record context given its kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            event_id: None,
            flags: None,
        }
    }

    /// Sets the record identifier on the error.
    pub fn set_event_id(mut self, event_id: EventId) -> Self {
        self.event_id = Some(event_id);
        self
    }

    /// Sets the raw flag mask on the error.
    pub fn set_flags(mut self, flags: u32) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Creates a new MalformedRecord error.
    pub fn malformed_record(kind: NotificationKind) -> Self {
        Self::new(ErrorKind::MalformedRecord(kind))
    }

    /// Creates a new BatchLengthMismatch error.
    pub fn batch_length_mismatch(paths: usize, ids: usize, flags: usize) -> Self {
        Self::new(ErrorKind::BatchLengthMismatch { paths, ids, flags })
    }

    /// Returns whether this error was raised for a malformed record.
    pub fn is_malformed_record(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedRecord(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let error = match self.kind {
            ErrorKind::MalformedRecord(kind) => {
                format!("Malformed record: {kind} requires a non-empty path")
            }
            ErrorKind::BatchLengthMismatch { paths, ids, flags } => format!(
                "Batch length mismatch: {paths} paths, {ids} event ids, {flags} flag masks"
            ),
        };

        match (self.event_id, self.flags) {
            (None, None) => write!(f, "{error}"),
            (Some(id), None) => write!(f, "{error} (event id {id})"),
            (None, Some(flags)) => write!(f, "{error} (flags {flags:#x})"),
            (Some(id), Some(flags)) => write!(f, "{error} (event id {id}, flags {flags:#x})"),
        }
    }
}

impl StdError for Error {}

#[test]
fn display_formatted_errors() {
    assert_eq!(
        "Malformed record: item removed requires a non-empty path (event id 7, flags 0x20200)",
        format!(
            "{}",
            Error::malformed_record(NotificationKind::ItemRemoved)
                .set_event_id(7)
                .set_flags(0x0002_0200)
        )
    );

    assert_eq!(
        "Batch length mismatch: 2 paths, 1 event ids, 2 flag masks",
        format!("{}", Error::batch_length_mismatch(2, 1, 2))
    );
}

#[test]
fn malformed_record_is_detected() {
    assert!(Error::malformed_record(NotificationKind::RootChanged).is_malformed_record());
    assert!(!Error::batch_length_mismatch(1, 0, 1).is_malformed_record());
}

#[test]
fn every_error_kind_has_a_producer() {
    let malformed = crate::decode(&crate::RawRecord::without_path(1, 0))
        .remove(0)
        .unwrap_err();
    let mismatch = crate::records(&["/a"], &[], &[0]).err().unwrap();

    for error in [malformed, mismatch] {
        match error.kind {
            ErrorKind::MalformedRecord(kind) => {
                assert_eq!(kind, NotificationKind::GenericFolderChanged)
            }
            ErrorKind::BatchLengthMismatch { paths, ids, flags } => {
                assert_eq!((paths, ids, flags), (1, 0, 1))
            }
        }
    }
}
