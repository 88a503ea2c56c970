//! Types shared by the FSEvents decoder and its consumers.

#![deny(missing_docs)]

pub mod notification;
