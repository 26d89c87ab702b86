//! All kinds of errors in this crate.

use displaydoc::Display;
use std::io;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// Width / height should be positive.
    NonPositiveError,
    /// Width {0} is not a multiple of 8.
    UnalignedWidthError(i32),
    /// Pattern directory {0:?} does not exist.
    PatternDirError(String),
    /// I/O error: {0}.
    IoError(#[from] io::Error),
}
