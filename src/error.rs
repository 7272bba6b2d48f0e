//! Unified error type for questsave.
//!
//! Wraps codec errors and adds the failures that only the directory-backed
//! [`SaveSlots`](crate::SaveSlots) can hit.

use questsave_core::{CodecError, ErrorKind};
use std::path::PathBuf;
use thiserror::Error;

/// All questsave errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The save directory could not be created
    #[error("cannot create save directory {}: {source}", .path.display())]
    Directory {
        /// Directory that was requested
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A codec failed
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result type for questsave operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Directory { .. } => ErrorKind::Io,
            Error::Codec(e) => e.kind(),
        }
    }

    /// Check if this is an I/O failure.
    pub fn is_io(&self) -> bool {
        self.kind() == ErrorKind::Io
    }

    /// Check if this is a numeric-format failure.
    pub fn is_invalid_number(&self) -> bool {
        self.kind() == ErrorKind::InvalidNumber
    }

    /// Check if this is a shape failure.
    pub fn is_shape(&self) -> bool {
        self.kind() == ErrorKind::Shape
    }
}
