//! Error taxonomy shared by every codec.
//!
//! Three failure kinds can occur while moving a record through a file:
//!
//! | Kind | Cause |
//! |------|-------|
//! | `Io` | File missing, unreadable, or unwritable |
//! | `InvalidNumber` | Text where an integer was expected |
//! | `Shape` | Fewer delimited fields than the format requires |
//!
//! `Empty` is the single-string codec's variant of a shape failure: the file
//! exists but has no first line to return.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Opening, reading, or writing the file failed
    Io,
    /// An integer field did not parse
    InvalidNumber,
    /// Too few fields (or no content at all)
    Shape,
}

/// Errors raised by the save file codecs.
#[derive(Debug, Error)]
pub enum CodecError {
    /// I/O failure on the save file
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// A field expected to hold an integer held something else
    #[error("invalid number in field `{field}`: {value:?}")]
    InvalidNumber {
        /// Name of the field being parsed
        field: &'static str,
        /// Text that failed to parse (empty when the line was missing)
        value: String,
        /// Parser error
        #[source]
        source: ParseIntError,
    },

    /// Fewer fields than the format requires
    #[error("expected {expected} fields, found {found}")]
    Shape {
        /// Number of fields the format requires
        expected: usize,
        /// Number of fields present
        found: usize,
    },

    /// The file has no content to decode
    #[error("file is empty: {}", .path.display())]
    Empty {
        /// File being decoded
        path: PathBuf,
    },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Build an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CodecError::Io {
            path: path.into(),
            source,
        }
    }

    /// Parse `value` as the integer field `field`.
    ///
    /// Parsing follows `i32::from_str`: an optional sign and decimal digits,
    /// no surrounding whitespace.
    pub fn parse_int(field: &'static str, value: &str) -> Result<i32> {
        value.parse::<i32>().map_err(|source| CodecError::InvalidNumber {
            field,
            value: value.to_string(),
            source,
        })
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::Io { .. } => ErrorKind::Io,
            CodecError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            CodecError::Shape { .. } | CodecError::Empty { .. } => ErrorKind::Shape,
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
