//! Core types for questsave
//!
//! This crate defines the shapes persisted by the codecs and the errors they
//! raise:
//! - `PlayerRecord`: name, hp, max hp, level, weapon, armor
//! - `StatusTriple`: hp, mp, level
//! - `CodecError`: I/O, numeric-format, and shape failures

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod status;

pub use error::{CodecError, ErrorKind, Result};
pub use record::{PlayerRecord, UNEQUIPPED};
pub use status::StatusTriple;
