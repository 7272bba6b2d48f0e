//! File codecs for questsave
//!
//! Three independent encode/decode pairs, each over one file path:
//!
//! | Module | Shape | File format |
//! |--------|-------|-------------|
//! | [`line_record`] | `PlayerRecord` | six `\n`-terminated lines |
//! | [`csv_triple`] | `StatusTriple` | `hp,mp,level`, no trailing newline |
//! | [`single_string`] | `String` | raw text, no trailing newline |
//!
//! Encoders return the failure as `Err` and log it. Decoders log and collapse
//! failures to a "no result" value, except that the line-record decoder lets
//! numeric-format errors escape. Every module also offers `try_decode`, which
//! reports all failures as `Err` without logging.
//!
//! ## Examples
//!
//! ```no_run
//! use questsave_codec::{csv_triple, single_string};
//!
//! csv_triple::encode(100, 50, 5, "status.txt").unwrap();
//! let status = csv_triple::decode("status.txt");
//!
//! single_string::encode("勇者アレン", "player_name.txt").unwrap();
//! let name = single_string::decode("player_name.txt");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod file;
#[cfg(test)]
mod log_capture;

pub mod csv_triple;
pub mod line_record;
pub mod single_string;

pub use questsave_core::{CodecError, ErrorKind, PlayerRecord, Result, StatusTriple, UNEQUIPPED};
