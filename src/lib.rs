//! # questsave
//!
//! Flat-file save and load for a text RPG prototype.
//!
//! Three independent file formats are supported:
//!
//! - **Player record**: name, hp, max hp, level, weapon, armor as six lines
//! - **Status triple**: hp, mp, level as one `hp,mp,level` line
//! - **Name**: the raw text of a player name
//!
//! ## Quick Start
//!
//! ```no_run
//! use questsave::prelude::*;
//!
//! let slots = SaveSlots::open("data")?;
//!
//! slots.save_name("勇者アレン")?;
//! assert_eq!(slots.load_name().as_deref(), Some("勇者アレン"));
//!
//! slots.save_status(100, 50, 5)?;
//! assert_eq!(slots.load_status(), Some(StatusTriple::new(100, 50, 5)));
//! # Ok::<(), questsave::Error>(())
//! ```
//!
//! The codecs can also be used directly on any path through
//! [`line_record`], [`csv_triple`], and [`single_string`].

#![warn(missing_docs)]

mod error;
mod slots;
mod types;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use slots::{
    SaveConfig, SaveSlots, SaveSlotsBuilder, Slot, DEFAULT_DIR, DEFAULT_NAME_FILE,
    DEFAULT_PLAYER_FILE, DEFAULT_STATUS_FILE,
};

// Re-export codecs
pub use questsave_codec::{csv_triple, line_record, single_string};

// Re-export types
pub use types::*;
