//! Convenient imports for questsave.
//!
//! ```no_run
//! use questsave::prelude::*;
//!
//! let slots = SaveSlots::open("data")?;
//! slots.save_player(&PlayerRecord::new("勇者", 100, 1))?;
//! # Ok::<(), questsave::Error>(())
//! ```

// Main entry point
pub use crate::slots::{SaveConfig, SaveSlots, SaveSlotsBuilder, Slot};

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::types::{CodecError, ErrorKind, PlayerRecord, StatusTriple, UNEQUIPPED};

// Codecs
pub use crate::{csv_triple, line_record, single_string};
