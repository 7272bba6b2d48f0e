//! Public types for the questsave API.
//!
//! Re-exported from the core crate so callers only depend on `questsave`.

// Persisted shapes
pub use questsave_core::PlayerRecord;
pub use questsave_core::StatusTriple;
pub use questsave_core::UNEQUIPPED;

// Codec errors
pub use questsave_core::CodecError;
pub use questsave_core::ErrorKind;
