//! SaveSlots Integration Tests
//!
//! End-to-end save/load through the public facade: round trips, file
//! formats on disk, and failure handling per codec.

mod common;
mod failures;
mod round_trip;
