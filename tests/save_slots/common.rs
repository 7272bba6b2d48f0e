//! Shared fixtures.

use questsave::prelude::*;
use tempfile::TempDir;

/// Fresh slots in a temporary directory. Keep the `TempDir` alive.
pub fn temp_slots() -> (TempDir, SaveSlots) {
    let temp = TempDir::new().expect("temp dir");
    let slots = SaveSlots::open(temp.path()).expect("open slots");
    (temp, slots)
}

/// The hero from the save screen mockups.
pub fn hero() -> PlayerRecord {
    let mut hero = PlayerRecord::new("勇者", 100, 5);
    hero.set_hp(80);
    hero
}

/// Overwrite a slot with raw text.
pub fn write_raw(slots: &SaveSlots, slot: Slot, content: &str) {
    std::fs::write(slots.path_of(slot), content).expect("write raw save");
}
