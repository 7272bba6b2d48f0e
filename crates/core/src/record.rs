//! Player record persisted by the line-record codec.
//!
//! The record doubles as the in-memory attribute bag: the codec reads every
//! field through the accessors and rebuilds a loaded record through
//! [`PlayerRecord::new`] plus the mutators.
//!
//! Equipment slots never hold an `Option`. An empty string ([`UNEQUIPPED`])
//! means nothing is equipped, and the setters ignore `None` so an absent value
//! can never clear a slot by accident.

use std::fmt;

/// Sentinel stored in an equipment slot when nothing is equipped.
pub const UNEQUIPPED: &str = "";

/// Label shown in the status block for an empty equipment slot.
const NOTHING_LABEL: &str = "なし";

/// A player's name, hit points, level, and equipment.
///
/// `hp <= max_hp` is not enforced; callers keep the two consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    name: String,
    hp: i32,
    max_hp: i32,
    level: i32,
    weapon: String,
    armor: String,
}

impl PlayerRecord {
    /// Create a record at full health with nothing equipped.
    pub fn new(name: impl Into<String>, max_hp: i32, level: i32) -> Self {
        PlayerRecord {
            name: name.into(),
            hp: max_hp,
            max_hp,
            level,
            weapon: UNEQUIPPED.to_string(),
            armor: UNEQUIPPED.to_string(),
        }
    }

    /// Player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current hit points.
    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Maximum hit points.
    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Player level.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Equipped weapon, or [`UNEQUIPPED`].
    pub fn weapon(&self) -> &str {
        &self.weapon
    }

    /// Equipped armor, or [`UNEQUIPPED`].
    pub fn armor(&self) -> &str {
        &self.armor
    }

    /// Set current hit points. No clamping against `max_hp`.
    pub fn set_hp(&mut self, hp: i32) {
        self.hp = hp;
    }

    /// Equip a weapon. `None` leaves the current weapon in place.
    pub fn set_weapon(&mut self, weapon: Option<&str>) {
        if let Some(weapon) = weapon {
            self.weapon = weapon.to_string();
        }
    }

    /// Equip armor. `None` leaves the current armor in place.
    pub fn set_armor(&mut self, armor: Option<&str>) {
        if let Some(armor) = armor {
            self.armor = armor.to_string();
        }
    }

    /// Empty the weapon slot.
    pub fn unequip_weapon(&mut self) {
        self.weapon = UNEQUIPPED.to_string();
    }

    /// Empty the armor slot.
    pub fn unequip_armor(&mut self) {
        self.armor = UNEQUIPPED.to_string();
    }

    /// Check if a weapon is equipped.
    pub fn is_weapon_equipped(&self) -> bool {
        self.weapon != UNEQUIPPED
    }

    /// Check if armor is equipped.
    pub fn is_armor_equipped(&self) -> bool {
        self.armor != UNEQUIPPED
    }
}

fn slot_label(item: &str) -> &str {
    if item == UNEQUIPPED {
        NOTHING_LABEL
    } else {
        item
    }
}

/// Renders the status block shown to the player.
impl fmt::Display for PlayerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========== ステータス ==========")?;
        writeln!(f, "名前: {}", self.name)?;
        writeln!(f, "HP: {}/{}", self.hp, self.max_hp)?;
        writeln!(f, "レベル: {}", self.level)?;
        writeln!(f, "武器: {}", slot_label(&self.weapon))?;
        writeln!(f, "防具: {}", slot_label(&self.armor))?;
        write!(f, "===============================")
    }
}
