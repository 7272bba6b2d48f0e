//! Status triple persisted by the CSV codec.

use std::fmt;

/// Hit points, magic points, and level.
///
/// Unrelated to [`PlayerRecord`](crate::PlayerRecord): the two shapes share a
/// subject but not a file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusTriple {
    /// Hit points
    pub hp: i32,
    /// Magic points
    pub mp: i32,
    /// Level
    pub level: i32,
}

impl StatusTriple {
    /// Number of fields in the CSV form.
    pub const FIELD_COUNT: usize = 3;

    /// Field names in file order.
    pub const FIELD_NAMES: [&'static str; 3] = ["hp", "mp", "level"];

    /// Create a triple.
    pub fn new(hp: i32, mp: i32, level: i32) -> Self {
        StatusTriple { hp, mp, level }
    }

    /// Fields in file order.
    pub fn to_array(self) -> [i32; 3] {
        [self.hp, self.mp, self.level]
    }
}

impl From<(i32, i32, i32)> for StatusTriple {
    fn from((hp, mp, level): (i32, i32, i32)) -> Self {
        StatusTriple::new(hp, mp, level)
    }
}

impl From<[i32; 3]> for StatusTriple {
    fn from([hp, mp, level]: [i32; 3]) -> Self {
        StatusTriple::new(hp, mp, level)
    }
}

impl From<StatusTriple> for (i32, i32, i32) {
    fn from(t: StatusTriple) -> Self {
        (t.hp, t.mp, t.level)
    }
}

impl fmt::Display for StatusTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HP={}, MP={}, Level={}", self.hp, self.mp, self.level)
    }
}
