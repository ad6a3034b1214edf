//! Movement directions.

use std::fmt;

/// One of the six directions a passage can lead.
///
/// The declaration order is the order exits are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl Direction {
    /// All directions in listing order.
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Parse a full direction word, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.name().eq_ignore_ascii_case(s))
    }

    /// Parse a single-letter shortcut (`n`, `s`, `e`, `w`, `u`, `d`), ignoring case.
    pub fn from_shortcut(s: &str) -> Option<Self> {
        match s {
            "n" | "N" => Some(Self::North),
            "s" | "S" => Some(Self::South),
            "e" | "E" => Some(Self::East),
            "w" | "W" => Some(Self::West),
            "u" | "U" => Some(Self::Up),
            "d" | "D" => Some(Self::Down),
            _ => None,
        }
    }

    /// Get the lowercase word for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
