//! Port types and the fixed coastal port locations.

use serde::{Deserialize, Serialize};

use super::tile::{Direction, Resource, TileId};

/// The number of ports on the standard board.
pub const PORT_COUNT: usize = 9;

/// What a port trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortKind {
    /// Any resource at 3:1.
    Generic,
    /// One specific resource at 2:1.
    Special(Resource),
}

impl PortKind {
    /// Returns the single-character notation letter (`?` for generic).
    pub const fn letter(self) -> char {
        match self {
            PortKind::Generic => '?',
            PortKind::Special(r) => r.letter(),
        }
    }

    /// Parses a port kind from its notation letter.
    pub fn from_letter(c: char) -> Option<PortKind> {
        if c == '?' {
            return Some(PortKind::Generic);
        }
        Resource::from_letter(c).map(PortKind::Special)
    }

    /// Returns how many cards are given for one in trade.
    pub const fn ratio(self) -> u8 {
        match self {
            PortKind::Generic => 3,
            PortKind::Special(_) => 2,
        }
    }

    /// Returns true for the 3:1 generic port.
    pub const fn is_generic(self) -> bool {
        matches!(self, PortKind::Generic)
    }
}

impl std::fmt::Display for PortKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortKind::Generic => write!(f, "3:1 any"),
            PortKind::Special(r) => write!(f, "2:1 {}", r.name()),
        }
    }
}

/// A fixed coastal port position: the land tile it serves and the sea-facing
/// edge it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortLocation {
    pub tile: TileId,
    pub facing: Direction,
}

const fn loc(tile: u8, facing: Direction) -> PortLocation {
    match TileId::new(tile) {
        Some(tile) => PortLocation { tile, facing },
        None => panic!("tile out of range"),
    }
}

/// Port locations in coastal order, clockwise from the top-left corner
/// going down the left side.
///
/// Consecutive entries (and the last and first) are neighbours along the
/// coast.
pub static PORT_LOCATIONS: [PortLocation; PORT_COUNT] = [
    loc(1, Direction::NW),
    loc(2, Direction::W),
    loc(4, Direction::W),
    loc(5, Direction::SW),
    loc(6, Direction::SE),
    loc(8, Direction::SE),
    loc(9, Direction::E),
    loc(10, Direction::NE),
    loc(12, Direction::NE),
];
