//! The standard base-game component distribution.
//!
//! Number tokens and ports are listed in their standard placement order, so
//! a board laid out without shuffling follows the printed setup.

use super::port::{PortKind, PORT_COUNT};
use super::tile::{Resource, Terrain, TILE_COUNT};

/// Number of tiles that carry a number token (everything but the desert).
pub const TOKEN_COUNT: usize = TILE_COUNT - 1;

/// The two highest-probability token values; they must never touch.
pub const RED_NUMBERS: [u8; 2] = [6, 8];

/// Non-desert terrain tiles. The single desert is placed separately.
pub const STANDARD_TERRAIN: [Terrain; TOKEN_COUNT] = [
    Terrain::Forest,
    Terrain::Forest,
    Terrain::Forest,
    Terrain::Forest,
    Terrain::Pasture,
    Terrain::Pasture,
    Terrain::Pasture,
    Terrain::Pasture,
    Terrain::Fields,
    Terrain::Fields,
    Terrain::Fields,
    Terrain::Fields,
    Terrain::Mountains,
    Terrain::Mountains,
    Terrain::Mountains,
    Terrain::Hills,
    Terrain::Hills,
    Terrain::Hills,
];

/// Number tokens in standard placement order along the spiral path.
pub const STANDARD_NUMBERS: [u8; TOKEN_COUNT] =
    [5, 2, 6, 3, 8, 10, 9, 12, 11, 4, 8, 10, 9, 4, 5, 6, 3, 11];

/// Port types in standard placement order around the coast.
pub const STANDARD_PORTS: [PortKind; PORT_COUNT] = [
    PortKind::Generic,
    PortKind::Special(Resource::Ore),
    PortKind::Special(Resource::Grain),
    PortKind::Generic,
    PortKind::Special(Resource::Lumber),
    PortKind::Special(Resource::Brick),
    PortKind::Generic,
    PortKind::Generic,
    PortKind::Special(Resource::Wool),
];

/// Returns true for a 6 or an 8.
pub fn is_red(number: u8) -> bool {
    RED_NUMBERS.contains(&number)
}

/// Expected count of each terrain across a full board, desert included.
pub fn terrain_count(terrain: Terrain) -> usize {
    if terrain.is_desert() {
        1
    } else {
        STANDARD_TERRAIN.iter().filter(|t| **t == terrain).count()
    }
}

/// Sorted copy of a token list, for multiset comparison.
pub fn sorted_numbers(numbers: &[u8]) -> Vec<u8> {
    let mut v = numbers.to_vec();
    v.sort_unstable();
    v
}

/// Sorted copy of a port list, for multiset comparison.
pub fn sorted_ports(ports: &[PortKind]) -> Vec<PortKind> {
    let mut v = ports.to_vec();
    v.sort_unstable();
    v
}
