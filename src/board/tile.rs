//! Tile definitions and metadata for the standard base-game board.
//!
//! The 19 land tiles are numbered along a connected spiral path that visits
//! every tile: the outer ring (1-12) starting at the top-left corner and
//! running down the left side, the inner ring (13-18), then the centre (19).
//! Tile metadata (axial coordinate, ring) is stored in a compile-time lookup
//! table indexed by `TileId::index`.

use serde::{Deserialize, Serialize};

/// The number of land tiles on the standard board.
pub const TILE_COUNT: usize = 19;

/// A resource produced by a terrain or traded at a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Lumber,
    Wool,
    Grain,
    Ore,
    Brick,
}

/// All five resources in standard order.
pub const ALL_RESOURCES: [Resource; 5] = [
    Resource::Lumber,
    Resource::Wool,
    Resource::Grain,
    Resource::Ore,
    Resource::Brick,
];

impl Resource {
    /// Returns the lowercase name of this resource.
    pub const fn name(self) -> &'static str {
        match self {
            Resource::Lumber => "lumber",
            Resource::Wool => "wool",
            Resource::Grain => "grain",
            Resource::Ore => "ore",
            Resource::Brick => "brick",
        }
    }

    /// Returns the single-character notation letter.
    pub const fn letter(self) -> char {
        match self {
            Resource::Lumber => 'L',
            Resource::Wool => 'W',
            Resource::Grain => 'G',
            Resource::Ore => 'O',
            Resource::Brick => 'B',
        }
    }

    /// Parses a resource from its single-character notation letter.
    pub fn from_letter(c: char) -> Option<Resource> {
        match c {
            'L' => Some(Resource::Lumber),
            'W' => Some(Resource::Wool),
            'G' => Some(Resource::Grain),
            'O' => Some(Resource::Ore),
            'B' => Some(Resource::Brick),
            _ => None,
        }
    }
}

/// The terrain of a land tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Forest,
    Pasture,
    Fields,
    Mountains,
    Hills,
    Desert,
}

/// All terrain variants.
pub const ALL_TERRAIN: [Terrain; 6] = [
    Terrain::Forest,
    Terrain::Pasture,
    Terrain::Fields,
    Terrain::Mountains,
    Terrain::Hills,
    Terrain::Desert,
];

impl Terrain {
    /// Returns the resource this terrain produces, or None for the desert.
    pub const fn resource(self) -> Option<Resource> {
        match self {
            Terrain::Forest => Some(Resource::Lumber),
            Terrain::Pasture => Some(Resource::Wool),
            Terrain::Fields => Some(Resource::Grain),
            Terrain::Mountains => Some(Resource::Ore),
            Terrain::Hills => Some(Resource::Brick),
            Terrain::Desert => None,
        }
    }

    /// Returns the single-character notation letter.
    ///
    /// Hills are `C` (clay) and fields are `H` (harvest).
    pub const fn letter(self) -> char {
        match self {
            Terrain::Forest => 'F',
            Terrain::Pasture => 'P',
            Terrain::Fields => 'H',
            Terrain::Mountains => 'M',
            Terrain::Hills => 'C',
            Terrain::Desert => 'D',
        }
    }

    /// Parses a terrain from its single-character notation letter.
    pub fn from_letter(c: char) -> Option<Terrain> {
        match c {
            'F' => Some(Terrain::Forest),
            'P' => Some(Terrain::Pasture),
            'H' => Some(Terrain::Fields),
            'M' => Some(Terrain::Mountains),
            'C' => Some(Terrain::Hills),
            'D' => Some(Terrain::Desert),
            _ => None,
        }
    }

    /// Returns the lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Terrain::Forest => "forest",
            Terrain::Pasture => "pasture",
            Terrain::Fields => "fields",
            Terrain::Mountains => "mountains",
            Terrain::Hills => "hills",
            Terrain::Desert => "desert",
        }
    }

    /// Returns true for the desert, which never carries a number token.
    pub const fn is_desert(self) -> bool {
        matches!(self, Terrain::Desert)
    }
}

/// One of the six hex edge directions (pointy-top hexes, screen orientation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    E,
    SE,
    SW,
    W,
    NW,
    NE,
}

impl Direction {
    /// Returns the direction pointing the other way.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::E => Direction::W,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
            Direction::W => Direction::E,
            Direction::NW => Direction::SE,
            Direction::NE => Direction::SW,
        }
    }

    /// Returns the axial (q, r) offset of one step in this direction.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::E => (1, 0),
            Direction::SE => (0, 1),
            Direction::SW => (-1, 1),
            Direction::W => (-1, 0),
            Direction::NW => (0, -1),
            Direction::NE => (1, -1),
        }
    }

    /// Returns the compass abbreviation ("E", "SE", ...).
    pub const fn abbr(self) -> &'static str {
        match self {
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
            Direction::NE => "NE",
        }
    }
}

/// A land tile position, 1-based along the spiral path.
///
/// Serialized as the bare number. Deserializing goes through `TileId::new`,
/// so an out-of-range id is a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TileId(u8);

/// A tile number outside 1..=19.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("tile id {0} is out of range (1-19)")]
pub struct InvalidTileId(pub u8);

impl TileId {
    /// Creates a tile id, or None if `n` is outside 1..=19.
    pub const fn new(n: u8) -> Option<TileId> {
        if n >= 1 && n as usize <= TILE_COUNT {
            Some(TileId(n))
        } else {
            None
        }
    }

    /// Returns the tile id at a 0-based path index. Panics if out of range.
    pub const fn from_index(idx: usize) -> TileId {
        assert!(idx < TILE_COUNT);
        TileId(idx as u8 + 1)
    }

    /// Returns the 1-based number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the 0-based path index, usable as an array index.
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Returns the static metadata for this tile.
    pub fn info(self) -> &'static TileInfo {
        &TILE_INFO[self.index()]
    }

    /// Returns the axial (q, r) coordinate of this tile.
    pub fn coord(self) -> (i8, i8) {
        self.info().coord
    }
}

impl TryFrom<u8> for TileId {
    type Error = InvalidTileId;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        TileId::new(n).ok_or(InvalidTileId(n))
    }
}

impl From<TileId> for u8 {
    fn from(id: TileId) -> u8 {
        id.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which ring of the board a tile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ring {
    Outer,
    Inner,
    Centre,
}

/// Static metadata for a tile position.
pub struct TileInfo {
    pub coord: (i8, i8),
    pub ring: Ring,
}

/// All tile ids in path order.
pub const ALL_TILES: [TileId; TILE_COUNT] = {
    let mut out = [TileId(1); TILE_COUNT];
    let mut i = 0;
    while i < TILE_COUNT {
        out[i] = TileId(i as u8 + 1);
        i += 1;
    }
    out
};

/// Compile-time lookup table: index by `TileId::index`.
pub static TILE_INFO: [TileInfo; TILE_COUNT] = [
    // Outer ring, down the left side then back up the right.
    TileInfo { coord: (0, 0), ring: Ring::Outer },   // 1
    TileInfo { coord: (-1, 1), ring: Ring::Outer },  // 2
    TileInfo { coord: (-2, 2), ring: Ring::Outer },  // 3
    TileInfo { coord: (-2, 3), ring: Ring::Outer },  // 4
    TileInfo { coord: (-2, 4), ring: Ring::Outer },  // 5
    TileInfo { coord: (-1, 4), ring: Ring::Outer },  // 6
    TileInfo { coord: (0, 4), ring: Ring::Outer },   // 7
    TileInfo { coord: (1, 3), ring: Ring::Outer },   // 8
    TileInfo { coord: (2, 2), ring: Ring::Outer },   // 9
    TileInfo { coord: (2, 1), ring: Ring::Outer },   // 10
    TileInfo { coord: (2, 0), ring: Ring::Outer },   // 11
    TileInfo { coord: (1, 0), ring: Ring::Outer },   // 12
    // Inner ring.
    TileInfo { coord: (0, 1), ring: Ring::Inner },   // 13
    TileInfo { coord: (-1, 2), ring: Ring::Inner },  // 14
    TileInfo { coord: (-1, 3), ring: Ring::Inner },  // 15
    TileInfo { coord: (0, 3), ring: Ring::Inner },   // 16
    TileInfo { coord: (1, 2), ring: Ring::Inner },   // 17
    TileInfo { coord: (1, 1), ring: Ring::Inner },   // 18
    // Centre.
    TileInfo { coord: (0, 2), ring: Ring::Centre },  // 19
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tile_id_bounds() {
        assert!(TileId::new(0).is_none());
        assert!(TileId::new(20).is_none());
        assert_eq!(TileId::new(1).unwrap().index(), 0);
        assert_eq!(TileId::new(19).unwrap().index(), 18);
        assert_eq!(TileId::from_index(5).get(), 6);
    }

    #[test]
    fn serde_rejects_out_of_range_ids() {
        assert_eq!(serde_json::to_string(&TileId::new(7).unwrap()).unwrap(), "7");
        let id: TileId = serde_json::from_str("7").unwrap();
        assert_eq!(id.get(), 7);
        assert!(serde_json::from_str::<TileId>("0").is_err());
        assert!(serde_json::from_str::<TileId>("20").is_err());
        assert_eq!(TileId::try_from(0u8), Err(InvalidTileId(0)));
    }

    #[test]
    fn all_tiles_in_path_order() {
        for (i, t) in ALL_TILES.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn coordinates_are_unique_and_fit_radius_two() {
        let centre = TileId::new(19).unwrap().coord();
        let mut seen = HashSet::new();
        for t in ALL_TILES {
            let (q, r) = t.coord();
            assert!(seen.insert((q, r)), "duplicate coordinate for tile {}", t);
            // Hex distance from the centre tile.
            let dq = (q - centre.0) as i32;
            let dr = (r - centre.1) as i32;
            let dist = (dq.abs() + dr.abs() + (dq + dr).abs()) / 2;
            let expected = match t.info().ring {
                Ring::Outer => 2,
                Ring::Inner => 1,
                Ring::Centre => 0,
            };
            assert_eq!(dist, expected, "tile {} ring mismatch", t);
        }
    }

    #[test]
    fn terrain_letters_roundtrip() {
        for t in ALL_TERRAIN {
            assert_eq!(Terrain::from_letter(t.letter()), Some(t));
        }
        assert_eq!(Terrain::from_letter('X'), None);
    }

    #[test]
    fn resource_letters_roundtrip() {
        for r in ALL_RESOURCES {
            assert_eq!(Resource::from_letter(r.letter()), Some(r));
        }
        assert_eq!(Resource::from_letter('?'), None);
    }

    #[test]
    fn only_desert_produces_nothing() {
        for t in ALL_TERRAIN {
            assert_eq!(t.resource().is_none(), t.is_desert());
        }
    }

    #[test]
    fn opposite_offsets_cancel() {
        use Direction::*;
        for d in [E, SE, SW, W, NW, NE] {
            let (a, b) = d.offset();
            let (c, e) = d.opposite().offset();
            assert_eq!((a + c, b + e), (0, 0));
            assert_eq!(d.opposite().opposite(), d);
        }
    }
}
