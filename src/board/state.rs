//! Generated board representation.
//!
//! A `Board` is a complete, immutable layout: one terrain and optional token
//! per tile position and one port kind per port location. Boards are never
//! edited in place; generating a new layout produces a new value.

use serde::{Deserialize, Serialize};

use super::adjacency::ADJACENCIES;
use super::port::{PortKind, PortLocation, PORT_COUNT, PORT_LOCATIONS};
use super::standard::{
    is_red, sorted_numbers, sorted_ports, terrain_count, STANDARD_NUMBERS, STANDARD_PORTS,
};
use super::tile::{Terrain, TileId, ALL_TERRAIN, ALL_TILES, TILE_COUNT};

/// A board invariant that does not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("tile slot {slot} holds tile {found}, expected tile {expected}")]
    TileOutOfPlace {
        slot: usize,
        expected: TileId,
        found: TileId,
    },

    #[error("port slot {slot} is not at its fixed coastal location")]
    PortOutOfPlace { slot: usize },

    #[error("expected {expected} {terrain} tile(s), found {found}")]
    TerrainCount {
        terrain: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("desert on tile {0} carries a number token")]
    DesertHasToken(TileId),

    #[error("tile {0} has no number token")]
    MissingToken(TileId),

    #[error("number tokens do not match the standard set")]
    TokenMultiset,

    #[error("port kinds do not match the standard set")]
    PortMultiset,

    #[error("tiles {0} and {1} both carry a 6 or 8")]
    AdjacentRedNumbers(TileId, TileId),
}

/// One land tile of a generated board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub terrain: Terrain,
    /// Number token; None only for the desert.
    pub number: Option<u8>,
}

/// One port of a generated board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Port {
    pub location: PortLocation,
    pub kind: PortKind,
}

/// A complete starting layout.
///
/// Tiles are stored in path order (index by `TileId::index`) and ports in
/// coastal order (matching `PORT_LOCATIONS`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    tiles: [Tile; TILE_COUNT],
    ports: [Port; PORT_COUNT],
}

impl Board {
    /// Assembles a board from per-tile assignments and per-location port kinds.
    ///
    /// The topology comes from the static tables; only assignments vary.
    pub fn from_parts(
        production: [(Terrain, Option<u8>); TILE_COUNT],
        port_kinds: [PortKind; PORT_COUNT],
    ) -> Board {
        let tiles = std::array::from_fn(|i| Tile {
            id: ALL_TILES[i],
            terrain: production[i].0,
            number: production[i].1,
        });
        let ports = std::array::from_fn(|i| Port {
            location: PORT_LOCATIONS[i],
            kind: port_kinds[i],
        });
        Board { tiles, ports }
    }

    /// Returns all tiles in path order.
    pub fn tiles(&self) -> &[Tile; TILE_COUNT] {
        &self.tiles
    }

    /// Returns all ports in coastal order.
    pub fn ports(&self) -> &[Port; PORT_COUNT] {
        &self.ports
    }

    /// Returns the tile at a position.
    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.index()]
    }

    /// Returns the tile holding the desert.
    pub fn desert(&self) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.terrain.is_desert())
    }

    /// Returns the number tokens in path order, skipping the desert.
    pub fn numbers(&self) -> Vec<u8> {
        self.tiles.iter().filter_map(|t| t.number).collect()
    }

    /// Returns the port kinds in coastal order.
    pub fn port_kinds(&self) -> [PortKind; PORT_COUNT] {
        std::array::from_fn(|i| self.ports[i].kind)
    }

    /// Counts the tiles of a given terrain.
    pub fn count_terrain(&self, terrain: Terrain) -> usize {
        self.tiles.iter().filter(|t| t.terrain == terrain).count()
    }

    /// Returns the first adjacent pair of tiles that both carry a 6 or 8.
    pub fn adjacent_red_pair(&self) -> Option<(TileId, TileId)> {
        ADJACENCIES.iter().find_map(|e| {
            let a = self.tile(e.from).number.is_some_and(is_red);
            let b = self.tile(e.to).number.is_some_and(is_red);
            (a && b).then_some((e.from, e.to))
        })
    }

    /// Checks every layout invariant: fixed topology, component counts and
    /// the 6/8 rule.
    pub fn validate(&self) -> Result<(), BoardError> {
        for (slot, (tile, expected)) in self.tiles.iter().zip(ALL_TILES).enumerate() {
            if tile.id != expected {
                return Err(BoardError::TileOutOfPlace {
                    slot,
                    expected,
                    found: tile.id,
                });
            }
        }
        for (slot, port) in self.ports.iter().enumerate() {
            if port.location != PORT_LOCATIONS[slot] {
                return Err(BoardError::PortOutOfPlace { slot });
            }
        }

        for terrain in ALL_TERRAIN {
            let expected = terrain_count(terrain);
            let found = self.count_terrain(terrain);
            if found != expected {
                return Err(BoardError::TerrainCount {
                    terrain: terrain.name(),
                    expected,
                    found,
                });
            }
        }

        for t in &self.tiles {
            match (t.terrain.is_desert(), t.number) {
                (true, Some(_)) => return Err(BoardError::DesertHasToken(t.id)),
                (false, None) => return Err(BoardError::MissingToken(t.id)),
                _ => {}
            }
        }

        if sorted_numbers(&self.numbers()) != sorted_numbers(&STANDARD_NUMBERS) {
            return Err(BoardError::TokenMultiset);
        }

        if sorted_ports(&self.port_kinds()) != sorted_ports(&STANDARD_PORTS) {
            return Err(BoardError::PortMultiset);
        }

        if let Some((a, b)) = self.adjacent_red_pair() {
            return Err(BoardError::AdjacentRedNumbers(a, b));
        }

        Ok(())
    }
}
