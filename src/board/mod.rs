//! Board representation.
//!
//! Contains the fixed topology of the standard board (tile positions,
//! adjacency, port locations), the standard component distribution, and the
//! generated `Board` value.

pub mod adjacency;
pub mod port;
pub mod standard;
pub mod state;
pub mod tile;

pub use adjacency::{
    adjacency_matrix, direction, edges_for, is_adjacent, neighbors, step, AdjacencyEntry,
    ADJACENCIES, ADJACENCY_COUNT,
};
pub use port::{PortKind, PortLocation, PORT_COUNT, PORT_LOCATIONS};
pub use standard::{
    is_red, RED_NUMBERS, STANDARD_NUMBERS, STANDARD_PORTS, STANDARD_TERRAIN, TOKEN_COUNT,
};
pub use state::{Board, BoardError, Port, Tile};
pub use tile::{
    Direction, InvalidTileId, Resource, Ring, Terrain, TileId, ALL_RESOURCES, ALL_TERRAIN,
    ALL_TILES, TILE_COUNT,
};
