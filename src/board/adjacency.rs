//! Adjacency graph for the standard board.
//!
//! Each entry records an undirected edge between two tiles together with the
//! direction you travel from the first tile to reach the second. Queries in
//! the other direction invert the stored direction. All data is compile-time
//! `static`.

use super::tile::{Direction, TileId, TILE_COUNT};

/// A single undirected edge between two adjacent tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyEntry {
    pub from: TileId,
    pub to: TileId,
    /// Direction from `from` to `to`.
    pub direction: Direction,
}

impl AdjacencyEntry {
    /// Returns the same edge seen from the other end.
    pub const fn inverted(self) -> AdjacencyEntry {
        AdjacencyEntry {
            from: self.to,
            to: self.from,
            direction: self.direction.opposite(),
        }
    }
}

/// Shorthand constructor (used only in table construction).
const fn edge(from: u8, to: u8, direction: Direction) -> AdjacencyEntry {
    let from = match TileId::new(from) {
        Some(t) => t,
        None => panic!("tile out of range"),
    };
    let to = match TileId::new(to) {
        Some(t) => t,
        None => panic!("tile out of range"),
    };
    AdjacencyEntry {
        from,
        to,
        direction,
    }
}

use Direction::*;

/// Total number of undirected edges on the 19-tile board.
///
/// Breakdown: centre-inner 6, inner-inner 6, inner-outer 18, outer-outer 12.
pub const ADJACENCY_COUNT: usize = 42;

/// Complete adjacency table, ordered by the lower tile number.
pub static ADJACENCIES: [AdjacencyEntry; ADJACENCY_COUNT] = [
    edge(1, 2, SW),
    edge(1, 12, E),
    edge(1, 13, SE),
    edge(2, 3, SW),
    edge(2, 13, E),
    edge(2, 14, SE),
    edge(3, 4, SE),
    edge(3, 14, E),
    edge(4, 5, SE),
    edge(4, 14, NE),
    edge(4, 15, E),
    edge(5, 6, E),
    edge(5, 15, NE),
    edge(6, 7, E),
    edge(6, 15, NW),
    edge(6, 16, NE),
    edge(7, 8, NE),
    edge(7, 16, NW),
    edge(8, 9, NE),
    edge(8, 16, W),
    edge(8, 17, NW),
    edge(9, 10, NW),
    edge(9, 17, W),
    edge(10, 11, NW),
    edge(10, 17, SW),
    edge(10, 18, W),
    edge(11, 12, W),
    edge(11, 18, SW),
    edge(12, 13, SW),
    edge(12, 18, SE),
    edge(13, 14, SW),
    edge(13, 18, E),
    edge(13, 19, SE),
    edge(14, 15, SE),
    edge(14, 19, E),
    edge(15, 16, E),
    edge(15, 19, NE),
    edge(16, 17, NE),
    edge(16, 19, NW),
    edge(17, 18, NW),
    edge(17, 19, W),
    edge(18, 19, SW),
];

/// Returns every edge touching `tile`, oriented so that `from == tile`.
pub fn edges_for(tile: TileId) -> impl Iterator<Item = AdjacencyEntry> {
    ADJACENCIES.iter().filter_map(move |e| {
        if e.from == tile {
            Some(*e)
        } else if e.to == tile {
            Some(e.inverted())
        } else {
            None
        }
    })
}

/// Returns the tiles adjacent to `tile`.
pub fn neighbors(tile: TileId) -> impl Iterator<Item = TileId> {
    edges_for(tile).map(|e| e.to)
}

/// Checks whether two tiles share an edge.
pub fn is_adjacent(a: TileId, b: TileId) -> bool {
    ADJACENCIES
        .iter()
        .any(|e| (e.from == a && e.to == b) || (e.from == b && e.to == a))
}

/// Returns the direction from `from` to `to`, or None if they are not adjacent.
pub fn direction(from: TileId, to: TileId) -> Option<Direction> {
    edges_for(from).find(|e| e.to == to).map(|e| e.direction)
}

/// Returns the tile one step from `tile` in `dir`, or None if that is sea.
pub fn step(tile: TileId, dir: Direction) -> Option<TileId> {
    edges_for(tile).find(|e| e.direction == dir).map(|e| e.to)
}

/// Dense adjacency matrix, indexed by `TileId::index`.
///
/// Built on each call; callers running the check in a loop should keep one.
pub fn adjacency_matrix() -> [[bool; TILE_COUNT]; TILE_COUNT] {
    let mut m = [[false; TILE_COUNT]; TILE_COUNT];
    for e in ADJACENCIES.iter() {
        m[e.from.index()][e.to.index()] = true;
        m[e.to.index()][e.from.index()] = true;
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tile::{Ring, ALL_TILES};
    use std::collections::HashSet;

    fn t(n: u8) -> TileId {
        TileId::new(n).unwrap()
    }

    #[test]
    fn no_duplicate_edges() {
        let mut seen = HashSet::new();
        for e in ADJACENCIES.iter() {
            let key = (e.from.min(e.to), e.from.max(e.to));
            assert!(seen.insert(key), "duplicate edge {}-{}", e.from, e.to);
            assert_ne!(e.from, e.to);
        }
    }

    #[test]
    fn directions_match_coordinates() {
        for e in ADJACENCIES.iter() {
            let (q1, r1) = e.from.coord();
            let (q2, r2) = e.to.coord();
            assert_eq!(
                (q2 - q1, r2 - r1),
                e.direction.offset(),
                "edge {}-{} direction {:?} disagrees with coordinates",
                e.from,
                e.to,
                e.direction
            );
        }
    }

    #[test]
    fn every_coordinate_neighbor_is_listed() {
        for a in ALL_TILES {
            for b in ALL_TILES {
                let (q1, r1) = a.coord();
                let (q2, r2) = b.coord();
                let (dq, dr) = (q2 - q1, r2 - r1);
                let touching = (dq, dr) != (0, 0)
                    && dq.abs() <= 1
                    && dr.abs() <= 1
                    && (dq + dr).abs() <= 1;
                assert_eq!(is_adjacent(a, b), touching, "tiles {} and {}", a, b);
            }
        }
    }

    #[test]
    fn neighbor_counts_by_ring() {
        for tile in ALL_TILES {
            let n = neighbors(tile).count();
            match tile.info().ring {
                Ring::Centre | Ring::Inner => assert_eq!(n, 6, "tile {}", tile),
                // Corners of the outer ring touch three tiles, edges four.
                Ring::Outer => assert!(n == 3 || n == 4, "tile {} has {}", tile, n),
            }
        }
    }

    #[test]
    fn direction_is_inverted_for_reverse_lookup() {
        assert_eq!(direction(t(1), t(2)), Some(Direction::SW));
        assert_eq!(direction(t(2), t(1)), Some(Direction::NE));
        assert_eq!(direction(t(19), t(13)), Some(Direction::NW));
        assert_eq!(direction(t(1), t(19)), None);
    }

    #[test]
    fn step_walks_the_board() {
        assert_eq!(step(t(19), Direction::NW), Some(t(13)));
        assert_eq!(step(t(1), Direction::NW), None);
        assert_eq!(step(t(1), Direction::E), Some(t(12)));
    }

    #[test]
    fn spiral_path_is_connected() {
        // Consecutive tiles on the spiral path always share an edge.
        assert!(ALL_TILES.windows(2).all(|w| is_adjacent(w[0], w[1])));
    }

    #[test]
    fn matrix_is_symmetric() {
        let m = adjacency_matrix();
        let mut count = 0;
        for i in 0..TILE_COUNT {
            assert!(!m[i][i]);
            for j in 0..TILE_COUNT {
                assert_eq!(m[i][j], m[j][i]);
                if m[i][j] {
                    count += 1;
                }
            }
        }
        assert_eq!(count, ADJACENCY_COUNT * 2);
    }
}
