//! Terrain and number-token placement.
//!
//! A production layout pairs every tile position with a terrain and (except
//! for the desert) a number token. Terrain is always shuffled and the desert
//! is dropped at a uniformly random point on the spiral path; tokens are then
//! dealt to the remaining tiles in path order.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{is_red, Terrain, STANDARD_NUMBERS, STANDARD_TERRAIN, TILE_COUNT, TOKEN_COUNT};

/// Terrain and optional token per tile, in path order.
pub type Production = [(Terrain, Option<u8>); TILE_COUNT];

/// Lays out one candidate production. Does not check the 6/8 rule.
pub fn lay_out(randomize_numbers: bool, rng: &mut impl Rng) -> Production {
    let mut terrain = STANDARD_TERRAIN;
    terrain.shuffle(rng);

    let mut numbers = STANDARD_NUMBERS;
    if randomize_numbers {
        numbers.shuffle(rng);
    }

    let desert_at = rng.gen_range(0..TILE_COUNT);
    let mut out = [(Terrain::Desert, None); TILE_COUNT];
    let mut next = 0;
    for (i, slot) in out.iter_mut().enumerate() {
        if i == desert_at {
            continue;
        }
        *slot = (terrain[next], Some(numbers[next]));
        next += 1;
    }
    debug_assert_eq!(next, TOKEN_COUNT);
    out
}

/// Returns true if two adjacent tiles both carry a 6 or 8.
pub fn has_adjacent_red(production: &Production, adjacency: &[[bool; TILE_COUNT]; TILE_COUNT]) -> bool {
    let red: [bool; TILE_COUNT] =
        std::array::from_fn(|i| production[i].1.is_some_and(is_red));
    (0..TILE_COUNT).any(|i| red[i] && (i + 1..TILE_COUNT).any(|j| red[j] && adjacency[i][j]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::adjacency_matrix;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn exactly_one_desert_without_token() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = lay_out(true, &mut rng);
            let deserts: Vec<_> = p.iter().filter(|(t, _)| t.is_desert()).collect();
            assert_eq!(deserts.len(), 1);
            assert_eq!(deserts[0].1, None);
            assert!(p
                .iter()
                .filter(|(t, _)| !t.is_desert())
                .all(|(_, n)| n.is_some()));
        }
    }

    #[test]
    fn fixed_numbers_follow_standard_order() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..50 {
            let p = lay_out(false, &mut rng);
            let numbers: Vec<u8> = p.iter().filter_map(|(_, n)| *n).collect();
            assert_eq!(numbers, STANDARD_NUMBERS.to_vec());
        }
    }

    #[test]
    fn desert_lands_everywhere_eventually() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut seen = [false; TILE_COUNT];
        for _ in 0..2000 {
            let p = lay_out(true, &mut rng);
            let idx = p.iter().position(|(t, _)| t.is_desert()).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn red_check_flags_touching_six_and_eight() {
        let adjacency = adjacency_matrix();
        let mut p: Production = [(Terrain::Forest, Some(4)); TILE_COUNT];
        p[18] = (Terrain::Desert, None);
        assert!(!has_adjacent_red(&p, &adjacency));

        // Tiles 1 and 2 share an edge.
        p[0].1 = Some(6);
        p[1].1 = Some(8);
        assert!(has_adjacent_red(&p, &adjacency));

        // Tiles 1 and 3 do not.
        p[1].1 = Some(4);
        p[2].1 = Some(6);
        assert!(!has_adjacent_red(&p, &adjacency));

        // Two sixes touching count too.
        p[13].1 = Some(6);
        assert!(has_adjacent_red(&p, &adjacency));
    }
}
