//! Port-type placement around the coast.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{PortKind, PORT_COUNT, STANDARD_PORTS};

/// Returns true if two generic ports sit at neighbouring coastal locations.
///
/// Port locations form a ring, so the last and first are neighbours.
pub fn generic_ports_touch(kinds: &[PortKind; PORT_COUNT]) -> bool {
    (0..PORT_COUNT).any(|i| kinds[i].is_generic() && kinds[(i + 1) % PORT_COUNT].is_generic())
}

/// Deals port kinds to port locations.
///
/// Without `randomize` the standard placement order is used as-is. With
/// `spread_generic` the shuffle is repeated (up to `max_attempts` times)
/// until no two generic ports touch. Returns the kinds and the number of
/// shuffles taken, or None if every attempt failed.
pub fn deal(
    randomize: bool,
    spread_generic: bool,
    max_attempts: u32,
    rng: &mut impl Rng,
) -> Option<([PortKind; PORT_COUNT], u32)> {
    if !randomize {
        return Some((STANDARD_PORTS, 0));
    }

    for attempt in 1..=max_attempts {
        let mut kinds = STANDARD_PORTS;
        kinds.shuffle(rng);
        if spread_generic && generic_ports_touch(&kinds) {
            tracing::trace!(attempt, "generic ports touch, reshuffling");
            continue;
        }
        return Some((kinds, attempt));
    }
    None
}
