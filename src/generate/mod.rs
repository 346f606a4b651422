//! Board generation.
//!
//! Produces a complete `Board` over the fixed topology: terrain and desert
//! placement, number tokens under the 6/8 fairness rule, then ports. The
//! fairness rule is enforced by rejection sampling with a bounded number of
//! attempts.

pub mod ports;
pub mod production;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{adjacency_matrix, Board};

/// Default bound for each rejection loop.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Errors that can occur during generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("no fair number layout found in {attempts} attempts")]
    ProductionExhausted { attempts: u32 },

    #[error("no acceptable port layout found in {attempts} attempts")]
    PortsExhausted { attempts: u32 },
}

/// A named randomization preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Terrain, numbers and ports all shuffled.
    FullyRandom,
    /// Terrain shuffled; numbers and ports follow the standard setup order.
    SemiFixed,
}

impl Mode {
    /// Returns the generation options for this preset.
    pub fn options(self) -> GenerateOptions {
        match self {
            Mode::FullyRandom => GenerateOptions::default(),
            Mode::SemiFixed => GenerateOptions {
                randomize_production: false,
                randomize_ports: false,
                ..GenerateOptions::default()
            },
        }
    }
}

/// Generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Shuffle the number tokens instead of dealing them in standard order.
    pub randomize_production: bool,
    /// Shuffle the port kinds instead of using the standard order.
    pub randomize_ports: bool,
    /// Keep generic ports from sitting next to each other along the coast.
    pub spread_generic_ports: bool,
    /// Bound for each rejection loop.
    pub max_attempts: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            randomize_production: true,
            randomize_ports: true,
            spread_generic_ports: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GenerateOptions {
    /// Returns true when the spread rule is on but has nothing to act on,
    /// since fixed ports always use the standard placement.
    pub fn spread_is_inactive(&self) -> bool {
        self.spread_generic_ports && !self.randomize_ports
    }
}

/// A generated board plus how much rejection sampling it took.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generated {
    pub board: Board,
    /// Production layouts drawn, including the accepted one.
    pub production_attempts: u32,
    /// Port shuffles drawn (0 when ports are not randomized).
    pub port_attempts: u32,
}

/// Generates a board, discarding the attempt counts.
pub fn generate(options: &GenerateOptions, rng: &mut impl Rng) -> Result<Board, GenerateError> {
    generate_with_stats(options, rng).map(|g| g.board)
}

/// Generates a board and reports the attempt counts.
pub fn generate_with_stats(
    options: &GenerateOptions,
    rng: &mut impl Rng,
) -> Result<Generated, GenerateError> {
    if options.max_attempts == 0 {
        return Err(GenerateError::ZeroAttempts);
    }

    let adjacency = adjacency_matrix();
    let mut accepted = None;
    for attempt in 1..=options.max_attempts {
        let candidate = production::lay_out(options.randomize_production, rng);
        if production::has_adjacent_red(&candidate, &adjacency) {
            tracing::debug!(attempt, "6/8 adjacency, discarding layout");
            continue;
        }
        accepted = Some((candidate, attempt));
        break;
    }
    let (production, production_attempts) = accepted.ok_or(GenerateError::ProductionExhausted {
        attempts: options.max_attempts,
    })?;

    let (port_kinds, port_attempts) = ports::deal(
        options.randomize_ports,
        options.spread_generic_ports,
        options.max_attempts,
        rng,
    )
    .ok_or(GenerateError::PortsExhausted {
        attempts: options.max_attempts,
    })?;

    let board = Board::from_parts(production, port_kinds);
    debug_assert_eq!(board.validate(), Ok(()));
    tracing::debug!(production_attempts, port_attempts, "board generated");

    Ok(Generated {
        board,
        production_attempts,
        port_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Terrain, STANDARD_NUMBERS, STANDARD_PORTS};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn default_is_fully_random() {
        assert_eq!(Mode::FullyRandom.options(), GenerateOptions::default());
        let semi = Mode::SemiFixed.options();
        assert!(!semi.randomize_production);
        assert!(!semi.randomize_ports);
    }

    #[test]
    fn generated_boards_are_valid() {
        let mut rng = SmallRng::seed_from_u64(42);
        let options = GenerateOptions::default();
        for _ in 0..200 {
            let board = generate(&options, &mut rng).unwrap();
            assert_eq!(board.validate(), Ok(()));
        }
    }

    #[test]
    fn same_seed_same_board() {
        let options = GenerateOptions::default();
        let a = generate(&options, &mut SmallRng::seed_from_u64(9)).unwrap();
        let b = generate(&options, &mut SmallRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn semi_fixed_keeps_standard_order_and_never_retries() {
        let mut rng = SmallRng::seed_from_u64(5);
        let options = Mode::SemiFixed.options();
        for _ in 0..100 {
            let g = generate_with_stats(&options, &mut rng).unwrap();
            // The standard token order is fair wherever the desert lands.
            assert_eq!(g.production_attempts, 1);
            assert_eq!(g.port_attempts, 0);
            assert_eq!(g.board.numbers(), STANDARD_NUMBERS.to_vec());
            assert_eq!(g.board.port_kinds(), STANDARD_PORTS);
        }
    }

    #[test]
    fn spread_needs_shuffled_ports() {
        let mut options = Mode::SemiFixed.options();
        assert!(!options.spread_is_inactive());
        options.spread_generic_ports = true;
        assert!(options.spread_is_inactive());
        options.randomize_ports = true;
        assert!(!options.spread_is_inactive());
    }

    #[test]
    fn zero_attempts_is_rejected() {
        let options = GenerateOptions {
            max_attempts: 0,
            ..GenerateOptions::default()
        };
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            generate(&options, &mut rng),
            Err(GenerateError::ZeroAttempts)
        );
    }

    #[test]
    fn single_attempt_runs_out_on_an_unfair_layout() {
        let options = GenerateOptions {
            max_attempts: 1,
            ..GenerateOptions::default()
        };
        // Most shuffled layouts put a 6 or 8 next to another, so some
        // seed in this range rejects its only attempt.
        let failures: Vec<_> = (0..64)
            .filter_map(|seed| generate(&options, &mut SmallRng::seed_from_u64(seed)).err())
            .collect();
        assert!(!failures.is_empty());
        for e in failures {
            assert_eq!(e, GenerateError::ProductionExhausted { attempts: 1 });
        }
    }

    #[test]
    fn single_attempt_runs_out_on_touching_generic_ports() {
        let options = GenerateOptions {
            randomize_production: false,
            randomize_ports: true,
            spread_generic_ports: true,
            max_attempts: 1,
        };
        // Fixed tokens always pass, so every failure comes from the ports.
        let failures: Vec<_> = (0..64)
            .filter_map(|seed| generate(&options, &mut SmallRng::seed_from_u64(seed)).err())
            .collect();
        assert!(!failures.is_empty());
        for e in failures {
            assert_eq!(e, GenerateError::PortsExhausted { attempts: 1 });
        }
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: GenerateOptions =
            serde_json::from_str(r#"{"randomize_ports": false}"#).unwrap();
        assert!(options.randomize_production);
        assert!(!options.randomize_ports);
        assert_eq!(options.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn desert_is_never_numbered() {
        let mut rng = SmallRng::seed_from_u64(13);
        for _ in 0..100 {
            let board = generate(&GenerateOptions::default(), &mut rng).unwrap();
            let desert = board.desert().unwrap();
            assert_eq!(desert.terrain, Terrain::Desert);
            assert_eq!(desert.number, None);
        }
    }
}
