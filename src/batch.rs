//! Batch board generation.
//!
//! Generates many boards in one run, optionally across a rayon thread pool,
//! and writes them as JSON lines. With a seed each board `i` is drawn from
//! its own generator seeded `seed + i`, so the output does not depend on the
//! thread count.

use std::io::Write;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::Board;
use crate::generate::{generate_with_stats, GenerateError, GenerateOptions};

/// Configuration for a batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Number of boards to generate.
    pub boards: usize,
    /// Options applied to every board.
    pub options: GenerateOptions,
    /// Number of worker threads; 1 runs on the calling thread.
    pub threads: usize,
    /// Base seed; None seeds every board from entropy.
    pub seed: Option<u64>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            boards: 100,
            options: GenerateOptions::default(),
            threads: 4,
            seed: None,
        }
    }
}

/// Errors from a batch run.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("board {index}: {source}")]
    Generate {
        index: usize,
        #[source]
        source: GenerateError,
    },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// One generated board with its bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardRecord {
    pub index: usize,
    /// Seed of this board's generator, when the run was seeded.
    pub seed: Option<u64>,
    pub production_attempts: u32,
    pub port_attempts: u32,
    pub board: Board,
}

/// Aggregate statistics over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BatchSummary {
    pub boards: usize,
    pub total_attempts: u64,
    pub max_attempts: u32,
    pub mean_attempts: f64,
    /// Boards accepted on their first production layout.
    pub first_try: usize,
}

fn rng_for(config: &BatchConfig, index: usize) -> (SmallRng, Option<u64>) {
    match config.seed {
        Some(base) => {
            let seed = base.wrapping_add(index as u64);
            (SmallRng::seed_from_u64(seed), Some(seed))
        }
        None => (SmallRng::from_entropy(), None),
    }
}

fn generate_one(config: &BatchConfig, index: usize) -> Result<BoardRecord, BatchError> {
    let (mut rng, seed) = rng_for(config, index);
    let g = generate_with_stats(&config.options, &mut rng)
        .map_err(|source| BatchError::Generate { index, source })?;
    Ok(BoardRecord {
        index,
        seed,
        production_attempts: g.production_attempts,
        port_attempts: g.port_attempts,
        board: g.board,
    })
}

/// Runs a batch and returns the records in index order.
pub fn run_batch(config: &BatchConfig) -> Result<Vec<BoardRecord>, BatchError> {
    tracing::info!(
        boards = config.boards,
        threads = config.threads,
        seed = ?config.seed,
        "starting batch"
    );
    if config.threads > 1 {
        run_batch_parallel(config)
    } else {
        (0..config.boards).map(|i| generate_one(config, i)).collect()
    }
}

/// Parallel batch: boards are generated concurrently using rayon.
fn run_batch_parallel(config: &BatchConfig) -> Result<Vec<BoardRecord>, BatchError> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    pool.install(|| {
        (0..config.boards)
            .into_par_iter()
            .map(|i| generate_one(config, i))
            .collect()
    })
}

/// Computes attempt statistics for a set of records.
pub fn summarize(records: &[BoardRecord]) -> BatchSummary {
    if records.is_empty() {
        return BatchSummary::default();
    }
    let total: u64 = records.iter().map(|r| r.production_attempts as u64).sum();
    BatchSummary {
        boards: records.len(),
        total_attempts: total,
        max_attempts: records
            .iter()
            .map(|r| r.production_attempts)
            .max()
            .unwrap_or(0),
        mean_attempts: total as f64 / records.len() as f64,
        first_try: records
            .iter()
            .filter(|r| r.production_attempts == 1)
            .count(),
    }
}

/// Writes records as JSON lines.
pub fn write_jsonl<W: Write>(records: &[BoardRecord], out: &mut W) -> std::io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    out.flush()
}
