//! Batch board generation CLI.
//!
//! Generates many boards and outputs them as JSONL, with a summary of how
//! much rejection sampling they needed on stderr.
//!
//! Usage:
//!   cargo run --release --bin batch -- [OPTIONS]

use std::fs::File;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use catan_board::batch::{self, BatchConfig};
use catan_board::generate::{Mode, DEFAULT_MAX_ATTEMPTS};
use catan_board::logging::init_logger;

#[derive(Debug, Parser)]
#[command(name = "batch", about = "Generate many boards as JSON lines")]
struct Args {
    /// Number of boards to generate.
    #[arg(long, default_value_t = 100)]
    boards: usize,

    /// Randomization preset.
    #[arg(long, value_enum, default_value = "fully-random")]
    mode: Mode,

    /// Keep 3:1 ports from sitting next to each other.
    #[arg(long)]
    spread_generic_ports: bool,

    /// Bound for each rejection loop.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Number of parallel threads.
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Base seed for a reproducible run (default: entropy).
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path (default: stdout).
    #[arg(long)]
    output: Option<String>,

    /// Suppress summary output.
    #[arg(long)]
    quiet: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let mut options = args.mode.options();
    options.spread_generic_ports = args.spread_generic_ports;
    if options.spread_is_inactive() {
        tracing::warn!("--spread-generic-ports has no effect with fixed ports");
    }
    options.max_attempts = args.max_attempts;
    let config = BatchConfig {
        boards: args.boards,
        options,
        threads: args.threads.max(1),
        seed: args.seed,
    };

    let start = Instant::now();
    let records = match batch::run_batch(&config) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    let written = match &args.output {
        Some(path) => File::create(path)
            .and_then(|f| batch::write_jsonl(&records, &mut BufWriter::new(f))),
        None => {
            let stdout = io::stdout();
            batch::write_jsonl(&records, &mut BufWriter::new(stdout.lock()))
        }
    };
    if let Err(e) = written {
        tracing::error!("failed to write output: {}", e);
        return ExitCode::FAILURE;
    }

    if !args.quiet {
        let s = batch::summarize(&records);
        eprintln!(
            "Generated {} boards in {:.3}s ({} threads)",
            s.boards,
            elapsed.as_secs_f64(),
            config.threads
        );
        eprintln!(
            "Production attempts: total {}, mean {:.2}, max {}, first try {}",
            s.total_attempts, s.mean_attempts, s.max_attempts, s.first_try
        );
        if let Some(path) = &args.output {
            eprintln!("Wrote {} boards to {}", records.len(), path);
        }
    }

    ExitCode::SUCCESS
}
