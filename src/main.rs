//! catan-board -- interactive starting-board generator.
//!
//! Prints a board on launch, then reads line commands from stdin (`new`,
//! `set`, `show`, `quit`, ...) and writes boards and responses to stdout.
//! Logs go to stderr.

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;

use catan_board::generate::Mode;
use catan_board::logging::init_logger;
use catan_board::protocol::{parse_command, Command};
use catan_board::render::RenderOptions;
use catan_board::session::Session;

/// Generate randomized starting boards for the standard base game.
#[derive(Debug, Parser)]
#[command(name = "catan-board", version)]
struct Args {
    /// Seed for a reproducible session (default: entropy).
    #[arg(long)]
    seed: Option<u64>,

    /// Randomization preset.
    #[arg(long, value_enum, default_value = "fully-random")]
    mode: Mode,

    /// Keep 3:1 ports from sitting next to each other.
    #[arg(long)]
    spread_generic_ports: bool,

    /// Disable ANSI colour in board output.
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

/// Runs the session loop, reading commands from stdin until `quit` or EOF.
fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let mut options = args.mode.options();
    options.spread_generic_ports = args.spread_generic_ports;
    if options.spread_is_inactive() {
        tracing::warn!("--spread-generic-ports has no effect with fixed ports");
    }
    let render = RenderOptions {
        color: !args.no_color,
    };

    let mut session = match Session::new(options, render, args.seed) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if let Err(e) = session.dispatch(Command::Show, &mut out) {
        tracing::error!("write failed: {}", e);
        return ExitCode::FAILURE;
    }

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match session.dispatch(cmd, &mut out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                tracing::error!("write failed: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    tracing::debug!(boards = session.generated(), "session ended");
    ExitCode::SUCCESS
}
