//! Log subscriber setup for the binaries.
//!
//! Logs go to stderr so that stdout carries only boards and command
//! responses. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logger(verbose: bool) {
    let default = if verbose {
        "catan_board=debug,info"
    } else {
        "catan_board=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
