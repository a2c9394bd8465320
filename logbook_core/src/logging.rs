//! Logging setup shared by the logbook binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when neither `RUST_LOG` nor a verbosity flag is given
///
/// Only warnings, so command output on stdout is not interleaved with logs.
pub const DEFAULT_LEVEL: &str = "warn";

/// Map a `-v` count to a filter directive
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LEVEL,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging to stderr
///
/// `RUST_LOG` overrides the level derived from `verbosity`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
