//! Tracing setup for the CLI
//!
//! Logs go to stderr so stdout stays reserved for the rendered table.

use tracing_subscriber::{self, EnvFilter};

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence; otherwise `gitfame=warn`, or
/// `gitfame=debug` when `verbose` is set. A subscriber installed earlier
/// (e.g. by a test harness) is left in place.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "gitfame=debug" } else { "gitfame=warn" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
