//! Diagnostic logging for the `transchunk` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is
//! left to the binary. Logs go to stderr so they never mix with command
//! output on stdout.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static LOGGING_INIT: OnceLock<()> = OnceLock::new();

/// Environment variable read for the log filter.
pub const LOG_ENV: &str = "RUST_LOG";

/// Returns the filter directive used when `RUST_LOG` is unset.
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "transchunk=debug" } else { "warn" }
}

/// Installs the global stderr subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. Calling this more than once
/// has no effect.
pub fn init_logging(verbose: bool) {
    LOGGING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        // Another subscriber may already be installed by the host program.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
