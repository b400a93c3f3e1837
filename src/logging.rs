//! Tracing setup for the binary

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LOG_ENV;

/// Install a stderr subscriber filtered by `CCX_CONFORMANCE_LOG`.
///
/// Falls back to `warn`, or `debug` with `--verbose`. Safe to call twice;
/// the second call is a no-op.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
