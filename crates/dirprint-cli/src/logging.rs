//! Logging setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used for the given verbosity
///
/// `RUST_LOG` wins when it is set.
#[must_use]
pub fn filter_for(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber, writing to stderr so stdout stays parseable
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter_for(verbose))
        .init();
}
