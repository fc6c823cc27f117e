//! Tracing setup for the client binary.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Diagnostics go to stderr so character sheets on stdout stay clean.
/// `RUST_LOG` overrides the default `info` filter.
pub fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
