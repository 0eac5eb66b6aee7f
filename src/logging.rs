//! Diagnostic logging setup.
//!
//! Report lines go to a [`Sink`](crate::Sink); tracing output goes to
//! stderr so the two never interleave on stdout.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "dep_inversion=warn";

/// Installs a fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
