//! Logging setup for the BMI service binaries.

use tracing_subscriber::EnvFilter;

/// Initialize tracing with env-based filtering and compact output
///
/// Default level is INFO; RUST_LOG takes precedence when set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}
