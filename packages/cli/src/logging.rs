// ABOUTME: Tracing subscriber setup for the learnpath binary
// ABOUTME: Compact stderr logs filtered by RUST_LOG or the configured filter

use tracing_subscriber::EnvFilter;

/// Build the filter, letting RUST_LOG override the configured default
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

pub fn init_logging(default_filter: &str) {
    // Logs go to stderr so exported documents on stdout stay clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
