//! Logging init: stderr with env-filter overrides.
//!
//! The CLI is one-shot and may print the export CSV to stdout, so logs go to
//! stderr. Override the filter with `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,urlsheet_core=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
