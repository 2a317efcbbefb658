//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout carries only the command's JSON or text result.
//! Verbosity follows `RUST_LOG`, defaulting to warnings from this crate; set
//! `RUST_LOG=lk_cli=debug` to trace credential resolution and upstream requests.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "lk_cli=warn";

/// Install the global subscriber; later calls are no-ops
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Fails only if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
