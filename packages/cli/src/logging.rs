// ABOUTME: Tracing subscriber setup for the tokendesk binary
// ABOUTME: Reads RUST_LOG and writes to stderr so logs never mix with rendered output

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use tokendesk_config::{constants, defaults};

/// Filter from `RUST_LOG`, or the default level when it is unset or invalid.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(constants::RUST_LOG)
        .unwrap_or_else(|_| EnvFilter::new(defaults::LOG_FILTER))
}

pub fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
