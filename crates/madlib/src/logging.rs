//! Diagnostics setup
//!
//! Everything goes to stderr; stdout carries only the rendered template.

use anyhow::{Result, anyhow};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str = "madlib=debug,madlib_core=debug";

/// Install the global subscriber
///
/// `RUST_LOG` wins when set. Otherwise diagnostics are off unless `verbose`.
pub fn init(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(verbose)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { "off" }
}
