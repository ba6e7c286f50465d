//! Tracing setup.
//!
//! Log events go to stderr so stdout carries only command results.
//! `RUST_LOG` takes precedence over the built-in filters.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

/// Installs the global subscriber.
pub fn init(verbose: bool) -> Result<()> {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))
}
