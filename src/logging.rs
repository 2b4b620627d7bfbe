//! Tracing setup.

use crate::AppConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Routes tracing output to the configured log file.
///
/// `RUST_LOG` wins over the configured filter. Output goes to a file so it
/// never interleaves with the terminal UI or scripted output on stdout.
pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("creating log file {}", config.log_file().display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    // Don't fail if a subscriber is already installed (tests, embedding).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
