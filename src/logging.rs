//! Log file setup.
//!
//! The terminal is owned by the renderer, so logs never go to stdout or
//! stderr. Setting `DSTATIC_LOG` to a filter directive (e.g. `debug` or
//! `dstatic::player=trace`) enables a file subscriber.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter directive variable.
pub const LOG_ENV: &str = "DSTATIC_LOG";

/// Log file override variable.
pub const LOG_FILE_ENV: &str = "DSTATIC_LOG_FILE";

/// Where logs are written: `DSTATIC_LOG_FILE`, else `dstatic.log` in the
/// temp dir.
pub fn log_path(file_override: Option<&str>) -> PathBuf {
    match file_override {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => std::env::temp_dir().join("dstatic.log"),
    }
}

/// Build the filter for a directive string.
pub fn filter_for(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .with_context(|| format!("Invalid {} directive: {}", LOG_ENV, directive))
}

/// Install the file subscriber if `DSTATIC_LOG` is set.
///
/// Returns whether logging was enabled.
#[cfg(not(tarpaulin_include))]
pub fn init() -> Result<bool> {
    let directive = match std::env::var(LOG_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => return Ok(false),
    };
    let filter = filter_for(&directive)?;
    let path = log_path(std::env::var(LOG_FILE_ENV).ok().as_deref());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;
    tracing::info!(path = %path.display(), "logging enabled");
    Ok(true)
}
