use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter directives, e.g. `SITEDECK_LOG=sitedeck=debug`.
pub const LOG_ENV: &str = "SITEDECK_LOG";

/// The terminal belongs to the UI, so logs go to a file.
#[must_use]
pub fn log_path() -> PathBuf {
    home::home_dir()
        .map(|h| h.join(".local").join("state").join("sitedeck"))
        .unwrap_or_else(std::env::temp_dir)
        .join("sitedeck.log")
}

pub fn init() -> Result<PathBuf> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;

    Ok(path)
}
