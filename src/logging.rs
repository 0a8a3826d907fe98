//! Logger setup.
//!
//! The terminal owns stdout and stderr while a game runs, so log output goes
//! to a file or nowhere. `RUST_LOG` picks the filter; it defaults to `info`
//! when a file is configured.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};

/// Install the global logger. Without a path logging stays off.
pub fn init(log_path: Option<&Path>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;
    Ok(())
}
