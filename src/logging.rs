//! Logger setup
//!
//! The terminal belongs to the game screen, so log records go to a file.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::Path;

/// Install an env_logger writing to `log_file`, level from `RUST_LOG` (default `info`)
///
/// Without a file no logger is installed and log macros are no-ops.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {:?}", path))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("Failed to install logger")?;

    log::info!("Logging to {:?}", path);
    Ok(())
}
