//! File logging setup.
//!
//! The terminal belongs to the UI, so log records go to a file under the
//! data directory or nowhere at all.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Install the global logger. Returns the log file path when logging is enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        log::set_max_level(log::LevelFilter::Off);
        return Ok(None);
    }

    let level = config.level_filter()?;
    let path = get_log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file)
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    log::info!("Logging to {}", path.display());
    Ok(Some(path))
}

/// Location of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(data_dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}
