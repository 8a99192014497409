//! File logging.
//!
//! The terminal belongs to the UI, so logs go to a file.

use std::fs::File;

use simplelog::{Config, WriteLogger};

use crate::config::NavigationConfig;
use crate::error::LoggingError;

/// Install a file logger as configured.
///
/// Returns `Ok(false)` without touching the global logger when no log file
/// is configured.
pub fn init_logging(config: &NavigationConfig) -> Result<bool, LoggingError> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };
    let file = File::create(path).map_err(|source| LoggingError::Io {
        path: path.clone(),
        source,
    })?;
    WriteLogger::init(config.log_level, Config::default(), file)?;
    log::info!("[logging] writing {} logs to {}", config.log_level, path.display());
    Ok(true)
}
