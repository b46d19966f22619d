//! Structured logging to a file.
//!
//! The terminal belongs to the TUI, so events go to a log file instead of
//! stderr. `ENCORE_LOG` overrides the configured filter.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{LoggingSettings, default_log_path};
use crate::error::{Error, Result};

const FILTER_ENV: &str = "ENCORE_LOG";

/// Install the global subscriber. Returns the log file in use, or `None`
/// when no location could be determined (logging stays off).
pub fn init(settings: &LoggingSettings) -> Result<Option<PathBuf>> {
    let Some(path) = settings.file.clone().or_else(default_log_path) else {
        return Ok(None);
    };

    let file = open_log_file(&path)?;
    let filter = build_filter(&settings.level).map_err(|msg| Error::logging(&path, msg))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .map_err(|e| Error::logging(&path, e.to_string()))?;

    Ok(Some(path))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::logging(path, e.to_string()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::logging(path, e.to_string()))
}

fn build_filter(level: &str) -> std::result::Result<EnvFilter, String> {
    match EnvFilter::try_from_env(FILTER_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).map_err(|e| format!("invalid log level {level:?}: {e}")),
    }
}
