//! Tracing subscriber setup.
//!
//! The terminal belongs to the UI while the program runs, so logs only go
//! to a file, and only when one is configured.

use crate::config::Config;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber described by `config`.
///
/// Returns `Ok(false)` when no log file is configured and nothing was
/// installed.
pub fn init(config: &Config) -> io::Result<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    Ok(true)
}
