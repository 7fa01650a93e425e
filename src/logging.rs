//! Append-only file logging.
//!
//! Every event is written to the configured log file as
//! `<timestamp> <LEVEL> <message>` with ANSI colouring disabled. The
//! subscriber is installed once at startup; components only emit `tracing`
//! events and never touch the file directly.

use crate::config::LogConfig;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("global logger already initialized")]
    AlreadyInitialized,
}

/// Builds the file subscriber without installing it.
///
/// The level comes from `config` alone; the environment is not consulted.
///
/// # Errors
///
/// Returns [`LoggingError::Open`] when the log file cannot be opened.
pub fn subscriber(config: &LogConfig) -> Result<impl Subscriber + Send + Sync, LoggingError> {
    build(config, EnvFilter::new(config.level.as_str()))
}

/// Installs the file subscriber as the process-wide default.
///
/// # Errors
///
/// Returns [`LoggingError::Open`] when the log file cannot be opened, or
/// [`LoggingError::AlreadyInitialized`] when a global subscriber is set.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    // RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    tracing::subscriber::set_global_default(build(config, filter)?)
        .map_err(|_| LoggingError::AlreadyInitialized)
}

fn build(
    config: &LogConfig,
    filter: EnvFilter,
) -> Result<impl Subscriber + Send + Sync, LoggingError> {
    let file = open_log_file(&config.path)?;

    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish())
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let open_error = |source| LoggingError::Open {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(open_error)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_error)
}
