//! Logging setup
//!
//! The TUI owns the terminal, so log lines go to a file. `RUST_LOG` takes
//! precedence over the configured verbosity.

use std::fs::{self, File};
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::AppConfig;
use crate::error::AppResult;

/// Builds the filter: `RUST_LOG` if set and valid, else the verbosity
#[must_use]
pub fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()))
}

/// Installs the global subscriber writing to `config.log_file`
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed
pub fn initialize_logging(config: &AppConfig) -> AppResult<()> {
    if let Some(dir) = config.log_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&config.log_file)?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    if config.log_json {
        tracing_subscriber::registry()
            .with(layer.json().with_filter(env_filter(config)))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(layer.with_filter(env_filter(config)))
            .try_init()?;
    }

    info!(
        path = %config.log_file.display(),
        verbosity = ?config.verbosity,
        "logging initialized"
    );
    Ok(())
}
