//! Error types for the binary

use thiserror::Error;

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Errors that stop the application
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal or log file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A global tracing subscriber was already installed
    #[error("Logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
