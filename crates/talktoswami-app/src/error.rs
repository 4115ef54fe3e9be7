//! Talk to Swami — startup error types.

use talktoswami_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the console host.
#[derive(Debug, Error)]
pub enum AppError {
    /// A configuration variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Content could not be loaded or a domain operation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Console I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
