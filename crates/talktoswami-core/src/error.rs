//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A request that violates a domain rule (e.g. an unknown language code).
    #[error("validation error: {0}")]
    Validation(String),

    /// Static content (quote banks, translations) is missing or malformed.
    #[error("data error: {0}")]
    Data(String),

    /// The preference store could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// A platform integration (share sheet, URL opener) failed.
    #[error("platform error: {0}")]
    Platform(String),
}
