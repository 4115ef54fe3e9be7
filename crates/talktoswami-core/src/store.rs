//! Key-value preference store abstraction.

use async_trait::async_trait;

use crate::error::DomainError;

/// Persistent string key-value storage for user preferences.
///
/// Implementations report failures as `DomainError::Storage`; recovering from
/// them is the caller's concern.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` if it was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
}
