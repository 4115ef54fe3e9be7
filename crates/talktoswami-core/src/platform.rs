//! Platform integration abstraction.

use async_trait::async_trait;

use crate::error::DomainError;

/// Operating-system services the screen hands work off to.
///
/// Implementations report failures as `DomainError::Platform`.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Opens the share sheet with a plain text message.
    async fn share_text(&self, message: &str) -> Result<(), DomainError>;

    /// Opens the share sheet with a rendered quote card.
    async fn share_card(&self, text: &str, image: &str) -> Result<(), DomainError>;

    /// Opens `url` in the handler registered for its scheme.
    async fn open_url(&self, url: &str) -> Result<(), DomainError>;
}
