//! Console implementation of the `Platform` trait.
//!
//! Stands in for the mobile share sheet and URL opener by printing what
//! would have been handed to the operating system.

use async_trait::async_trait;
use talktoswami_core::error::DomainError;
use talktoswami_core::platform::Platform;
use tokio::io::AsyncWriteExt;
use tracing::info;

const OPENABLE_SCHEMES: [&str; 3] = ["https://", "http://", "mailto:"];

/// Platform that writes share and open requests to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePlatform;

impl ConsolePlatform {
    async fn emit(&self, line: String) -> Result<(), DomainError> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("{line}\n").as_bytes())
            .await
            .map_err(|e| DomainError::Platform(format!("failed to write to stdout: {e}")))?;
        stdout
            .flush()
            .await
            .map_err(|e| DomainError::Platform(format!("failed to flush stdout: {e}")))
    }
}

#[async_trait]
impl Platform for ConsolePlatform {
    async fn share_text(&self, message: &str) -> Result<(), DomainError> {
        info!("sharing text");
        self.emit(format!("[share] {message}")).await
    }

    async fn share_card(&self, text: &str, image: &str) -> Result<(), DomainError> {
        info!(image, "sharing quote card");
        self.emit(format!("[share card] {text} ({image})")).await
    }

    async fn open_url(&self, url: &str) -> Result<(), DomainError> {
        if !OPENABLE_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
            return Err(DomainError::Platform(format!("no handler for url: {url}")));
        }
        info!(url, "opening url");
        self.emit(format!("[open] {url}")).await
    }
}
