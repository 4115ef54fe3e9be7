//! Test platforms — mock `Platform` implementations for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use talktoswami_core::error::DomainError;
use talktoswami_core::platform::Platform;

/// One call made against a `RecordingPlatform`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    /// `share_text(message)`.
    ShareText(String),
    /// `share_card(text, image)`.
    ShareCard {
        /// The quote text.
        text: String,
        /// The image path.
        image: String,
    },
    /// `open_url(url)`.
    OpenUrl(String),
}

/// A platform that succeeds and records every call. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingPlatform {
    calls: Arc<Mutex<Vec<PlatformCall>>>,
}

impl RecordingPlatform {
    /// Create a platform with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded calls, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Platform for RecordingPlatform {
    async fn share_text(&self, message: &str) -> Result<(), DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push(PlatformCall::ShareText(message.to_owned()));
        Ok(())
    }

    async fn share_card(&self, text: &str, image: &str) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(PlatformCall::ShareCard {
            text: text.to_owned(),
            image: image.to_owned(),
        });
        Ok(())
    }

    async fn open_url(&self, url: &str) -> Result<(), DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push(PlatformCall::OpenUrl(url.to_owned()));
        Ok(())
    }
}

/// A platform whose every call fails.
#[derive(Debug)]
pub struct FailingPlatform;

#[async_trait]
impl Platform for FailingPlatform {
    async fn share_text(&self, _message: &str) -> Result<(), DomainError> {
        Err(DomainError::Platform("share sheet unavailable".into()))
    }

    async fn share_card(&self, _text: &str, _image: &str) -> Result<(), DomainError> {
        Err(DomainError::Platform("share sheet unavailable".into()))
    }

    async fn open_url(&self, _url: &str) -> Result<(), DomainError> {
        Err(DomainError::Platform("no handler for url".into()))
    }
}
