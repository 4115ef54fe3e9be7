//! Preferences service.
//!
//! Holds the current preference snapshot in memory and mirrors every change
//! to the injected `PreferenceStore`. Storage failures never reach the
//! caller: reads fall back to defaults and failed writes leave the in-memory
//! value as the source of truth for the rest of the session.

use std::collections::BTreeSet;
use std::sync::Arc;

use talktoswami_core::error::DomainError;
use talktoswami_core::store::PreferenceStore;
use talktoswami_quotes::domain::languages::DEFAULT_LANGUAGE;
use talktoswami_quotes::domain::quote_bank::QuoteBank;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::preferences::{FONT_SIZE_KEY, FontSize, LANGUAGE_KEY, Preferences};

/// Reads and writes user preferences.
pub struct PreferencesService {
    store: Arc<dyn PreferenceStore>,
    supported_languages: BTreeSet<String>,
    current: Arc<Preferences>,
}

impl std::fmt::Debug for PreferencesService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferencesService")
            .field("supported_languages", &self.supported_languages)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl PreferencesService {
    /// Reads both preferences from `store`, validating the language against
    /// `bank`. Never fails: missing, invalid or unreadable values fall back to
    /// their defaults.
    #[instrument(skip_all)]
    pub async fn load(store: Arc<dyn PreferenceStore>, bank: &QuoteBank) -> Self {
        let supported_languages: BTreeSet<String> =
            bank.languages().map(str::to_owned).collect();

        let language = match read(store.as_ref(), LANGUAGE_KEY).await {
            Some(code) if supported_languages.contains(&code) => code,
            Some(code) => {
                warn!(language = %code, "stored language is not supported, using default");
                DEFAULT_LANGUAGE.to_owned()
            }
            None => DEFAULT_LANGUAGE.to_owned(),
        };

        let font_size = match read(store.as_ref(), FONT_SIZE_KEY).await {
            Some(raw) => match raw.trim().parse::<u16>().ok().and_then(FontSize::from_points) {
                Some(size) => size,
                None => {
                    warn!(value = %raw, "stored font size is invalid, using default");
                    FontSize::default()
                }
            },
            None => FontSize::default(),
        };

        let current = Preferences {
            language,
            font_size,
        };
        info!(language = %current.language, font_size = %current.font_size, "preferences loaded");

        Self {
            store,
            supported_languages,
            current: Arc::new(current),
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn get(&self) -> Arc<Preferences> {
        Arc::clone(&self.current)
    }

    /// Returns `true` if `language` may be selected.
    #[must_use]
    pub fn is_supported(&self, language: &str) -> bool {
        self.supported_languages.contains(language)
    }

    /// Selects `language`, persisting it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `language` has no quote bank; the
    /// current snapshot is left unchanged. Storage failures are logged, not
    /// returned.
    #[instrument(skip(self))]
    pub async fn set_language(&mut self, language: &str) -> Result<(), DomainError> {
        if !self.is_supported(language) {
            return Err(DomainError::Validation(format!(
                "unknown language: {language}"
            )));
        }
        self.current = Arc::new(self.current.with_language(language));
        write(self.store.as_ref(), LANGUAGE_KEY, language).await;
        Ok(())
    }

    /// Selects `font_size`, persisting it. Storage failures are logged.
    #[instrument(skip(self))]
    pub async fn set_font_size(&mut self, font_size: FontSize) {
        self.current = Arc::new(self.current.with_font_size(font_size));
        write(
            self.store.as_ref(),
            FONT_SIZE_KEY,
            &font_size.points().to_string(),
        )
        .await;
    }
}

async fn read(store: &dyn PreferenceStore, key: &str) -> Option<String> {
    match store.get(key).await {
        Ok(value) => value,
        Err(e) => {
            error!(key, error = %e, "failed to read preference, using default");
            None
        }
    }
}

async fn write(store: &dyn PreferenceStore, key: &str, value: &str) {
    match store.set(key, value).await {
        Ok(()) => debug!(key, value, "preference saved"),
        Err(e) => error!(key, value, error = %e, "failed to save preference"),
    }
}
