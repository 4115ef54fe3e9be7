//! Quote sequencer.
//!
//! Every operation takes `&mut self` and awaits its transition before
//! returning, so the card never runs two transitions at once: an interaction
//! that arrives while a transition is in flight is handled after it
//! completes.

use std::sync::Arc;

use talktoswami_core::error::DomainError;
use talktoswami_core::rng::DeterministicRng;
use talktoswami_core::transition::Transition;
use talktoswami_quotes::domain::images::CategoryImageMap;
use talktoswami_quotes::domain::quote_bank::QuoteBank;
use talktoswami_quotes::domain::selection::{Quote, select_random_quote};
use talktoswami_settings::application::service::PreferencesService;
use talktoswami_settings::domain::preferences::{FontSize, Preferences};
use tracing::{debug, info, instrument};

use crate::domain::card::{Card, CardState};

/// Selects quotes and sequences the card through its transitions.
pub struct QuoteSequencer {
    bank: Arc<QuoteBank>,
    images: Arc<CategoryImageMap>,
    preferences: PreferencesService,
    transition: Arc<dyn Transition>,
    rng: Box<dyn DeterministicRng>,
    card: Card,
}

impl std::fmt::Debug for QuoteSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteSequencer")
            .field("preferences", &self.preferences)
            .field("card", &self.card)
            .finish_non_exhaustive()
    }
}

impl QuoteSequencer {
    /// Creates a sequencer with a hidden card.
    #[must_use]
    pub fn new(
        bank: Arc<QuoteBank>,
        images: Arc<CategoryImageMap>,
        preferences: PreferencesService,
        transition: Arc<dyn Transition>,
        rng: Box<dyn DeterministicRng>,
    ) -> Self {
        Self {
            bank,
            images,
            preferences,
            transition,
            rng,
            card: Card::new(),
        }
    }

    /// Returns the card.
    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// Returns the displayed quote, if any.
    #[must_use]
    pub fn displayed_quote(&self) -> Option<&Quote> {
        self.card.quote()
    }

    /// Returns `true` while a quote is on screen.
    #[must_use]
    pub fn is_card_visible(&self) -> bool {
        self.card.is_visible()
    }

    /// Returns the current preference snapshot.
    #[must_use]
    pub fn preferences(&self) -> Arc<Preferences> {
        self.preferences.get()
    }

    /// Returns the quote bank.
    #[must_use]
    pub fn bank(&self) -> &QuoteBank {
        &self.bank
    }

    /// Draws a quote in the selected language without touching the card.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the selected language or the drawn category
    /// is inconsistent with the loaded content.
    pub fn select_random_quote(&mut self) -> Result<Quote, DomainError> {
        let language = self.preferences.get();
        select_random_quote(
            &self.bank,
            &self.images,
            &language.language,
            self.rng.as_mut(),
        )
    }

    /// Draws a new quote, puts it on the card and runs the entrance
    /// transition. A quote already on screen is replaced.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if selection fails; the card is left unchanged.
    #[instrument(skip(self))]
    pub async fn show_new_quote(&mut self) -> Result<(), DomainError> {
        let quote = self.select_random_quote()?;
        info!(category = %quote.category, "showing new quote");
        self.card.show(quote);
        self.transition.enter().await;
        Ok(())
    }

    /// Runs the exit transition and clears the card. Returns `false` without
    /// doing anything if no card is visible.
    #[instrument(skip(self))]
    pub async fn dismiss_quote(&mut self) -> bool {
        if self.card.state() == CardState::Hidden {
            debug!("no card to dismiss");
            return false;
        }
        self.transition.exit().await;
        self.card.hide();
        info!("quote dismissed");
        true
    }

    /// Handles the navigation-back gesture. Returns `true` if a visible card
    /// consumed it.
    pub async fn back(&mut self) -> bool {
        self.dismiss_quote().await
    }

    /// Selects `language`. A visible card is first moved off screen and
    /// cleared; the preference changes only after that transition completes.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a language without a quote bank;
    /// nothing changes in that case.
    #[instrument(skip(self))]
    pub async fn change_language(&mut self, language: &str) -> Result<(), DomainError> {
        if !self.preferences.is_supported(language) {
            return Err(DomainError::Validation(format!(
                "unknown language: {language}"
            )));
        }
        if self.card.is_visible() {
            self.transition.exit().await;
            self.card.hide();
        }
        self.preferences.set_language(language).await?;
        info!(language, "language changed");
        Ok(())
    }

    /// Selects `font_size`. The card is not affected.
    #[instrument(skip(self))]
    pub async fn change_font_size(&mut self, font_size: FontSize) {
        self.preferences.set_font_size(font_size).await;
        info!(font_size = %font_size, "font size changed");
    }
}
