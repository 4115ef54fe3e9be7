//! The home screen controller.
//!
//! Owns the quote sequencer together with the navigation state around it:
//! the drawer, the language and font-size pickers, the About page and the
//! transient notice. A renderer reads [`HomeScreen::view`] after every
//! interaction.

use std::sync::Arc;

use serde::Serialize;
use talktoswami_core::error::DomainError;
use talktoswami_core::platform::Platform;
use talktoswami_quotes::domain::languages::{LANGUAGE_LABELS, label_for};
use talktoswami_quotes::domain::translations::Translations;
use talktoswami_sequencer::application::sequencer::QuoteSequencer;
use talktoswami_sequencer::domain::card::CardState;
use talktoswami_settings::domain::preferences::FontSize;
use tracing::{debug, error, info, instrument};

use crate::links::{ABOUT_LINKS, AboutLink, MobileOs, feedback_url, share_app_message};

/// Notice shown when "share" is pressed with no card on screen.
pub const NO_CARD_NOTICE: &str = "No card to share!";

/// Which page is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// The quote page.
    #[default]
    Home,
    /// The About page.
    About,
}

/// Which picker is open over the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Modal {
    /// Language list.
    LanguagePicker,
    /// Small / medium / large.
    FontSizePicker,
}

/// Strings of the exit confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExitDialog {
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
    /// Label of the button that exits.
    pub confirm: String,
    /// Label of the button that stays.
    pub cancel: String,
}

/// What the back gesture did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackOutcome {
    /// Returned from the About page.
    AboutClosed,
    /// Closed the open drawer.
    DrawerClosed,
    /// Moved the visible card off screen.
    CardDismissed,
    /// Nothing left to close; the host should ask before exiting.
    ConfirmExit(ExitDialog),
}

/// One row of the language picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    /// Language code.
    pub code: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Whether this is the selected language.
    pub selected: bool,
}

/// One button of the font-size picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontSizeOption {
    /// The preset.
    pub size: FontSize,
    /// Translated label.
    pub label: String,
    /// Whether this is the selected preset.
    pub selected: bool,
}

/// Render-ready view of the displayed quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteView {
    /// Quote text.
    pub text: String,
    /// Image path.
    pub image: String,
}

/// Everything a renderer needs to draw the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenView {
    /// Current page.
    pub route: Route,
    /// Whether the drawer is open.
    pub drawer_open: bool,
    /// Open picker, if any.
    pub modal: Option<Modal>,
    /// Card state.
    pub card: CardState,
    /// Displayed quote, if any.
    pub quote: Option<QuoteView>,
    /// Point size for quote text.
    pub font_size: u16,
    /// Selected language code.
    pub language: String,
    /// Display label of the selected language.
    pub language_label: String,
    /// Label of the button that draws a quote.
    pub button_label: String,
    /// Transient notice, if any.
    pub notice: Option<String>,
}

/// Home screen state and interactions.
pub struct HomeScreen {
    sequencer: QuoteSequencer,
    translations: Arc<Translations>,
    platform: Arc<dyn Platform>,
    os: MobileOs,
    feedback_email: String,
    route: Route,
    drawer_open: bool,
    modal: Option<Modal>,
    notice: Option<String>,
}

impl std::fmt::Debug for HomeScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomeScreen")
            .field("sequencer", &self.sequencer)
            .field("os", &self.os)
            .field("route", &self.route)
            .field("drawer_open", &self.drawer_open)
            .field("modal", &self.modal)
            .field("notice", &self.notice)
            .finish_non_exhaustive()
    }
}

impl HomeScreen {
    /// Creates the screen on the Home page with everything closed.
    #[must_use]
    pub fn new(
        sequencer: QuoteSequencer,
        translations: Arc<Translations>,
        platform: Arc<dyn Platform>,
        os: MobileOs,
        feedback_email: impl Into<String>,
    ) -> Self {
        Self {
            sequencer,
            translations,
            platform,
            os,
            feedback_email: feedback_email.into(),
            route: Route::Home,
            drawer_open: false,
            modal: None,
            notice: None,
        }
    }

    /// Returns the sequencer.
    #[must_use]
    pub fn sequencer(&self) -> &QuoteSequencer {
        &self.sequencer
    }

    /// Returns the current page.
    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    /// Returns `true` while the drawer is open.
    #[must_use]
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Returns the open picker.
    #[must_use]
    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    /// Returns the UI string `key` in the selected language.
    #[must_use]
    pub fn text(&self, key: &str, default: &'static str) -> String {
        let preferences = self.sequencer.preferences();
        self.translations
            .for_language(&preferences.language)
            .get_or(key, default)
            .to_owned()
    }

    /// Builds the render view.
    #[must_use]
    pub fn view(&self) -> ScreenView {
        let preferences = self.sequencer.preferences();
        ScreenView {
            route: self.route,
            drawer_open: self.drawer_open,
            modal: self.modal,
            card: self.sequencer.card().state(),
            quote: self.sequencer.displayed_quote().map(|q| QuoteView {
                text: q.text.clone(),
                image: q.image.path().to_owned(),
            }),
            font_size: preferences.font_size.points(),
            language: preferences.language.clone(),
            language_label: label_for(&preferences.language)
                .map_or_else(|| preferences.language.clone(), str::to_owned),
            button_label: self.text("talktoswami", "Talk to Swami"),
            notice: self.notice.clone(),
        }
    }

    /// Returns and clears the transient notice.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Handles the main button: draws and shows a new quote.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the loaded content is inconsistent.
    pub async fn tap(&mut self) -> Result<(), DomainError> {
        self.sequencer.show_new_quote().await
    }

    /// Opens the drawer.
    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    /// Closes the drawer and any picker over it.
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
        self.modal = None;
    }

    /// Opens the language picker.
    pub fn open_language_picker(&mut self) {
        self.modal = Some(Modal::LanguagePicker);
    }

    /// Opens the font-size picker.
    pub fn open_font_size_picker(&mut self) {
        self.modal = Some(Modal::FontSizePicker);
    }

    /// Closes any open picker.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Rows of the language picker, in menu order, for loaded languages only.
    #[must_use]
    pub fn language_options(&self) -> Vec<LanguageOption> {
        let preferences = self.sequencer.preferences();
        LANGUAGE_LABELS
            .iter()
            .filter(|&&(code, _)| self.sequencer.bank().contains_language(code))
            .map(|&(code, label)| LanguageOption {
                code,
                label,
                selected: preferences.language == code,
            })
            .collect()
    }

    /// Buttons of the font-size picker.
    #[must_use]
    pub fn font_size_options(&self) -> Vec<FontSizeOption> {
        let selected = self.sequencer.preferences().font_size;
        FontSize::ALL
            .into_iter()
            .map(|size| FontSizeOption {
                size,
                label: self.text(size.label_key(), default_size_label(size)),
                selected: size == selected,
            })
            .collect()
    }

    /// Picks a language from the picker, then closes it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a language without a quote bank;
    /// the picker stays open.
    pub async fn select_language(&mut self, language: &str) -> Result<(), DomainError> {
        self.sequencer.change_language(language).await?;
        self.modal = None;
        Ok(())
    }

    /// Picks a font size from the picker, then closes it.
    pub async fn select_font_size(&mut self, font_size: FontSize) {
        self.sequencer.change_font_size(font_size).await;
        self.modal = None;
    }

    /// Handles the back gesture.
    #[instrument(skip(self))]
    pub async fn press_back(&mut self) -> BackOutcome {
        if self.route == Route::About {
            self.route = Route::Home;
            return BackOutcome::AboutClosed;
        }
        if self.drawer_open {
            self.close_drawer();
            return BackOutcome::DrawerClosed;
        }
        if self.sequencer.back().await {
            return BackOutcome::CardDismissed;
        }
        debug!("nothing to close, asking to exit");
        BackOutcome::ConfirmExit(ExitDialog {
            title: self.text("exitTitle", "Exit App"),
            message: self.text("exitMessage", "Do you want to exit the app?"),
            confirm: self.text("exitYes", "Yes"),
            cancel: self.text("exitNo", "No"),
        })
    }

    /// Shares the visible card. Without a visible card, sets a notice
    /// instead. Returns `true` if the card was handed to the platform.
    #[instrument(skip(self))]
    pub async fn share_quote(&mut self) -> bool {
        let Some(quote) = self
            .sequencer
            .displayed_quote()
            .filter(|_| self.sequencer.is_card_visible())
        else {
            self.notice = Some(NO_CARD_NOTICE.to_owned());
            return false;
        };
        let result = self
            .platform
            .share_card(&quote.text, quote.image.path())
            .await;
        self.settle("share the quote", result)
    }

    /// Shares the app's promotional message.
    pub async fn share_app(&mut self) -> bool {
        let result = self.platform.share_text(&share_app_message()).await;
        self.settle("share the app", result)
    }

    /// Opens the store listing for the configured OS.
    pub async fn rate_app(&mut self) -> bool {
        let result = self.platform.open_url(self.os.store_url()).await;
        self.settle("open the store", result)
    }

    /// Opens a feedback email.
    pub async fn write_to_us(&mut self) -> bool {
        let url = feedback_url(&self.feedback_email);
        let result = self.platform.open_url(&url).await;
        self.settle("open the mail app", result)
    }

    /// Opens `url`, e.g. one of [`HomeScreen::about_links`].
    pub async fn open_link(&mut self, url: &str) -> bool {
        let result = self.platform.open_url(url).await;
        self.settle("open the link", result)
    }

    /// Navigates to the About page.
    pub fn open_about(&mut self) {
        info!("navigating to about page");
        self.route = Route::About;
    }

    /// Navigates back to the Home page.
    pub fn close_about(&mut self) {
        self.route = Route::Home;
    }

    /// Links shown on the About page.
    #[must_use]
    pub fn about_links() -> &'static [AboutLink] {
        &ABOUT_LINKS
    }

    fn settle(&mut self, action: &str, result: Result<(), DomainError>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                error!(action, error = %e, "platform request failed");
                self.notice = Some(format!("Could not {action}."));
                false
            }
        }
    }
}

fn default_size_label(size: FontSize) -> &'static str {
    match size {
        FontSize::Small => "Small",
        FontSize::Medium => "Medium",
        FontSize::Large => "Large",
    }
}
