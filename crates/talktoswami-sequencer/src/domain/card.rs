//! The quote card state machine.

use serde::Serialize;
use talktoswami_quotes::domain::selection::Quote;

/// Card visibility state machine.
///
/// `Hidden → Visible` when a quote is shown; `Visible → Hidden` once an exit
/// transition has completed. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardState {
    /// No quote on screen.
    #[default]
    Hidden,
    /// A quote is on screen.
    Visible,
}

/// The card and the quote it displays.
#[derive(Debug, Clone, Default)]
pub struct Card {
    state: CardState,
    quote: Option<Quote>,
}

impl Card {
    /// Creates a hidden, empty card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> CardState {
        self.state
    }

    /// Returns `true` while a quote is on screen.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state == CardState::Visible
    }

    /// Returns the displayed quote.
    #[must_use]
    pub fn quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    /// Puts `quote` on the card and marks it visible, replacing any quote
    /// already shown.
    pub fn show(&mut self, quote: Quote) {
        self.quote = Some(quote);
        self.state = CardState::Visible;
    }

    /// Clears the card after its exit transition, returning the quote it
    /// displayed.
    pub fn hide(&mut self) -> Option<Quote> {
        self.state = CardState::Hidden;
        self.quote.take()
    }
}
