//! Preference values and snapshots.

use std::fmt;

use serde::Serialize;
use talktoswami_quotes::domain::languages::DEFAULT_LANGUAGE;

/// Store key of the selected language.
pub const LANGUAGE_KEY: &str = "selectedLanguage";

/// Store key of the selected font size, persisted as its point size.
pub const FONT_SIZE_KEY: &str = "selectedFontSize";

/// Font size presets offered by the font-size picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    /// 16 pt.
    Small,
    /// 20 pt.
    #[default]
    Medium,
    /// 24 pt.
    Large,
}

impl FontSize {
    /// Every preset, smallest first.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Returns the point size used to render quote text.
    #[must_use]
    pub fn points(self) -> u16 {
        match self {
            Self::Small => 16,
            Self::Medium => 20,
            Self::Large => 24,
        }
    }

    /// Maps a stored point size back to its preset.
    #[must_use]
    pub fn from_points(points: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.points() == points)
    }

    /// Parses a preset name (`small`, `medium`, `large`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    /// Returns the UI string key of this preset's label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

/// Immutable snapshot of the user's preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preferences {
    /// Selected language code; always a language present in the quote bank.
    pub language: String,
    /// Selected font size.
    pub font_size: FontSize,
}

impl Preferences {
    /// Returns a copy with `language` replaced.
    #[must_use]
    pub fn with_language(&self, language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            font_size: self.font_size,
        }
    }

    /// Returns a copy with `font_size` replaced.
    #[must_use]
    pub fn with_font_size(&self, font_size: FontSize) -> Self {
        Self {
            language: self.language.clone(),
            font_size,
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_owned(),
            font_size: FontSize::default(),
        }
    }
}
