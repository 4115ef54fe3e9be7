//! UI string tables per language.

use std::collections::{BTreeMap, HashMap};

use talktoswami_core::error::DomainError;

use super::languages::DEFAULT_LANGUAGE;

type StringTable = HashMap<String, String>;

/// UI strings for every language, keyed by language code then string key.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    tables: BTreeMap<String, StringTable>,
}

impl Translations {
    /// Parses a document mapping language code to a table of UI strings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Data` if the document is not an object of string
    /// objects.
    pub fn from_json(source: &str) -> Result<Self, DomainError> {
        let tables: BTreeMap<String, StringTable> = serde_json::from_str(source)
            .map_err(|e| DomainError::Data(format!("translations are malformed: {e}")))?;
        Ok(Self { tables })
    }

    /// Returns the strings for `language`, falling back to the default
    /// language when `language` has no table.
    #[must_use]
    pub fn for_language(&self, language: &str) -> TranslatedText<'_> {
        let fallback = self.tables.get(DEFAULT_LANGUAGE);
        let primary = self.tables.get(language).or(fallback);
        TranslatedText { primary, fallback }
    }
}

/// View over one language's strings.
#[derive(Debug, Clone, Copy)]
pub struct TranslatedText<'a> {
    primary: Option<&'a StringTable>,
    fallback: Option<&'a StringTable>,
}

impl<'a> TranslatedText<'a> {
    /// Looks up `key`, trying the default language when the selected one
    /// lacks it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.primary
            .and_then(|table| table.get(key))
            .or_else(|| self.fallback.and_then(|table| table.get(key)))
            .map(String::as_str)
    }

    /// Looks up `key`, returning `default` when no table has it.
    #[must_use]
    pub fn get_or(&self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }
}
