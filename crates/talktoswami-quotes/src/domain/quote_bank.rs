//! Quote banks: language → category → quotes.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use talktoswami_core::error::DomainError;

use super::images::CategoryImageMap;
use super::languages::DEFAULT_LANGUAGE;

/// A thematic group of quotes sharing one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    quotes: Vec<String>,
}

impl Category {
    /// Creates a category.
    #[must_use]
    pub fn new(name: impl Into<String>, quotes: Vec<String>) -> Self {
        Self {
            name: name.into(),
            quotes,
        }
    }

    /// Returns the category name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the quotes in document order.
    #[must_use]
    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }
}

/// All categories of one language, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageBank {
    categories: Vec<Category>,
}

impl LanguageBank {
    /// Creates a language bank from categories.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Parses one language document: a JSON object mapping category name to
    /// an array of quote strings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Data` if the document is not an object of string
    /// arrays.
    pub fn from_json(language: &str, source: &str) -> Result<Self, DomainError> {
        let document: Map<String, Value> = serde_json::from_str(source).map_err(|e| {
            DomainError::Data(format!("quote bank '{language}' is not a JSON object: {e}"))
        })?;
        Self::from_document(language, document)
    }

    fn from_document(language: &str, document: Map<String, Value>) -> Result<Self, DomainError> {
        let categories = document
            .into_iter()
            .map(|(name, value)| {
                let quotes: Vec<String> = serde_json::from_value(value).map_err(|e| {
                    DomainError::Data(format!(
                        "category '{name}' in quote bank '{language}' must be a list of strings: {e}"
                    ))
                })?;
                Ok(Category::new(name, quotes))
            })
            .collect::<Result<Vec<_>, DomainError>>()?;
        Ok(Self { categories })
    }

    /// Returns the categories in document order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Returns `true` if any category of this language contains `text`.
    #[must_use]
    pub fn contains_quote(&self, text: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.quotes.iter().any(|q| q == text))
    }
}

/// Immutable collection of every loaded language bank.
#[derive(Debug, Clone)]
pub struct QuoteBank {
    languages: BTreeMap<String, LanguageBank>,
}

impl QuoteBank {
    /// Builds a quote bank and checks it against the image map.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Data` if the default language is missing, a
    /// language has no categories, a category has no quotes, or a category
    /// has no image.
    pub fn new(
        languages: impl IntoIterator<Item = (String, LanguageBank)>,
        images: &CategoryImageMap,
    ) -> Result<Self, DomainError> {
        let bank = Self {
            languages: languages.into_iter().collect(),
        };
        bank.validate(images)?;
        Ok(bank)
    }

    /// Parses a combined document mapping language code to a language
    /// document.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Data` if the JSON is malformed or fails
    /// validation (see [`QuoteBank::new`]).
    pub fn from_json(source: &str, images: &CategoryImageMap) -> Result<Self, DomainError> {
        let document: Map<String, Value> = serde_json::from_str(source)
            .map_err(|e| DomainError::Data(format!("quote bank is not a JSON object: {e}")))?;
        let languages = document
            .into_iter()
            .map(|(code, value)| {
                let Value::Object(inner) = value else {
                    return Err(DomainError::Data(format!(
                        "quote bank '{code}' must be a JSON object"
                    )));
                };
                let bank = LanguageBank::from_document(&code, inner)?;
                Ok((code, bank))
            })
            .collect::<Result<Vec<_>, DomainError>>()?;
        Self::new(languages, images)
    }

    fn validate(&self, images: &CategoryImageMap) -> Result<(), DomainError> {
        if !self.languages.contains_key(DEFAULT_LANGUAGE) {
            return Err(DomainError::Data(format!(
                "quote bank for default language '{DEFAULT_LANGUAGE}' is missing"
            )));
        }
        for (code, bank) in &self.languages {
            if bank.categories.is_empty() {
                return Err(DomainError::Data(format!(
                    "quote bank '{code}' has no categories"
                )));
            }
            for category in &bank.categories {
                if category.quotes.is_empty() {
                    return Err(DomainError::Data(format!(
                        "category '{}' in quote bank '{code}' has no quotes",
                        category.name
                    )));
                }
                if !images.contains(&category.name) {
                    return Err(DomainError::Data(format!(
                        "category '{}' in quote bank '{code}' has no image",
                        category.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns `true` if `code` has a loaded bank.
    #[must_use]
    pub fn contains_language(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    /// Returns the bank for `code`.
    #[must_use]
    pub fn language(&self, code: &str) -> Option<&LanguageBank> {
        self.languages.get(code)
    }

    /// Iterates the loaded language codes in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }
}
