//! Loads quote banks and UI strings from the assets directory.
//!
//! Each supported language has one document, `<assets>/<code>.json`. UI
//! strings for all languages live in `<assets>/main.json`.

use std::io::ErrorKind;
use std::path::Path;

use talktoswami_core::error::DomainError;
use tracing::{debug, info, instrument, warn};

use crate::domain::images::CategoryImageMap;
use crate::domain::languages::LANGUAGE_LABELS;
use crate::domain::quote_bank::{LanguageBank, QuoteBank};
use crate::domain::translations::Translations;

/// File name of the UI string tables inside the assets directory.
pub const TRANSLATIONS_FILE: &str = "main.json";

async fn read_optional(path: &Path) -> Result<Option<String>, DomainError> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DomainError::Data(format!(
            "failed to read {}: {e}",
            path.display()
        ))),
    }
}

/// Loads the bank of every labelled language whose document exists.
///
/// Languages without a document are skipped; a language is only supported
/// when it has both a label and a document.
///
/// # Errors
///
/// Returns `DomainError::Data` if a document cannot be read or parsed, or if
/// the resulting bank fails validation.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub async fn load_quote_bank(
    dir: &Path,
    images: &CategoryImageMap,
) -> Result<QuoteBank, DomainError> {
    let mut languages = Vec::new();
    for (code, _) in LANGUAGE_LABELS {
        let path = dir.join(format!("{code}.json"));
        let Some(source) = read_optional(&path).await? else {
            debug!(language = code, "no quote bank document, skipping");
            continue;
        };
        let bank = LanguageBank::from_json(code, &source)?;
        debug!(
            language = code,
            categories = bank.categories().len(),
            "loaded quote bank"
        );
        languages.push(((*code).to_owned(), bank));
    }

    let bank = QuoteBank::new(languages, images)?;
    info!(
        languages = bank.languages().count(),
        "quote banks loaded"
    );
    Ok(bank)
}

/// Loads the UI string tables.
///
/// A missing file yields empty tables; callers then show their built-in
/// literals.
///
/// # Errors
///
/// Returns `DomainError::Data` if the file exists but cannot be read or
/// parsed.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub async fn load_translations(dir: &Path) -> Result<Translations, DomainError> {
    let path = dir.join(TRANSLATIONS_FILE);
    match read_optional(&path).await? {
        Some(source) => Translations::from_json(&source),
        None => {
            warn!(path = %path.display(), "translations missing, using built-in strings");
            Ok(Translations::default())
        }
    }
}
