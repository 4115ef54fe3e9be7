//! Uniform random quote selection.

use talktoswami_core::error::DomainError;
use talktoswami_core::rng::DeterministicRng;

use super::images::{CategoryImageMap, ImageHandle};
use super::quote_bank::QuoteBank;

/// A quote ready for display, paired with the image of its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// The quote text.
    pub text: String,
    /// The image of the category the text was drawn from.
    pub image: ImageHandle,
    /// The category the text was drawn from.
    pub category: String,
}

/// Draws a quote for `language`.
///
/// A category is drawn uniformly from the language's categories, then a quote
/// uniformly from that category, so text and image always come from the same
/// draw.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `language` is not in the bank, and
/// `DomainError::Data` if the drawn category has no image (impossible for a
/// bank built through [`QuoteBank::new`] with the same image map).
pub fn select_random_quote(
    bank: &QuoteBank,
    images: &CategoryImageMap,
    language: &str,
    rng: &mut dyn DeterministicRng,
) -> Result<Quote, DomainError> {
    let language_bank = bank
        .language(language)
        .ok_or_else(|| DomainError::Validation(format!("unknown language: {language}")))?;

    let categories = language_bank.categories();
    let category = &categories[rng.next_index(categories.len())];
    let quotes = category.quotes();
    let text = &quotes[rng.next_index(quotes.len())];

    let image = images.image_for(category.name()).ok_or_else(|| {
        DomainError::Data(format!("category '{}' has no image", category.name()))
    })?;

    Ok(Quote {
        text: text.clone(),
        image: image.clone(),
        category: category.name().to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use talktoswami_core::rng::SystemRng;
    use talktoswami_test_support::SequenceRng;

    fn images() -> CategoryImageMap {
        CategoryImageMap::builtin()
    }

    fn multi_language_bank() -> QuoteBank {
        QuoteBank::from_json(
            r#"{
                "english": {
                    "encouragement": ["Keep going.", "You are never alone."],
                    "assurance": ["I am always with you."],
                    "prayers": ["May all beings be happy.", "Let peace prevail.", "Be still."]
                },
                "german": {
                    "encouragement": ["Mach weiter."],
                    "angry": ["Bleib ruhig.", "Atme tief durch."]
                }
            }"#,
            &images(),
        )
        .unwrap()
    }

    #[test]
    fn test_single_quote_bank_always_returns_that_quote() {
        let bank =
            QuoteBank::from_json(r#"{"english": {"encouragement": ["Keep going."]}}"#, &images())
                .unwrap();
        let mut rng = SystemRng::seeded(1);

        for _ in 0..100 {
            let quote = select_random_quote(&bank, &images(), "english", &mut rng).unwrap();
            assert_eq!(quote.text, "Keep going.");
            assert_eq!(&quote.image, images().image_for("encouragement").unwrap());
        }
    }

    #[test]
    fn test_draws_come_from_selected_language_with_matching_image() {
        let bank = multi_language_bank();
        let images = images();
        let mut rng = SystemRng::seeded(99);

        for language in bank.languages().collect::<Vec<_>>() {
            let language_bank = bank.language(language).unwrap();
            for _ in 0..1000 {
                let quote = select_random_quote(&bank, &images, language, &mut rng).unwrap();
                let category = language_bank.category(&quote.category).unwrap();
                assert!(category.quotes().contains(&quote.text));
                assert_eq!(&quote.image, images.image_for(&quote.category).unwrap());
            }
        }
    }

    #[test]
    fn test_every_category_is_reachable() {
        let bank = multi_language_bank();
        let mut rng = SystemRng::seeded(5);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..1000 {
            let quote = select_random_quote(&bank, &images(), "english", &mut rng).unwrap();
            seen.insert(quote.category);
        }

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_category_is_drawn_before_quote() {
        let bank = multi_language_bank();
        // Category index 2 ("prayers"), then quote index 1.
        let mut rng = SequenceRng::new(vec![2, 1]);

        let quote = select_random_quote(&bank, &images(), "english", &mut rng).unwrap();

        assert_eq!(quote.category, "prayers");
        assert_eq!(quote.text, "Let peace prevail.");
        assert_eq!(quote.image.path(), "images/prayer.jpg");
    }

    #[test]
    fn test_unknown_language_returns_validation_error() {
        let bank = multi_language_bank();
        let mut rng = SystemRng::seeded(0);

        let result = select_random_quote(&bank, &images(), "klingon", &mut rng);

        match result.unwrap_err() {
            DomainError::Validation(msg) => assert_eq!(msg, "unknown language: klingon"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
