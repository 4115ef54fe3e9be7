//! Supported languages and their display labels.

/// Language used when nothing else is selected or a stored value is invalid.
pub const DEFAULT_LANGUAGE: &str = "english";

/// Display label for every language the application knows about, in menu
/// order. A language is offered only if its quote bank is also present.
pub const LANGUAGE_LABELS: &[(&str, &str)] = &[
    ("english", "English"),
    ("telugu", "తెలుగు - Telugu"),
    ("hindi", "हिन्दी - Hindi"),
    ("tamil", "தமிழ் - Tamil"),
    ("nepali", "नेपाली - Nepali"),
    ("kannada", "ಕನ್ನಡ - Kannada"),
    ("russian", "русский - Russian"),
    ("german", "Deutsch - German"),
    ("italian", "Italiano - Italian"),
];

/// Returns the display label for `code`.
#[must_use]
pub fn label_for(code: &str) -> Option<&'static str> {
    LANGUAGE_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
}
