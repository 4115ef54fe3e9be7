//! Category-to-image association.

use std::collections::HashMap;
use std::fmt;

/// Handle to an image resource, expressed as a path relative to the assets
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle(String);

impl ImageHandle {
    /// Creates a handle for the given asset-relative path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the asset-relative path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Categories shipped with the application and the image each one shows.
const BUILTIN_IMAGES: &[(&str, &str)] = &[
    ("angry", "images/angry.jpeg"),
    ("disappointed", "images/disappointed.jpeg"),
    ("encouragement", "images/encouragement.png"),
    ("dont", "images/dont.jpg"),
    ("assurance", "images/assurance.png"),
    ("appreciation", "images/appreciation.png"),
    ("quotes", "images/quotes.png"),
    ("suggestions", "images/suggestions.png"),
    ("prayers", "images/prayer.jpg"),
    ("audio", "images/quotes.png"),
];

/// Immutable mapping from category name to image handle.
#[derive(Debug, Clone, Default)]
pub struct CategoryImageMap {
    entries: HashMap<String, ImageHandle>,
}

impl CategoryImageMap {
    /// Returns the table of categories shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_IMAGES
                .iter()
                .map(|(category, path)| ((*category).to_owned(), ImageHandle::new(*path))),
        )
    }

    /// Builds a map from arbitrary `(category, image)` pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, ImageHandle)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Returns the image for `category`, if one is registered.
    #[must_use]
    pub fn image_for(&self, category: &str) -> Option<&ImageHandle> {
        self.entries.get(category)
    }

    /// Returns `true` if `category` has an image.
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }
}
