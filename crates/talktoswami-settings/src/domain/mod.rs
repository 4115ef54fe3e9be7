//! Domain model for preferences.

pub mod preferences;
