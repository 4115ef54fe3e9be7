//! Talk to Swami — user preferences.
//!
//! Responsible for the two persisted settings (selected language and font
//! size): reading them once at startup, validating them against the loaded
//! quote banks, and writing every change back to the preference store.

pub mod application;
pub mod domain;
