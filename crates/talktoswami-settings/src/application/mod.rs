//! Application services for preferences.

pub mod service;
