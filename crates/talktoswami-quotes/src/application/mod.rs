//! Application services for quote content.

pub mod loader;
