//! Talk to Swami — quote content.
//!
//! Responsible for the per-language quote banks, the category-to-image
//! association, the UI string tables, and the uniform random draw that
//! produces a quote card.

pub mod application;
pub mod domain;
