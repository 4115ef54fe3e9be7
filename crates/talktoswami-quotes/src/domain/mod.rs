//! Domain model for quote content.

pub mod images;
pub mod languages;
pub mod quote_bank;
pub mod selection;
pub mod translations;
