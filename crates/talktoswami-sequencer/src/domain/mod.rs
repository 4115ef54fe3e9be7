//! Domain model for the quote card.

pub mod card;
