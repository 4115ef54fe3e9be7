//! Application services for the quote card.

pub mod sequencer;
