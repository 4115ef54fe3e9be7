//! Talk to Swami — quote sequencer.
//!
//! Draws a random quote, drives the card's entrance and exit transitions,
//! and coordinates language and font-size changes with the card so that a
//! quote in the old language is never left on screen.

pub mod application;
pub mod domain;
