//! Talk to Swami — application layer.
//!
//! Wires the quote sequencer into the home screen (drawer, pickers, back
//! gesture, sharing, store links, About page) and hosts it on the console.

pub mod config;
pub mod console;
pub mod error;
pub mod links;
pub mod platform;
pub mod screen;
