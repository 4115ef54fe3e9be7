//! Talk to Swami Core — shared abstractions.
//!
//! This crate defines the seams every other crate depends on: randomness,
//! key-value preference storage, card transitions, platform integrations,
//! and the shared error type. It contains no infrastructure code.

pub mod error;
pub mod platform;
pub mod rng;
pub mod store;
pub mod transition;
