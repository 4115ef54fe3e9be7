//! Talk to Swami — preference storage infrastructure.

pub mod json_file_store;
