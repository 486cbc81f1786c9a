//! Chatlex library exports.
//!
//! A chat-log word indexer: tokenizes Twitch-style chat dumps into a
//! word → occurrences index with part-of-speech filtering, saved-word
//! annotation, and a keyboard quick-select navigation core.

pub mod core;
pub mod ingest;
pub mod store;
pub mod term;
