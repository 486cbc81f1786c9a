//! # Core Application Logic
//!
//! This module contains chatlex's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌──────────────────────────────┐
//!                    │            CORE              │
//!                    │  (this module)               │
//!                    │                              │
//!                    │  • tokenizer  (words out)    │
//!                    │  • index      (word engine)  │
//!                    │  • pos        (noun/adj)     │
//!                    │  • saved      (marked words) │
//!                    │  • nav        (quick-select) │
//!                    │  • config     (settings)     │
//!                    │                              │
//!                    │  No terminal I/O. Pure.      │
//!                    └──────────────┬───────────────┘
//!                                   │
//!                     ┌─────────────┼─────────────┐
//!                     ▼             ▼             ▼
//!               ┌──────────┐  ┌──────────┐  ┌──────────┐
//!               │   term   │  │   CLI    │  │  ingest  │
//!               │ adapter  │  │ listing  │  │  /store  │
//!               └──────────┘  └──────────┘  └──────────┘
//! ```
//!
//! The navigation controller in [`nav`] is a pure state machine driven by
//! abstract key events and a cancellable timer; the word engine in [`index`]
//! never performs I/O. All file access lives in the `ingest` and `store`
//! modules.

pub mod config;
pub mod index;
pub mod nav;
pub mod pos;
pub mod saved;
pub mod tokenizer;
