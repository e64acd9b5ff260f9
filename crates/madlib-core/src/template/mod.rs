//! Template module - literal placeholder substitution
//!
//! Template lines are plain text with five fixed placeholder tokens:
//! `<noun1>`, `<noun2>`, `<verb>`, `<adjective>` and `<adverb>`.
//!
//! ## Rules
//!
//! - **Literal matching**: placeholders are exact byte sequences, no escaping
//! - **Fixed pass order**: noun1, noun2, verb, adjective, adverb
//! - **Non-recursive**: inserted words are never scanned again by any pass
//! - **Strict output**: a rendered line longer than
//!   [`OUTPUT_MAX`](crate::limits::OUTPUT_MAX) bytes or containing any `<` is rejected

pub mod engine;

pub use engine::{replace, validate_line, Substituter};
