//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::Intent`] values for the rules
//! engine, plus the session-level keys (quit, restart) the runner handles
//! itself.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_restart, should_quit};
