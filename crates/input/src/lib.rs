//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] values. There
//! is no auto-repeat logic here: terminal key repeat arrives as repeated press
//! events and each one becomes one action.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
