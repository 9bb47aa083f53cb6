//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::Input`] and provides the [`InputSource`]
//! boundary the session loop reads exactly once per tick.

pub mod map;
pub mod source;

pub use tui_frogger_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{InputSource, ScriptedInput, TerminalInput};
