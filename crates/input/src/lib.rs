//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`]s and left-button mouse
//! presses into pointer clicks in terminal cell coordinates. Which commands are
//! meaningful depends on the current screen, so interpretation is left to the
//! caller.

pub mod handler;
pub mod map;

pub use tui_tiles_types as types;

pub use handler::{translate_event, InputEvent};
pub use map::{handle_key_event, pointer_click, should_quit};
