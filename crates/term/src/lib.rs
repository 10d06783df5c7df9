//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: views draw into a plain framebuffer
//! which the renderer diffs and flushes to the terminal. No widget toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Use one geometry for drawing and for pointer hit-testing
//! - Keep tiles roughly square (6 columns by 3 rows per tile)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screens;

pub use tui_tiles_core as core;
pub use tui_tiles_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screens::{AdvertView, Button, MenuView, ResultView, RevivePromptView};
