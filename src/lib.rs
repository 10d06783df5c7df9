//! TUI Tiles (workspace facade crate).
//!
//! Re-exports the member crates under `tui_tiles::{core,input,store,term,types}` and
//! hosts the application layer: the screen flow ([`app`]), environment
//! configuration ([`config`]) and the file logger ([`logging`]).

pub use tui_tiles_core as core;
pub use tui_tiles_input as input;
pub use tui_tiles_store as store;
pub use tui_tiles_term as term;
pub use tui_tiles_types as types;

pub mod app;
pub mod config;
pub mod logging;
