//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the puzzle rules, state management, and board generation.
//! It has **no dependencies** on UI, storage, or I/O, making it:
//!
//! - **Deterministic**: The same seed deals the same board
//! - **Testable**: Every rule is exercised by unit and integration tests
//! - **Portable**: Any front end (terminal, GUI, headless) can drive it
//!
//! # Module Structure
//!
//! - [`board`]: the layered 7x7 board, click resolution and covering
//! - [`pool`]: tile multiset construction and dealing
//! - [`rng`]: seedable RNG with unbiased shuffles
//! - [`session`]: one playthrough, including the countdown and the revive
//! - [`slot`]: the 7-tile staging row that clears triples
//! - [`snapshot`]: fixed-size read-only view for renderers
//!
//! # Game Rules
//!
//! - Tiles are dealt in groups of three, so every kind can be completed
//! - A tile is covered while the tile directly above it overlaps it on screen
//! - Picking an uncovered tile moves it to the slot and scores 10 points
//! - Three of a kind in the slot vanish immediately
//! - Clearing the board wins; more than 7 tiles in the slot loses, except that the
//!   first overflow offers a single revive
//! - Running out the 60 second clock loses
//!
//! # Example
//!
//! ```
//! use tui_tiles_core::{GameSession, SessionState};
//! use tui_tiles_types::{CellPos, Difficulty};
//!
//! let mut game = GameSession::new(Difficulty::Easy, 12345);
//!
//! // The top layer is never covered.
//! let outcome = game.pick(CellPos::new(1, 0, 0));
//! assert_eq!(outcome.score_delta(), 10);
//! assert_eq!(game.slot().len(), 1);
//!
//! game.tick(60_000);
//! assert_eq!(game.state(), SessionState::Lost);
//! ```

pub mod board;
pub mod pool;
pub mod rng;
pub mod session;
pub mod slot;
pub mod snapshot;

pub use tui_tiles_types as types;

// Re-export commonly used types for convenience
pub use board::{BoardStack, Layout};
pub use pool::{generate, pool_size, TilePool};
pub use rng::SimpleRng;
pub use session::{
    ClickOutcome, GameSession, LossCause, MoveReport, ReviveGate, SessionConfig, SessionState,
};
pub use slot::{Slot, SlotClear};
pub use snapshot::{SessionSnapshot, COVERED_FLAG};
