//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, persistence, terminal rendering).
//!
//! # Board Dimensions
//!
//! Every difficulty uses the same 7x7 grid per layer; only the number of stacked
//! layers changes:
//!
//! | Difficulty | Layers | Tiles |
//! |------------|--------|-------|
//! | easy | 2 | 98 |
//! | hard | 3 | 147 |
//! | hell | 4 | 196 |
//! | purgatory | 5 | 245 |
//!
//! # Rules Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SLOT_CAPACITY` | 7 | Slot overflows when it holds more than this |
//! | `SCORE_PER_PICK` | 10 | Points for every tile moved into the slot |
//! | `TIME_BUDGET_MS` | 60000 | Countdown per run |
//! | `AD_DURATION_MS` | 3000 | Advertisement wait before a revive resumes |
//! | `RESULT_SCREEN_MS` | 7000 | Result screen before returning to the menu |
//!
//! # Examples
//!
//! ```
//! use tui_tiles_types::{Difficulty, TileKind, Command};
//!
//! let kind = TileKind::from_str("jade").unwrap();
//! assert_eq!(kind, TileKind::Jade);
//! assert_eq!(kind.index(), 1);
//!
//! let difficulty = Difficulty::from_str("hell").unwrap();
//! assert_eq!(difficulty.layers(), 4);
//!
//! assert_eq!(Command::from_str("quit"), Some(Command::Quit));
//! ```

/// Rows per layer (7)
pub const BOARD_ROWS: u8 = 7;

/// Columns per layer (7)
pub const BOARD_COLS: u8 = 7;

/// Deepest supported stack (purgatory)
pub const MAX_LAYERS: u8 = 5;

/// Number of distinct tile patterns
pub const TILE_KIND_COUNT: usize = 5;

/// Slot size; holding more than this many tiles is an overflow.
pub const SLOT_CAPACITY: usize = 7;

/// Backing storage for the slot.
///
/// One tile past capacity triggers the overflow check, and a granted revive lets play
/// continue with that tile still in place, so the next pick can add one more.
pub const SLOT_STORAGE: usize = SLOT_CAPACITY + 2;

/// Points credited for every tile moved into the slot
pub const SCORE_PER_PICK: u32 = 10;

/// Countdown budget per run (60 seconds)
pub const TIME_BUDGET_MS: u32 = 60_000;

/// Frame interval of the terminal loop (~30 FPS)
pub const TICK_MS: u32 = 33;

/// Advertisement duration before the revive can be dismissed
pub const AD_DURATION_MS: u32 = 3_000;

/// How long the result screen stays up before returning to the menu
pub const RESULT_SCREEN_MS: u32 = 7_000;

/// Number of scores kept per difficulty
pub const LEADERBOARD_LEN: usize = 5;

/// Number of scores shown on the result screen
pub const LEADERBOARD_SHOWN: usize = 3;

/// The tile patterns a board is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileKind {
    Ruby,
    Jade,
    Amber,
    Pearl,
    Onyx,
}

impl TileKind {
    /// All patterns in palette order.
    pub const ALL: [TileKind; TILE_KIND_COUNT] = [
        TileKind::Ruby,
        TileKind::Jade,
        TileKind::Amber,
        TileKind::Pearl,
        TileKind::Onyx,
    ];

    /// Position in [`TileKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            TileKind::Ruby => 0,
            TileKind::Jade => 1,
            TileKind::Amber => 2,
            TileKind::Pearl => 3,
            TileKind::Onyx => 4,
        }
    }

    /// Inverse of [`TileKind::index`].
    ///
    /// ```
    /// use tui_tiles_types::TileKind;
    ///
    /// assert_eq!(TileKind::from_index(4), Some(TileKind::Onyx));
    /// assert_eq!(TileKind::from_index(5), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse from name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ruby" => Some(TileKind::Ruby),
            "jade" => Some(TileKind::Jade),
            "amber" => Some(TileKind::Amber),
            "pearl" => Some(TileKind::Pearl),
            "onyx" => Some(TileKind::Onyx),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Ruby => "ruby",
            TileKind::Jade => "jade",
            TileKind::Amber => "amber",
            TileKind::Pearl => "pearl",
            TileKind::Onyx => "onyx",
        }
    }

    /// Single-letter label used by the terminal view
    pub fn letter(&self) -> char {
        match self {
            TileKind::Ruby => 'R',
            TileKind::Jade => 'J',
            TileKind::Amber => 'A',
            TileKind::Pearl => 'P',
            TileKind::Onyx => 'O',
        }
    }
}

/// Selectable difficulty; controls how many layers are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Hard,
    Hell,
    Purgatory,
}

impl Difficulty {
    /// Menu order.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Hard,
        Difficulty::Hell,
        Difficulty::Purgatory,
    ];

    /// Layer count for this difficulty
    ///
    /// ```
    /// use tui_tiles_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::Easy.layers(), 2);
    /// assert_eq!(Difficulty::Hard.layers(), 3);
    /// assert_eq!(Difficulty::Hell.layers(), 4);
    /// assert_eq!(Difficulty::Purgatory.layers(), 5);
    /// ```
    pub fn layers(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Hard => 3,
            Difficulty::Hell => 4,
            Difficulty::Purgatory => MAX_LAYERS,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            "hell" => Some(Difficulty::Hell),
            "purgatory" => Some(Difficulty::Purgatory),
            _ => None,
        }
    }

    /// Lowercase tag; also names the leaderboard file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
            Difficulty::Hell => "hell",
            Difficulty::Purgatory => "purgatory",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
            Difficulty::Hell => "Hell",
            Difficulty::Purgatory => "Purgatory",
        }
    }
}

/// Address of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub layer: u8,
    pub row: u8,
    pub col: u8,
}

impl CellPos {
    pub const fn new(layer: u8, row: u8, col: u8) -> Self {
        Self { layer, row, col }
    }
}

/// A cell on the board
///
/// - `None`: empty (never filled, or already collected)
/// - `Some(TileKind)`: a tile waiting to be picked
pub type Cell = Option<TileKind>;

/// Commands produced by menu buttons and keys, interpreted by the outer loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Nothing to do
    None,
    /// Start a fresh run at the given difficulty
    StartGame(Difficulty),
    /// Abandon the current screen and show the main menu
    ReturnToMenu,
    /// Exit the program
    Quit,
    /// Accept the revive offer (watch the advertisement)
    AcceptRevive,
    /// Decline the revive offer
    DeclineRevive,
}

impl Command {
    /// Parse from a short name.
    ///
    /// ```
    /// use tui_tiles_types::{Command, Difficulty};
    ///
    /// assert_eq!(Command::from_str("start:hard"), Some(Command::StartGame(Difficulty::Hard)));
    /// assert_eq!(Command::from_str("menu"), Some(Command::ReturnToMenu));
    /// assert_eq!(Command::from_str("start:nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if let Some(rest) = lower.strip_prefix("start:") {
            return Difficulty::from_str(rest).map(Command::StartGame);
        }
        match lower.as_str() {
            "none" => Some(Command::None),
            "menu" => Some(Command::ReturnToMenu),
            "quit" => Some(Command::Quit),
            "revive" => Some(Command::AcceptRevive),
            "decline" => Some(Command::DeclineRevive),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_defaults() {
        assert_eq!(SLOT_CAPACITY, 7);
        assert_eq!(SLOT_STORAGE, 9);
        assert_eq!(SCORE_PER_PICK, 10);
        assert_eq!(TIME_BUDGET_MS, 60_000);
        assert_eq!(LEADERBOARD_LEN, 5);
        assert_eq!((BOARD_ROWS, BOARD_COLS), (7, 7));
    }

    #[test]
    fn tile_kind_index_roundtrip() {
        for (i, kind) in TileKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(TileKind::from_index(i), Some(*kind));
            assert_eq!(TileKind::from_str(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn difficulty_tags_are_distinct() {
        let tags: Vec<_> = Difficulty::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(tags, ["easy", "hard", "hell", "purgatory"]);
        assert!(Difficulty::ALL.iter().all(|d| d.layers() <= MAX_LAYERS));
    }
}
