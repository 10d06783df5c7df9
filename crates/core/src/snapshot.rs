use arrayvec::ArrayVec;

use crate::board::{BoardStack, Layout};
use crate::session::{LossCause, SessionState};
use crate::types::{
    CellPos, Difficulty, TileKind, BOARD_COLS, BOARD_ROWS, MAX_LAYERS, SLOT_STORAGE,
};

/// Set on a snapshot cell whose tile is covered by the layer above.
pub const COVERED_FLAG: u8 = 0x80;

const KIND_MASK: u8 = 0x0f;

pub type LayerGrid = [[u8; BOARD_COLS as usize]; BOARD_ROWS as usize];

/// Read-only, allocation-free view of a session for renderers.
///
/// Board cells are bytes: `0` for empty, `kind.index() + 1` for a tile, with
/// [`COVERED_FLAG`] added when it cannot be picked. Boards larger than the standard
/// 7x7 / 5-layer stack are clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board: [LayerGrid; MAX_LAYERS as usize],
    pub layers: u8,
    pub rows: u8,
    pub cols: u8,
    pub tiles_left: u16,
    /// FNV-1a over the visible board bytes; changes whenever the board does.
    pub board_hash: u64,
    pub slot: ArrayVec<TileKind, SLOT_STORAGE>,
    pub score: u32,
    pub remaining_ms: u32,
    pub state: SessionState,
    pub loss_cause: Option<LossCause>,
    pub revive_available: bool,
    pub difficulty: Difficulty,
    pub seed: u32,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.board = [[[0u8; BOARD_COLS as usize]; BOARD_ROWS as usize]; MAX_LAYERS as usize];
        self.layers = 0;
        self.rows = 0;
        self.cols = 0;
        self.tiles_left = 0;
        self.board_hash = fnv1a64(std::iter::empty());
        self.slot.clear();
        self.score = 0;
        self.remaining_ms = 0;
        self.state = SessionState::Playing;
        self.loss_cause = None;
        self.revive_available = true;
        self.difficulty = Difficulty::Easy;
        self.seed = 0;
    }

    pub(crate) fn write_board(&mut self, board: &BoardStack, layout: &Layout) {
        self.layers = board.layers().min(MAX_LAYERS);
        self.rows = board.rows().min(BOARD_ROWS);
        self.cols = board.cols().min(BOARD_COLS);
        self.board = [[[0u8; BOARD_COLS as usize]; BOARD_ROWS as usize]; MAX_LAYERS as usize];

        let mut left = 0u16;
        for (pos, kind) in board.tiles() {
            left = left.saturating_add(1);
            if pos.layer >= self.layers || pos.row >= self.rows || pos.col >= self.cols {
                continue;
            }
            let mut v = kind.index() as u8 + 1;
            if board.is_covered(pos, layout) {
                v |= COVERED_FLAG;
            }
            self.board[pos.layer as usize][pos.row as usize][pos.col as usize] = v;
        }
        self.tiles_left = left;
        self.board_hash = fnv1a64(
            self.board
                .iter()
                .flat_map(|layer| layer.iter().flat_map(|row| row.iter().copied())),
        );
    }

    /// Tile at `pos` and whether it is covered.
    pub fn cell(&self, pos: CellPos) -> Option<(TileKind, bool)> {
        if pos.layer >= self.layers || pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        let v = self.board[pos.layer as usize][pos.row as usize][pos.col as usize];
        let kind = TileKind::from_index(usize::from(v & KIND_MASK).checked_sub(1)?)?;
        Some((kind, v & COVERED_FLAG != 0))
    }

    /// Whole seconds left, rounded up.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_ms.div_ceil(1000)
    }

    pub fn playable(&self) -> bool {
        self.state == SessionState::Playing
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[[0u8; BOARD_COLS as usize]; BOARD_ROWS as usize]; MAX_LAYERS as usize],
            layers: 0,
            rows: 0,
            cols: 0,
            tiles_left: 0,
            board_hash: 0,
            slot: ArrayVec::new(),
            score: 0,
            remaining_ms: 0,
            state: SessionState::Playing,
            loss_cause: None,
            revive_available: true,
            difficulty: Difficulty::Easy,
            seed: 0,
        };
        s.clear();
        s
    }
}

fn fnv1a64(bytes: impl Iterator<Item = u8>) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}
