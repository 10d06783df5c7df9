//! Tile pool - builds the tile multiset for a run and deals it onto a board
//!
//! Every kind enters the pool in groups of three, so any tile on the board can in
//! principle be completed into a triple. The pool length is the smallest multiple
//! of three that covers every cell.
//!
//! When the board size is not a multiple of three the surplus (one or two tiles) is
//! taken off the last group before shuffling, so at most one kind ends up with a
//! count that is not a multiple of three.

use crate::board::BoardStack;
use crate::rng::SimpleRng;
use crate::types::TileKind;

/// Number of tiles needed for `total_cells`, rounded up to a multiple of three.
///
/// ```
/// use tui_tiles_core::pool::pool_size;
///
/// assert_eq!(pool_size(98), 99);
/// assert_eq!(pool_size(147), 147);
/// assert_eq!(pool_size(0), 0);
/// ```
pub fn pool_size(total_cells: usize) -> usize {
    total_cells.div_ceil(3) * 3
}

/// The multiset of tiles for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePool {
    tiles: Vec<TileKind>,
}

impl TilePool {
    /// Build the grouped (unshuffled) pool for `total_cells` cells.
    ///
    /// Group `i` holds three copies of `palette[i % palette.len()]`. An empty palette
    /// yields an empty pool.
    pub fn build(total_cells: usize, palette: &[TileKind]) -> Self {
        if palette.is_empty() {
            return Self { tiles: Vec::new() };
        }
        let size = pool_size(total_cells);
        let mut tiles = Vec::with_capacity(size);
        for group in 0..size / 3 {
            let kind = palette[group % palette.len()];
            tiles.extend([kind; 3]);
        }
        Self { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn as_slice(&self) -> &[TileKind] {
        &self.tiles
    }

    /// Drop tiles from the end of the pool until it holds at most `cells` tiles.
    ///
    /// Called on the grouped pool, this only ever shortens the final group.
    pub fn clip_to(&mut self, cells: usize) {
        self.tiles.truncate(cells);
    }

    /// Uniform random permutation.
    pub fn shuffle(&mut self, rng: &mut SimpleRng) {
        rng.shuffle(&mut self.tiles);
    }

    /// Place the pool onto `board` in fill order; returns the number of tiles placed.
    pub fn deal_onto(self, board: &mut BoardStack) -> usize {
        board.fill_from(self.tiles)
    }
}

/// Build, shuffle and deal a fresh board.
pub fn generate(
    layers: u8,
    rows: u8,
    cols: u8,
    palette: &[TileKind],
    rng: &mut SimpleRng,
) -> BoardStack {
    let mut board = BoardStack::new(layers, rows, cols);
    let total = board.capacity();

    let mut pool = TilePool::build(total, palette);
    debug_assert_eq!(pool.len() % 3, 0);
    pool.clip_to(total);
    pool.shuffle(rng);

    let placed = pool.deal_onto(&mut board);
    if placed < total {
        log::warn!("tile pool short by {} cells; leaving them empty", total - placed);
    }
    log::debug!(
        "generated {}x{}x{} board with {} tiles",
        layers,
        rows,
        cols,
        placed
    );
    board
}
