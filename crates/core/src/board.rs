//! Board module - the stacked tile grid
//!
//! The board is `layers` planes of `rows x cols` cells. Each cell is either empty or
//! holds a tile kind. Storage is a flat vector in layer-major, then row-major order
//! (`(layer * rows + row) * cols + col`), which is also the fill order used by
//! generation.
//!
//! Layer 0 is the bottom of the stack. When drawn, every layer is shifted diagonally
//! by a fixed per-layer delta relative to the layer above it, so the top layer sits
//! at the layout origin and deeper layers peek out towards the bottom-right.

use crate::types::{Cell, CellPos, TileKind, BOARD_COLS, BOARD_ROWS};

/// Screen geometry of a board: tile size, origin and per-layer shift.
///
/// Units are whatever the front end uses (pixels, terminal cells); clicks must be
/// reported in the same units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    pub origin_x: i32,
    pub origin_y: i32,
    pub tile_w: i32,
    pub tile_h: i32,
    /// Horizontal shift per layer below the top.
    pub layer_dx: i32,
    /// Vertical shift per layer below the top.
    pub layer_dy: i32,
}

impl Layout {
    /// 700px wide window with 7 columns of 100px tiles and a 5px shift per layer.
    pub const REFERENCE: Layout = Layout {
        origin_x: 0,
        origin_y: 0,
        tile_w: 100,
        tile_h: 100,
        layer_dx: 5,
        layer_dy: 5,
    };

    /// Shift applied to `layer` in a stack of `layers`.
    pub fn layer_offset(&self, layer: u8, layers: u8) -> (i32, i32) {
        let depth = i32::from(layers) - i32::from(layer) - 1;
        (depth * self.layer_dx, depth * self.layer_dy)
    }

    /// Top-left corner of the tile at `pos`.
    pub fn tile_origin(&self, pos: CellPos, layers: u8) -> (i32, i32) {
        let (dx, dy) = self.layer_offset(pos.layer, layers);
        (
            self.origin_x + i32::from(pos.col) * self.tile_w + dx,
            self.origin_y + i32::from(pos.row) * self.tile_h + dy,
        )
    }

    /// Rendered center of the tile at `pos`, doubled to stay in integers.
    fn doubled_center(&self, pos: CellPos, layers: u8) -> (i32, i32) {
        let (x, y) = self.tile_origin(pos, layers);
        (2 * x + self.tile_w, 2 * y + self.tile_h)
    }

    /// Whether the rendered footprint of `pos` contains the point (right/bottom edges
    /// excluded).
    pub fn contains(&self, pos: CellPos, layers: u8, x: i32, y: i32) -> bool {
        let (tx, ty) = self.tile_origin(pos, layers);
        x >= tx && x < tx + self.tile_w && y >= ty && y < ty + self.tile_h
    }

    /// Whether two tiles' centers are closer than half a tile on both axes.
    pub fn centers_overlap(&self, a: CellPos, b: CellPos, layers: u8) -> bool {
        let (ax, ay) = self.doubled_center(a, layers);
        let (bx, by) = self.doubled_center(b, layers);
        // |dx| < w/2 with both sides doubled.
        (ax - bx).abs() < self.tile_w && (ay - by).abs() < self.tile_h
    }

    /// Total footprint (width, height) of a stack, including the deepest layer's shift.
    pub fn extent(&self, layers: u8, rows: u8, cols: u8) -> (i32, i32) {
        let (dx, dy) = self.layer_offset(0, layers.max(1));
        (
            i32::from(cols) * self.tile_w + dx.abs(),
            i32::from(rows) * self.tile_h + dy.abs(),
        )
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// The stacked board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStack {
    layers: u8,
    rows: u8,
    cols: u8,
    cells: Vec<Cell>,
}

impl BoardStack {
    /// Create an empty board of the given dimensions
    pub fn new(layers: u8, rows: u8, cols: u8) -> Self {
        let len = usize::from(layers) * usize::from(rows) * usize::from(cols);
        Self {
            layers,
            rows,
            cols,
            cells: vec![None; len],
        }
    }

    /// Empty board with the standard 7x7 layer size
    pub fn with_layers(layers: u8) -> Self {
        Self::new(layers, BOARD_ROWS, BOARD_COLS)
    }

    /// Fill cells in storage order from `tiles`.
    ///
    /// Tiles beyond the board's capacity are dropped; cells left over when `tiles`
    /// runs short stay empty. Returns the number of tiles placed.
    pub fn fill_from<I>(&mut self, tiles: I) -> usize
    where
        I: IntoIterator<Item = TileKind>,
    {
        let mut tiles = tiles.into_iter();
        let mut placed = 0;
        for cell in &mut self.cells {
            *cell = tiles.next();
            if cell.is_some() {
                placed += 1;
            }
        }
        placed
    }

    /// Calculate flat index from a cell position
    #[inline(always)]
    fn index(&self, pos: CellPos) -> Option<usize> {
        if pos.layer >= self.layers || pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        let (rows, cols) = (usize::from(self.rows), usize::from(self.cols));
        Some((usize::from(pos.layer) * rows + usize::from(pos.row)) * cols + usize::from(pos.col))
    }

    pub fn layers(&self) -> u8 {
        self.layers
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Number of cells (occupied or not)
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Get cell at `pos`
    /// Returns None if out of bounds
    pub fn get(&self, pos: CellPos) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at `pos`
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: CellPos, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and holding a tile)
    pub fn is_occupied(&self, pos: CellPos) -> bool {
        matches!(self.get(pos), Some(Some(_)))
    }

    /// Take the tile at `pos` off the board.
    ///
    /// Removing an empty or out-of-bounds cell is a no-op and returns `None`.
    pub fn remove_tile(&mut self, pos: CellPos) -> Option<TileKind> {
        let idx = self.index(pos)?;
        self.cells[idx].take()
    }

    /// A tile is covered when the cell directly above it is occupied and the two
    /// drawn tiles overlap (centers within half a tile on both axes).
    ///
    /// Only the next layer up is inspected.
    pub fn is_covered(&self, pos: CellPos, layout: &Layout) -> bool {
        if pos.layer + 1 >= self.layers {
            return false;
        }
        let above = CellPos::new(pos.layer + 1, pos.row, pos.col);
        self.is_occupied(above) && layout.centers_overlap(pos, above, self.layers)
    }

    /// Occupied and not covered.
    pub fn is_pickable(&self, pos: CellPos, layout: &Layout) -> bool {
        self.is_occupied(pos) && !self.is_covered(pos, layout)
    }

    /// Topmost occupied cell whose drawn footprint contains `(x, y)`.
    ///
    /// Layers are scanned top to bottom so that tiles drawn last win the hit-test.
    /// The returned cell may still be covered; callers check that separately.
    pub fn resolve_click(&self, x: i32, y: i32, layout: &Layout) -> Option<CellPos> {
        for layer in (0..self.layers).rev() {
            for row in 0..self.rows {
                for col in 0..self.cols {
                    let pos = CellPos::new(layer, row, col);
                    if self.is_occupied(pos) && layout.contains(pos, self.layers, x, y) {
                        return Some(pos);
                    }
                }
            }
        }
        None
    }

    /// Win condition: no tiles left anywhere.
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Per-kind tile counts, indexed by [`TileKind::index`].
    pub fn kind_counts(&self) -> [usize; crate::types::TILE_KIND_COUNT] {
        let mut counts = [0; crate::types::TILE_KIND_COUNT];
        for kind in self.cells.iter().flatten() {
            counts[kind.index()] += 1;
        }
        counts
    }

    /// Iterate occupied cells with their positions, bottom layer first.
    pub fn tiles(&self) -> impl Iterator<Item = (CellPos, TileKind)> + '_ {
        let (rows, cols) = (usize::from(self.rows), usize::from(self.cols));
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            let kind = (*cell)?;
            let layer = i / (rows * cols);
            let row = (i / cols) % rows;
            let col = i % cols;
            Some((CellPos::new(layer as u8, row as u8, col as u8), kind))
        })
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = BoardStack::new(2, 3, 4);
        assert_eq!(board.index(CellPos::new(0, 0, 0)), Some(0));
        assert_eq!(board.index(CellPos::new(0, 0, 3)), Some(3));
        assert_eq!(board.index(CellPos::new(0, 1, 0)), Some(4));
        assert_eq!(board.index(CellPos::new(1, 0, 0)), Some(12));
        assert_eq!(board.index(CellPos::new(1, 2, 3)), Some(23));
        assert_eq!(board.index(CellPos::new(2, 0, 0)), None);
        assert_eq!(board.index(CellPos::new(0, 3, 0)), None);
        assert_eq!(board.index(CellPos::new(0, 0, 4)), None);
    }

    #[test]
    fn test_fill_from_drops_surplus_and_leaves_shortfall_empty() {
        let mut board = BoardStack::new(1, 2, 2);
        let placed = board.fill_from([TileKind::Ruby; 6]);
        assert_eq!(placed, 4);
        assert_eq!(board.occupied_count(), 4);

        let placed = board.fill_from([TileKind::Jade; 3]);
        assert_eq!(placed, 3);
        assert_eq!(board.get(CellPos::new(0, 1, 1)), Some(None));
    }

    #[test]
    fn test_layer_offset_puts_top_layer_at_origin() {
        let layout = Layout::REFERENCE;
        assert_eq!(layout.layer_offset(2, 3), (0, 0));
        assert_eq!(layout.layer_offset(1, 3), (5, 5));
        assert_eq!(layout.layer_offset(0, 3), (10, 10));
    }

    #[test]
    fn test_tiles_iterator_reports_positions() {
        let mut board = BoardStack::new(2, 2, 3);
        board.set(CellPos::new(1, 1, 2), Some(TileKind::Onyx));
        let tiles: Vec<_> = board.tiles().collect();
        assert_eq!(tiles, vec![(CellPos::new(1, 1, 2), TileKind::Onyx)]);
    }
}
