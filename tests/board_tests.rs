//! Board tests - cells, covering and click resolution

use tui_tiles::core::{BoardStack, Layout};
use tui_tiles::types::{CellPos, TileKind, BOARD_COLS, BOARD_ROWS};

fn full(layers: u8, rows: u8, cols: u8, kind: TileKind) -> BoardStack {
    let mut board = BoardStack::new(layers, rows, cols);
    let n = board.capacity();
    board.fill_from(std::iter::repeat(kind).take(n));
    board
}

#[test]
fn test_board_new_empty() {
    let board = BoardStack::with_layers(3);
    assert_eq!(board.layers(), 3);
    assert_eq!(board.rows(), BOARD_ROWS);
    assert_eq!(board.cols(), BOARD_COLS);
    assert_eq!(board.capacity(), 147);
    assert!(board.is_cleared());

    for layer in 0..3 {
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                assert_eq!(board.get(CellPos::new(layer, row, col)), Some(None));
            }
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = BoardStack::with_layers(2);
    assert_eq!(board.get(CellPos::new(2, 0, 0)), None);
    assert_eq!(board.get(CellPos::new(0, BOARD_ROWS, 0)), None);
    assert_eq!(board.get(CellPos::new(0, 0, BOARD_COLS)), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = BoardStack::with_layers(2);
    assert!(board.set(CellPos::new(1, 3, 4), Some(TileKind::Amber)));
    assert_eq!(board.get(CellPos::new(1, 3, 4)), Some(Some(TileKind::Amber)));
    assert!(!board.set(CellPos::new(5, 0, 0), Some(TileKind::Amber)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_remove_tile_is_idempotent() {
    let mut board = BoardStack::new(1, 1, 1);
    let pos = CellPos::new(0, 0, 0);
    board.set(pos, Some(TileKind::Pearl));
    assert_eq!(board.remove_tile(pos), Some(TileKind::Pearl));
    assert_eq!(board.remove_tile(pos), None);
    assert_eq!(board.remove_tile(CellPos::new(3, 3, 3)), None);
    assert!(board.is_cleared());
}

#[test]
fn test_top_layer_is_never_covered() {
    let board = full(4, BOARD_ROWS, BOARD_COLS, TileKind::Ruby);
    let layout = Layout::REFERENCE;
    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLS {
            let pos = CellPos::new(3, row, col);
            assert!(!board.is_covered(pos, &layout));
            assert!(board.is_pickable(pos, &layout));
        }
    }
}

#[test]
fn test_tile_under_occupied_cell_is_covered() {
    let mut board = full(2, 2, 2, TileKind::Jade);
    let layout = Layout::REFERENCE;
    let below = CellPos::new(0, 1, 0);
    assert!(board.is_covered(below, &layout));
    assert!(!board.is_pickable(below, &layout));

    board.remove_tile(CellPos::new(1, 1, 0));
    assert!(!board.is_covered(below, &layout));
    assert!(board.is_pickable(below, &layout));
}

#[test]
fn test_only_the_next_layer_up_counts() {
    // Layer 1 empty above the bottom tile, layer 2 occupied.
    let mut board = BoardStack::new(3, 1, 1);
    board.set(CellPos::new(0, 0, 0), Some(TileKind::Ruby));
    board.set(CellPos::new(2, 0, 0), Some(TileKind::Jade));
    let layout = Layout::REFERENCE;
    assert!(!board.is_covered(CellPos::new(0, 0, 0), &layout));
}

#[test]
fn test_neighbouring_cells_do_not_cover() {
    let mut board = BoardStack::new(2, 1, 3);
    board.set(CellPos::new(0, 0, 1), Some(TileKind::Onyx));
    board.set(CellPos::new(1, 0, 0), Some(TileKind::Ruby));
    board.set(CellPos::new(1, 0, 2), Some(TileKind::Ruby));
    assert!(!board.is_covered(CellPos::new(0, 0, 1), &Layout::REFERENCE));
}

#[test]
fn test_covering_uses_half_tile_threshold() {
    let mut board = BoardStack::new(2, 1, 1);
    board.set(CellPos::new(0, 0, 0), Some(TileKind::Ruby));
    board.set(CellPos::new(1, 0, 0), Some(TileKind::Ruby));
    let pos = CellPos::new(0, 0, 0);

    // Shift of exactly half a tile is not an overlap.
    let half = Layout {
        layer_dx: 50,
        layer_dy: 0,
        ..Layout::REFERENCE
    };
    assert!(!board.is_covered(pos, &half));

    let under_half = Layout {
        layer_dx: 49,
        layer_dy: 49,
        ..Layout::REFERENCE
    };
    assert!(board.is_covered(pos, &under_half));
}

#[test]
fn test_resolve_click_prefers_top_layer() {
    let mut board = full(2, 2, 2, TileKind::Amber);
    let layout = Layout::REFERENCE;

    // The top layer sits at the origin, the bottom layer 5 units down-right.
    assert_eq!(board.resolve_click(50, 50, &layout), Some(CellPos::new(1, 0, 0)));
    assert_eq!(board.resolve_click(102, 102, &layout), Some(CellPos::new(1, 1, 1)));

    // With the top tile gone the point falls on the shifted bottom tile (0,0).
    board.remove_tile(CellPos::new(1, 1, 1));
    assert_eq!(board.resolve_click(102, 102, &layout), Some(CellPos::new(0, 0, 0)));
}

#[test]
fn test_resolve_click_outside_board() {
    let board = full(2, 2, 2, TileKind::Amber);
    let layout = Layout::REFERENCE;
    assert_eq!(board.resolve_click(-1, -1, &layout), None);
    assert_eq!(board.resolve_click(205, 50, &layout), None);
    // The bottom layer spills 5 units past the top layer.
    assert_eq!(board.resolve_click(203, 203, &layout), Some(CellPos::new(0, 1, 1)));
}

#[test]
fn test_resolve_click_may_return_covered_tile() {
    let board = full(2, 1, 1, TileKind::Pearl);
    let layout = Layout::REFERENCE;
    // (102, 102) lies only inside the bottom tile, which is still covered.
    let pos = board.resolve_click(102, 102, &layout);
    assert_eq!(pos, Some(CellPos::new(0, 0, 0)));
    assert!(board.is_covered(CellPos::new(0, 0, 0), &layout));
}

#[test]
fn test_kind_counts() {
    let mut board = BoardStack::new(1, 2, 3);
    board.fill_from([
        TileKind::Ruby,
        TileKind::Ruby,
        TileKind::Jade,
        TileKind::Onyx,
        TileKind::Ruby,
    ]);
    assert_eq!(board.kind_counts(), [3, 1, 0, 0, 1]);
    assert_eq!(board.occupied_count(), 5);
}
