//! Pool tests - sizing, dealing and shuffle fairness

use proptest::prelude::*;

use tui_tiles::core::{generate, pool_size, BoardStack, SimpleRng, TilePool};
use tui_tiles::types::{Difficulty, TileKind, BOARD_COLS, BOARD_ROWS, TILE_KIND_COUNT};

#[test]
fn test_standard_boards_are_fully_dealt() {
    let mut rng = SimpleRng::new(12345);
    for difficulty in Difficulty::ALL {
        let board = generate(
            difficulty.layers(),
            BOARD_ROWS,
            BOARD_COLS,
            &TileKind::ALL,
            &mut rng,
        );
        assert_eq!(board.occupied_count(), board.capacity());
    }
}

#[test]
fn test_easy_board_counts() {
    // 98 cells: 33 groups in the pool, the last one clipped to two tiles.
    let mut rng = SimpleRng::new(3);
    let board = generate(2, BOARD_ROWS, BOARD_COLS, &TileKind::ALL, &mut rng);
    let counts = board.kind_counts();
    assert_eq!(counts.iter().sum::<usize>(), 98);
    let uneven: Vec<_> = counts.iter().filter(|&&n| n % 3 != 0).collect();
    assert_eq!(uneven, vec![&20]);
}

#[test]
fn test_same_seed_same_deal() {
    let a = generate(3, BOARD_ROWS, BOARD_COLS, &TileKind::ALL, &mut SimpleRng::new(99));
    let b = generate(3, BOARD_ROWS, BOARD_COLS, &TileKind::ALL, &mut SimpleRng::new(99));
    let c = generate(3, BOARD_ROWS, BOARD_COLS, &TileKind::ALL, &mut SimpleRng::new(100));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_short_pool_leaves_cells_empty() {
    let pool = TilePool::build(3, &[TileKind::Ruby]);
    let mut board = BoardStack::new(1, 2, 3);
    assert_eq!(pool.deal_onto(&mut board), 3);
    assert_eq!(board.occupied_count(), 3);
}

/// Every kind should land in every cell about equally often.
#[test]
fn test_shuffle_is_uniform_per_cell() {
    const TRIALS: usize = 5000;
    let mut rng = SimpleRng::new(2024);
    // 15 cells, three of each kind.
    let mut hits = [[0usize; TILE_KIND_COUNT]; 15];
    for _ in 0..TRIALS {
        let board = generate(1, 3, 5, &TileKind::ALL, &mut rng);
        for (i, cell) in board.cells().iter().enumerate() {
            if let Some(kind) = cell {
                hits[i][kind.index()] += 1;
            }
        }
    }
    let expected = TRIALS / TILE_KIND_COUNT;
    for cell in hits {
        for n in cell {
            assert!(
                n.abs_diff(expected) < 150,
                "count {} too far from {}",
                n,
                expected
            );
        }
    }
}

proptest! {
    #[test]
    fn prop_pool_is_whole_groups_covering_the_board(cells in 0usize..400) {
        let pool = TilePool::build(cells, &TileKind::ALL);
        prop_assert_eq!(pool.len(), pool_size(cells));
        prop_assert_eq!(pool.len() % 3, 0);
        prop_assert!(pool.len() >= cells);
        prop_assert!(pool.len() < cells + 3);
    }

    #[test]
    fn prop_at_most_one_kind_is_uneven(
        layers in 1u8..=5,
        rows in 1u8..=7,
        cols in 1u8..=7,
        seed in any::<u32>()
    ) {
        let mut rng = SimpleRng::new(seed);
        let board = generate(layers, rows, cols, &TileKind::ALL, &mut rng);
        prop_assert_eq!(board.occupied_count(), board.capacity());
        let uneven = board.kind_counts().iter().filter(|&&n| n % 3 != 0).count();
        prop_assert!(uneven <= 1);
        if board.capacity() % 3 == 0 {
            prop_assert_eq!(uneven, 0);
        }
    }
}
