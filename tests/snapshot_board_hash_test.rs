use tui_tiles::core::{GameSession, LossCause, SessionSnapshot, SessionState, COVERED_FLAG};
use tui_tiles::types::{CellPos, Difficulty, BOARD_COLS, BOARD_ROWS, MAX_LAYERS};

type Grid = [[[u8; BOARD_COLS as usize]; BOARD_ROWS as usize]; MAX_LAYERS as usize];

fn fnv1a64_bytes(bytes: impl Iterator<Item = u8>) -> u64 {
    // FNV-1a 64-bit.
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

fn fnv1a64_board(board: &Grid) -> u64 {
    fnv1a64_bytes(
        board
            .iter()
            .flat_map(|layer| layer.iter().flat_map(|row| row.iter().copied())),
    )
}

#[test]
fn snapshot_into_sets_board_hash() {
    let mut game = GameSession::new(Difficulty::Hell, 1);
    let mut snap = SessionSnapshot::default();
    game.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash, fnv1a64_board(&snap.board));

    game.pick(CellPos::new(3, 2, 2));
    game.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash, fnv1a64_board(&snap.board));
}

#[test]
fn ticking_does_not_change_board_hash() {
    let mut game = GameSession::new(Difficulty::Easy, 5);
    let before = game.snapshot();
    game.tick(10_000);
    let after = game.snapshot();
    assert_eq!(before.board_hash, after.board_hash);
    assert_eq!(after.remaining_secs(), 50);
}

#[test]
fn snapshot_reuse_overwrites_previous_session() {
    let mut snap = SessionSnapshot::default();
    GameSession::new(Difficulty::Purgatory, 3).snapshot_into(&mut snap);
    assert_eq!(snap.layers, 5);

    GameSession::new(Difficulty::Easy, 3).snapshot_into(&mut snap);
    assert_eq!(snap.layers, 2);
    assert_eq!(snap.tiles_left, 98);
    // Layers beyond the board are cleared.
    assert!(snap.board[2..].iter().flatten().flatten().all(|&v| v == 0));
}

#[test]
fn covered_flag_matches_session() {
    let game = GameSession::new(Difficulty::Hard, 11);
    let snap = game.snapshot();
    for layer in 0..3 {
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                let pos = CellPos::new(layer, row, col);
                let v = snap.board[layer as usize][row as usize][col as usize];
                assert_eq!(v != 0, game.board().is_occupied(pos));
                if v != 0 {
                    assert_eq!(v & COVERED_FLAG == 0, game.is_pickable(pos));
                }
            }
        }
    }
}

#[test]
fn snapshot_carries_outcome() {
    let mut game = GameSession::new(Difficulty::Easy, 8);
    game.tick(60_000);
    let snap = game.snapshot();
    assert_eq!(snap.state, SessionState::Lost);
    assert_eq!(snap.loss_cause, Some(LossCause::Timeout));
    assert!(!snap.playable());
    assert_eq!(snap.seed, 8);
    assert_eq!(snap.difficulty, Difficulty::Easy);
}
