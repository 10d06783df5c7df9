use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tiles::core::{generate, GameSession, SimpleRng, Slot};
use tui_tiles::types::{CellPos, Difficulty, TileKind, BOARD_COLS, BOARD_ROWS};

fn bench_generate(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_purgatory", |b| {
        b.iter(|| {
            generate(
                black_box(5),
                BOARD_ROWS,
                BOARD_COLS,
                &TileKind::ALL,
                &mut rng,
            )
        })
    });
}

fn bench_handle_click(c: &mut Criterion) {
    let session = GameSession::new(Difficulty::Purgatory, 12345);

    // Worst case for resolution: a miss scans every layer.
    c.bench_function("handle_click_miss", |b| {
        let mut s = session.clone();
        b.iter(|| s.handle_click(black_box(-10), black_box(-10)))
    });

    c.bench_function("handle_click_pick", |b| {
        b.iter(|| {
            let mut s = session.clone();
            s.handle_click(black_box(350), black_box(350))
        })
    });
}

fn bench_is_covered(c: &mut Criterion) {
    let session = GameSession::new(Difficulty::Purgatory, 12345);

    c.bench_function("pickable_scan", |b| {
        b.iter(|| {
            let mut n = 0;
            for layer in 0..5 {
                for row in 0..BOARD_ROWS {
                    for col in 0..BOARD_COLS {
                        if session.is_pickable(CellPos::new(layer, row, col)) {
                            n += 1;
                        }
                    }
                }
            }
            n
        })
    });
}

fn bench_auto_clear(c: &mut Criterion) {
    use TileKind::*;
    let full = Slot::from_tiles(&[Ruby, Jade, Ruby, Amber, Jade, Ruby, Jade, Pearl, Onyx])
        .unwrap_or_default();

    c.bench_function("auto_clear_two_triples", |b| {
        b.iter(|| {
            let mut slot = full.clone();
            slot.auto_clear()
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_handle_click,
    bench_is_covered,
    bench_auto_clear
);
criterion_main!(benches);
