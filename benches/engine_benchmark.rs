//! Benchmarks for the gamma engine hot paths.
//!
//! Ordinary moves must stay near-constant; the golden move pays for a
//! whole-board reindex and the renderer for a whole-board walk.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gamma::Game;

/// Fill a board with alternating full rows for two players.
fn striped_game(width: u32, height: u32) -> Game {
    let mut game = Game::new(width, height, 2, width * height).expect("board allocation");
    for y in 0..height {
        let player = 1 + y % 2;
        for x in 0..width {
            assert!(game.make_move(player, x, y));
        }
    }
    game
}

fn bench_fill_board(c: &mut Criterion) {
    c.bench_function("fill_64x64_striped", |b| {
        b.iter(|| black_box(striped_game(black_box(64), black_box(64))));
    });
}

fn bench_golden_reindex(c: &mut Criterion) {
    let game = striped_game(128, 128);

    c.bench_function("golden_move_128x128", |b| {
        b.iter(|| {
            let mut game = game.clone();
            // Captures a mid-row cell of player 2, splitting the row and
            // forcing the full rebuild.
            black_box(game.golden_move(1, 64, 63))
        });
    });
}

fn bench_render_board(c: &mut Criterion) {
    let game = striped_game(128, 128);

    c.bench_function("render_128x128", |b| {
        b.iter(|| black_box(game.board()));
    });
}

criterion_group!(
    benches,
    bench_fill_board,
    bench_golden_reindex,
    bench_render_board
);
criterion_main!(benches);
