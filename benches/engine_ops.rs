use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use merge2048::engine::{is_game_over, Board, Move, RandomSource};
use merge2048::game::GameState;
use std::hint::black_box;

fn corpus(size: usize) -> Vec<Board> {
    let mut source = RandomSource::seeded(42);
    let mut boards = Vec::new();
    // Empty and two-tile starts
    boards.push(Board::empty(size));
    let mut b = Board::empty(size).with_spawned_tile(&mut source).with_spawned_tile(&mut source);
    boards.push(b.clone());
    // Derive a variety of densities deterministically
    let seq = [Move::Left, Move::Up, Move::Right, Move::Down];
    for i in 0..40 {
        let dir = seq[i % seq.len()];
        let nb = b.shift(dir);
        if nb != b { b = nb.with_spawned_tile(&mut source); }
        boards.push(b.clone());
    }
    boards
}

fn bench_shift(c: &mut Criterion) {
    let boards = corpus(4);
    for dir in Move::ALL {
        c.bench_function(&format!("shift/{dir}"), |bch| {
            bch.iter(|| {
                let mut acc = 0u64;
                for bd in &boards { acc ^= bd.shift(dir).score(); }
                black_box(acc)
            })
        });
    }
    let large = corpus(8);
    c.bench_function("shift/left_8x8", |bch| {
        bch.iter(|| {
            let mut acc = 0u64;
            for bd in &large { acc ^= bd.shift(Move::Left).highest_tile(); }
            black_box(acc)
        })
    });
}

fn bench_spawn_and_apply(c: &mut Criterion) {
    c.bench_function("board/with_spawned_tile", |bch| {
        bch.iter_batched(
            || (Board::empty(4), RandomSource::seeded(7)),
            |(mut bd, mut source)| {
                for _ in 0..16 { bd = bd.with_spawned_tile(&mut source); }
                black_box(bd)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("game/apply_move_cycle", |bch| {
        bch.iter_batched(
            || {
                let mut source = RandomSource::seeded(9);
                let game = GameState::new_game(4, &mut source);
                (game, source)
            },
            |(mut game, mut source)| {
                for i in 0..64 { game = game.apply_move(Move::ALL[i % 4], &mut source); }
                black_box(game)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_game_over(c: &mut Criterion) {
    let boards = corpus(4);
    c.bench_function("query/is_game_over", |bch| {
        bch.iter(|| boards.iter().filter(|bd| is_game_over(bd)).count())
    });
}

criterion_group!(engine_ops, bench_shift, bench_spawn_and_apply, bench_game_over);
criterion_main!(engine_ops);
