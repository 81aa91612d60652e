use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use minesweep_core::{Board, Difficulty, MineGenerator, RandomMineGenerator};
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        let mut generator = RandomMineGenerator::from_seed(0);
        group.bench_function(difficulty.label(), |b| {
            b.iter(|| generator.generate(black_box(config), black_box((0, 0))))
        });
    }
    group.finish();
}

fn bench_first_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_open");
    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        let mut seed = 0;
        group.bench_function(difficulty.label(), |b| {
            b.iter_batched(
                || {
                    seed += 1;
                    Board::with_seed(config, seed).unwrap()
                },
                |mut board| board.open_cell(black_box((config.rows / 2, config.cols / 2))),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_open_empty_board(c: &mut Criterion) {
    let config = minesweep_core::BoardConfig::new(255, 255, 0).unwrap();
    c.bench_function("flood_fill_255x255", |b| {
        b.iter_batched(
            || Board::with_seed(config, 0).unwrap(),
            |mut board| board.open_cell(black_box((127, 127))),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_first_open,
    bench_open_empty_board
);
criterion_main!(benches);
