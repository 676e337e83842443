use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mineboard_core::*;

const TIERS: [(&str, GameConfig); 4] = [
    ("beginner", GameConfig::BEGINNER),
    ("intermediate", GameConfig::INTERMEDIATE),
    ("expert", GameConfig::EXPERT),
    ("dense", GameConfig::new_unchecked((16, 30), 400)),
];

fn placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    for (name, config) in TIERS {
        for placement in [Placement::Rejection, Placement::Shuffle] {
            group.bench_with_input(
                BenchmarkId::new(format!("{placement:?}"), name),
                &config,
                |b, &config| {
                    let mut seed = 0;
                    b.iter(|| {
                        seed += 1;
                        black_box(placement.generate(config, seed))
                    })
                },
            );
        }
    }
    group.finish();
}

fn open_board(c: &mut Criterion) {
    // few mines, so the first zero cell floods most of the board
    let config = GameConfig::new_unchecked((255, 255), 64);
    let board = Board::with_seed(config, 1).unwrap();
    let origin = board
        .cells()
        .find(|(_, cell)| !cell.is_mine() && cell.adjacent_mines() == 0)
        .map(|(coords, _)| coords)
        .unwrap();

    c.bench_function("flood_fill_255x255", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| black_box(board.reveal(origin)),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, placement, open_board);
criterion_main!(benches);
