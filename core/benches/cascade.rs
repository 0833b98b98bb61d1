use criterion::{Criterion, criterion_group, criterion_main};
use sapper_core::*;
use std::hint::black_box;

fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade");

    let sparse = Board::from_mine_coords((255, 255), &[(254, 254)]).unwrap();
    group.bench_function("flood_255x255", |b| {
        b.iter_batched(
            || sparse.clone(),
            |mut board| black_box(board.reveal((0, 0))),
            criterion::BatchSize::LargeInput,
        )
    });

    group.bench_function("expert_session", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut session = GameSession::seeded(GameConfig::expert(), seed);
            black_box(session.handle_reveal((15, 8)))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_cascade);
criterion_main!(benches);
