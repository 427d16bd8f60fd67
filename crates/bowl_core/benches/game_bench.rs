use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use bowl_core::{calculate_final_score, GameEngine};

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_seeded_game", |b| {
        b.iter(|| GameEngine::from_seed(black_box(42)).play().unwrap())
    });
}

fn bench_scoring_pass(c: &mut Criterion) {
    c.bench_function("calculate_final_score", |b| {
        b.iter_batched(
            || GameEngine::from_seed(7).play_frames(),
            |mut game| calculate_final_score(&mut game).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_full_game, bench_scoring_pass);
criterion_main!(benches);
