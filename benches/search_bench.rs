use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use smart_horses::ai::{Minimax, Reach};
use smart_horses::{Difficulty, GameState, create_search};

fn bench_difficulties(c: &mut Criterion) {
    let state = GameState::random(42);
    let mut group = c.benchmark_group("search");
    for difficulty in Difficulty::ALL {
        let engine = create_search(difficulty);
        group.bench_with_input(
            BenchmarkId::new("difficulty", difficulty),
            &state,
            |b, state| b.iter(|| engine.get_best_move(black_box(state))),
        );
    }
    group.finish();
}

fn bench_pruning(c: &mut Criterion) {
    let state = GameState::initial();
    let mut group = c.benchmark_group("pruning");
    for pruning in [false, true] {
        let engine = Minimax::new(Reach, 4).with_pruning(pruning);
        group.bench_with_input(BenchmarkId::new("depth4", pruning), &state, |b, state| {
            b.iter(|| engine.get_best_move(black_box(state)))
        });
    }
    group.finish();
}

fn bench_parallel_root(c: &mut Criterion) {
    let state = GameState::random(7);
    let engine = Minimax::new(Reach, 5).with_pruning(true).with_parallel(true);
    c.bench_function("parallel_root_depth5", |b| {
        b.iter(|| engine.get_best_move(black_box(&state)))
    });
}

criterion_group!(benches, bench_difficulties, bench_pruning, bench_parallel_root);
criterion_main!(benches);
