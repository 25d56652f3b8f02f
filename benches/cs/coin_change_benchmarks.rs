use coinchange::{ChangeProblem, CoinChangeSolver, DpSolver, GreedySolver};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_coin_change(c: &mut Criterion) {
    let coins = [1, 5, 10, 25, 50, 100];
    let mut group = c.benchmark_group("coin_change");

    for amount in [100, 1_000, 10_000] {
        let problem = ChangeProblem::from_unsigned(&coins, amount).unwrap();
        group.bench_with_input(BenchmarkId::new("greedy", amount), &problem, |b, p| {
            b.iter(|| GreedySolver.solve(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("dp", amount), &problem, |b, p| {
            b.iter(|| DpSolver.solve(black_box(p)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_coin_change);
criterion_main!(benches);
