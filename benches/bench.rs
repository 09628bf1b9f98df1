use criterion::{Criterion, criterion_group, criterion_main};
use euler_puzzles::abundant::solver::{
    AbundantSieve, LIMIT, non_abundant_sum_by_sieve, proper_divisor_sum,
};
use euler_puzzles::coin_sums::solver::{
    CoinSums, Strategy, UK_COINS, UK_TARGET, count_ways_table,
};
use euler_puzzles::puzzle::solver::Puzzle;
use std::hint::black_box;
use std::time::Duration;

fn bench_coin_sums(c: &mut Criterion) {
    let mut group = c.benchmark_group("coin sums");

    group.bench_function("naive recursion", |b| {
        b.iter(|| {
            let mut puzzle = CoinSums::uk().with_strategy(Strategy::Naive);
            black_box(puzzle.solve());
        })
    });

    group.bench_function("memoized recursion", |b| {
        b.iter(|| {
            let mut puzzle = CoinSums::uk().with_strategy(Strategy::Memoized);
            black_box(puzzle.solve());
        })
    });

    group.bench_function("table", |b| {
        b.iter(|| black_box(count_ways_table(black_box(UK_TARGET), black_box(&UK_COINS))))
    });

    group.finish();
}

fn bench_divisor_sum(c: &mut Criterion) {
    c.bench_function("proper divisor sum - 1..=1000", |b| {
        b.iter(|| {
            let total: u64 = (1..=1000).map(|n| proper_divisor_sum(black_box(n))).sum();
            black_box(total);
        })
    });
}

fn bench_non_abundant_sums(c: &mut Criterion) {
    let mut group = c.benchmark_group("non-abundant sums");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(20));

    group.bench_function("trial division", |b| {
        b.iter(|| {
            let mut sieve = AbundantSieve::euler();
            black_box(sieve.solve());
        })
    });

    group.bench_function("divisor sieve", |b| {
        b.iter(|| black_box(non_abundant_sum_by_sieve(black_box(LIMIT))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_coin_sums,
    bench_divisor_sum,
    bench_non_abundant_sums
);
criterion_main!(benches);
