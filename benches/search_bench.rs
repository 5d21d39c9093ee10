//! Criterion benchmarks for the board model and the search loop.
//!
//! Move throughput dominates long runs, so the model benchmarks isolate
//! `move_queen` and candidate pricing from the search policy.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use peaceable_queens::grid::AttackGrid;
use peaceable_queens::known::best_known_pairs;
use peaceable_queens::random::create_rng;
use peaceable_queens::search::{AnnealConfig, HillClimbConfig, Optimizer, SearchConfig, Strategy};

// ===========================================================================
// Board model
// ===========================================================================

fn bench_move_queen(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_queen");

    for &n in &[8usize, 16, 30] {
        let mut rng = create_rng(42);
        let mut grid = AttackGrid::new(n);
        grid.place_pairs(best_known_pairs(n).unwrap_or(0), &mut rng);

        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                let from = grid.random_occupied(&mut rng).unwrap();
                let to = grid.random_empty(&mut rng).unwrap();
                grid.move_queen(black_box(from), black_box(to));
                black_box(grid.conflict_count())
            })
        });
    }
    group.finish();
}

fn bench_price_all_empty(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_all_empty");

    for &n in &[8usize, 16, 30] {
        let mut rng = create_rng(7);
        let mut grid = AttackGrid::new(n);
        grid.place_pairs(best_known_pairs(n).unwrap_or(0), &mut rng);
        let queen = grid.occupied()[0];
        let colour = grid.square(queen).occupant().unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(n), &grid, |b, grid| {
            b.iter(|| {
                grid.empty()
                    .iter()
                    .map(|&e| grid.square(e).cost_for(colour))
                    .min()
            })
        });
    }
    group.finish();
}

// ===========================================================================
// Full runs
// ===========================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_n10_target8");
    group.sample_size(10);

    let strategies = [
        Strategy::Anneal(AnnealConfig::default().with_max_steps(100_000)),
        Strategy::HillClimb(HillClimbConfig::default().with_max_attempts(20_000)),
    ];
    for strategy in strategies {
        let config = SearchConfig::default()
            .with_strategy(strategy)
            .with_target_pairs(8)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy.name()),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut grid = AttackGrid::new(10);
                    let result = Optimizer::run(&mut grid, black_box(config)).unwrap();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_move_queen, bench_price_all_empty, bench_search);
criterion_main!(benches);
