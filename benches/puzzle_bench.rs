//! Criterion benchmarks for jigsaw-ga.
//!
//! Measures the hot paths of a run: fitness scoring, distance table
//! construction, crossover, and one full generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jigsaw_ga::ga::{evolve, operators::crossover, population, GaConfig};
use jigsaw_ga::puzzle::Puzzle;
use jigsaw_ga::random::create_rng;

fn scrambled(side: usize) -> Puzzle {
    let mut rng = create_rng(42);
    let mut p = Puzzle::random_solvable(side, side, &mut rng).expect("positive dimensions");
    p.shuffle(&mut rng);
    p
}

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");
    for side in [3, 8, 16] {
        let p = scrambled(side);
        group.bench_with_input(BenchmarkId::from_parameter(side), &p, |b, p| {
            b.iter(|| black_box(p.fitness()))
        });
    }
    group.finish();
}

fn bench_distance_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_table");
    for side in [3, 8, 16] {
        let p = scrambled(side);
        group.bench_with_input(BenchmarkId::from_parameter(side), &p, |b, p| {
            b.iter(|| black_box(p.distance_table()))
        });
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let base = scrambled(8);
    let table = base.distance_table();
    let mut rng = create_rng(7);
    let pop = population(&base, 2, &mut rng);

    c.bench_function("crossover_8x8", |b| {
        b.iter(|| {
            let child = crossover(&pop[0], &pop[1], &table, &mut rng).expect("same shape");
            black_box(child)
        })
    });
}

fn bench_evolve(c: &mut Criterion) {
    let base = scrambled(5);
    let table = base.distance_table();

    for parallel in [false, true] {
        let config = GaConfig::default().with_parallel(parallel);
        let name = if parallel {
            "evolve_5x5_pop200_parallel"
        } else {
            "evolve_5x5_pop200"
        };
        c.bench_function(name, |b| {
            b.iter_batched(
                || {
                    let mut rng = create_rng(1);
                    (population(&base, 200, &mut rng), rng)
                },
                |(pop, mut rng)| black_box(evolve(pop, &table, &config, &mut rng)),
                criterion::BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(
    benches,
    bench_fitness,
    bench_distance_table,
    bench_crossover,
    bench_evolve
);
criterion_main!(benches);
