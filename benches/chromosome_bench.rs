//! Criterion benchmarks for chromosome operators.
//!
//! Uses OneMax as the fitness function so that the measurements reflect
//! operator overhead rather than evaluation cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_bitga::chromosome::{shared_fitness, Chromosome, CrossoverStrategy, SharedFitness};
use u_bitga::random::create_rng;

fn onemax() -> SharedFitness {
    shared_fitness(|c: &Chromosome| c.ones() as f64)
}

fn bench_generate_population(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_population");

    for (pop, len) in [(50usize, 64usize), (100, 256), (200, 1024)] {
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_l{}", pop, len), len),
            &(pop, len),
            |b, &(pop, len)| {
                let mut rng = create_rng(42);
                b.iter(|| {
                    let population =
                        Chromosome::generate_population(pop, len, onemax(), &mut rng);
                    black_box(population)
                })
            },
        );
    }
    group.finish();
}

fn bench_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_mutant");

    for &len in &[64usize, 256, 1024] {
        let mut rng = create_rng(42);
        let parent = Chromosome::random(len, onemax(), &mut rng);
        let p = 1.0 / len as f64;
        group.bench_with_input(BenchmarkId::from_parameter(len), &parent, |b, parent| {
            b.iter(|| black_box(parent.create_mutant(black_box(p), &mut rng)))
        });
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossover");
    let len = 1024;

    for strategy in CrossoverStrategy::ALL {
        let mut rng = create_rng(42);
        let mut a = Chromosome::random(len, onemax(), &mut rng);
        let b = Chromosome::random(len, onemax(), &mut rng);
        let mask = (0..len).map(|i| i % 3 == 0).collect();
        a.set_mask(mask).expect("mask matches chromosome size");

        group.bench_with_input(
            BenchmarkId::from_parameter(strategy),
            &(a, b),
            |bench, (a, b)| {
                bench.iter(|| black_box(a.crossover_with(b, strategy, &mut rng)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_generate_population, bench_mutation, bench_crossover);
criterion_main!(benches);
