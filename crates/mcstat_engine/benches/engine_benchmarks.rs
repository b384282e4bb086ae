//! Criterion benchmarks for mcstat_engine.
//!
//! Benchmarks cover:
//! - Uniform generation (single draws vs batch fill)
//! - Variate generators (try-and-accept, CLT, exponential, Poisson)
//! - Hit-or-miss vs crude Monte-Carlo integration

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mcstat_engine::integration::{integral_crude_mc, integral_hom};
use mcstat_engine::rng::RandomStream;
use mcstat_engine::variates::{
    generate_exp, generate_poisson, generate_tac, generate_tcl, DEFAULT_N_SUM,
};
use mcstat_engine::{Interval, IterationBudget};

fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform");

    for n in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("single", n), &n, |b, &n| {
            let mut rng = RandomStream::from_seed(42);
            b.iter(|| {
                let mut sum = 0.0;
                for _ in 0..n {
                    sum += rng.uniform01();
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("batch", n), &n, |b, &n| {
            let mut rng = RandomStream::from_seed(42);
            let mut buffer = vec![0.0; n];
            b.iter(|| {
                rng.fill_uniform(&mut buffer);
                black_box(buffer.iter().sum::<f64>())
            });
        });
    }

    group.finish();
}

fn bench_variates(c: &mut Criterion) {
    let mut group = c.benchmark_group("variates");
    let n = 10_000;
    let unit = Interval::unit();

    group.bench_function("tac_triangular", |b| {
        let mut rng = RandomStream::from_seed(42);
        b.iter(|| {
            black_box(generate_tac(
                &mut rng,
                |x| 2.0 * x,
                unit,
                2.0,
                n,
                None,
                IterationBudget::unbounded(),
            ))
        });
    });

    group.bench_function("tcl", |b| {
        let mut rng = RandomStream::from_seed(42);
        b.iter(|| black_box(generate_tcl(&mut rng, unit, n, DEFAULT_N_SUM, None)));
    });

    group.bench_function("exp", |b| {
        let mut rng = RandomStream::from_seed(42);
        b.iter(|| black_box(generate_exp(&mut rng, 1.0, n, None)));
    });

    for mean in [1.0, 10.0] {
        group.bench_with_input(BenchmarkId::new("poisson", mean), &mean, |b, &mean| {
            let mut rng = RandomStream::from_seed(42);
            b.iter(|| {
                black_box(generate_poisson(
                    &mut rng,
                    mean,
                    n,
                    None,
                    IterationBudget::unbounded(),
                ))
            });
        });
    }

    group.finish();
}

fn bench_integration(c: &mut Criterion) {
    let mut group = c.benchmark_group("integration");
    let domain = Interval::new(0.0, std::f64::consts::PI).unwrap();

    for n in [1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("hit_or_miss", n), &n, |b, &n| {
            let mut rng = RandomStream::from_seed(42);
            b.iter(|| black_box(integral_hom(&mut rng, f64::sin, domain, 1.0, n)));
        });

        group.bench_with_input(BenchmarkId::new("crude", n), &n, |b, &n| {
            let mut rng = RandomStream::from_seed(42);
            b.iter(|| black_box(integral_crude_mc(&mut rng, f64::sin, domain, n)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_uniform, bench_variates, bench_integration);
criterion_main!(benches);
