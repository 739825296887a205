//! Benchmarks for workload replay

use std::io::{self, Cursor};
use std::path::Path;

use criterion::{criterion_group, criterion_main, Criterion};
use replaykv::generator::{GenSpec, WorkloadGenerator};
use replaykv::{Config, Evaluator};

fn build_workload(puts: usize, gets: usize, ranges: usize) -> String {
    let spec = GenSpec {
        puts,
        gets,
        ranges,
        seed: 7,
        ..GenSpec::default()
    };
    let mut generator = WorkloadGenerator::new(spec);
    let mut out = Vec::new();
    generator
        .generate(&mut out, Path::new("."))
        .expect("workload generation");
    String::from_utf8(out).expect("workload is utf-8")
}

fn replay_benchmarks(c: &mut Criterion) {
    let put_only = build_workload(10_000, 0, 0);
    c.bench_function("replay_put_only_10k", |b| {
        b.iter(|| {
            let mut evaluator = Evaluator::with_output(Config::default(), io::sink());
            evaluator.run(Cursor::new(put_only.as_bytes())).unwrap();
        })
    });

    let mixed = build_workload(10_000, 5_000, 200);
    c.bench_function("replay_mixed_15k", |b| {
        b.iter(|| {
            let mut evaluator = Evaluator::with_output(Config::default(), io::sink());
            evaluator.run(Cursor::new(mixed.as_bytes())).unwrap();
        })
    });
}

criterion_group!(benches, replay_benchmarks);
criterion_main!(benches);
