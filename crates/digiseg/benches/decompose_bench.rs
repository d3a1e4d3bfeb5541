//! Criterion benchmarks for greedy decomposition.
//! Random 4-connected walks of n moves, n in {100, 1000, 10000}.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use digiseg::curve::rand::random_walk;
use digiseg::decompose::decompose;
use digiseg::geom2::GeomCfg;
use digiseg::segment::{Connectivity, DssComputer, FuzzySegmentComputer};

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");
    for &n in &[100usize, 1000, 10_000] {
        let points = random_walk(n, 0.2, 45).points();

        group.bench_with_input(BenchmarkId::new("dss_four", n), &points, |b, pts| {
            b.iter(|| decompose(pts, || DssComputer::new(Connectivity::Four)))
        });

        for &thickness in &[1.0f64, 3.0] {
            let proto = FuzzySegmentComputer::new(thickness, GeomCfg::default())
                .expect("positive thickness");
            group.bench_with_input(
                BenchmarkId::new(format!("fuzzy_t{thickness}"), n),
                &points,
                |b, pts| b.iter(|| decompose(pts, || proto.clone())),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_decompose);
criterion_main!(benches);
