//! Criterion benchmarks for the incremental convex hull.
//! Sizes n in {16, 128, 1024, 8192}; points inserted at alternating ends.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use digiseg::curve::rand::{noisy_line, point_cloud, NoisyLineCfg};
use digiseg::geom2::GeomCfg;
use digiseg::hull::{IncrementalHull, ThicknessDef};

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[16usize, 128, 1024, 8192] {
        group.bench_with_input(BenchmarkId::new("cloud_alternating_ends", n), &n, |b, &n| {
            b.iter_batched(
                || point_cloud(n, 1000, 43),
                |pts| {
                    let mut hull = IncrementalHull::new(GeomCfg::default());
                    for (i, p) in pts.into_iter().enumerate() {
                        if i % 2 == 0 {
                            hull.add_back(p);
                        } else {
                            hull.add_front(p);
                        }
                    }
                    hull
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("noisy_line_min_width", n), &n, |b, &n| {
            let cfg = NoisyLineCfg {
                n,
                ..NoisyLineCfg::default()
            };
            let hull = IncrementalHull::from_points(noisy_line(cfg, 44), GeomCfg::default());
            b.iter(|| hull.min_width(ThicknessDef::Euclidean))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
