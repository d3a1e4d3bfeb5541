//! Seeded random curves for tests and benchmarks.
//!
//! Every generator takes an explicit `seed` and builds its own `StdRng`, so a
//! curve is reproducible from `(params, seed)` alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::FreemanChain;
use crate::geom2::Point2;
use crate::segment::Dsl;

/// Points of `dsl` with abscissae `x0, x0 + 1, ..., x0 + n - 1`.
pub fn digital_line(dsl: &Dsl, x0: i64, n: usize) -> Vec<Point2<i64>> {
    (x0..).take(n).map(|x| dsl.point_at(x)).collect()
}

/// Straight line sampled with bounded perpendicular noise.
#[derive(Clone, Copy, Debug)]
pub struct NoisyLineCfg {
    pub n: usize,
    /// Direction angle in radians.
    pub angle: f64,
    /// Distance between consecutive samples along the line.
    pub spacing: f64,
    /// Noise is uniform in `[-amplitude, amplitude]` across the line.
    pub amplitude: f64,
}

impl Default for NoisyLineCfg {
    fn default() -> Self {
        Self {
            n: 100,
            angle: 0.3,
            spacing: 1.0,
            amplitude: 0.25,
        }
    }
}

/// Samples of a noisy line; consecutive segments of any length fit in a
/// strip of width `2 * amplitude`.
pub fn noisy_line(cfg: NoisyLineCfg, seed: u64) -> Vec<Point2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (dir_x, dir_y) = (cfg.angle.cos(), cfg.angle.sin());
    let amp = cfg.amplitude.max(0.0);
    (0..cfg.n)
        .map(|i| {
            let t = i as f64 * cfg.spacing;
            let u = if amp > 0.0 {
                rng.gen_range(-amp..=amp)
            } else {
                0.0
            };
            Point2::new(t * dir_x - u * dir_y, t * dir_y + u * dir_x)
        })
        .collect()
}

/// 4-connected random walk of `n` moves without immediate U-turns.
///
/// With probability `turn` a move changes direction; otherwise it repeats the
/// previous one, so small values give long straight runs.
pub fn random_walk(n: usize, turn: f64, seed: u64) -> FreemanChain {
    let mut rng = StdRng::seed_from_u64(seed);
    let turn = turn.clamp(0.0, 1.0);
    let mut codes = Vec::with_capacity(n);
    let mut code: u8 = rng.gen_range(0..4);
    for _ in 0..n {
        if rng.gen_bool(turn) {
            // left or right quarter turn, never back
            code = (code + if rng.gen_bool(0.5) { 1 } else { 3 }) % 4;
        }
        codes.push(code);
    }
    FreemanChain {
        start: Point2::new(0, 0),
        codes,
    }
}

/// Uniform integer points in `[-half, half]^2`.
pub fn point_cloud(n: usize, half: i64, seed: u64) -> Vec<Point2<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = half.abs();
    (0..n)
        .map(|_| Point2::new(rng.gen_range(-half..=half), rng.gen_range(-half..=half)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::GeomCfg;
    use crate::segment::{FuzzySegmentComputer, SegmentComputer};

    #[test]
    fn generators_are_reproducible() {
        assert_eq!(random_walk(50, 0.3, 7), random_walk(50, 0.3, 7));
        assert_eq!(point_cloud(20, 5, 1), point_cloud(20, 5, 1));
        let a = noisy_line(NoisyLineCfg::default(), 3);
        let b = noisy_line(NoisyLineCfg::default(), 3);
        assert_eq!(a, b);
        assert_ne!(random_walk(50, 0.3, 7), random_walk(50, 0.3, 8));
    }

    #[test]
    fn random_walk_has_no_u_turn() {
        let chain = random_walk(500, 0.5, 11);
        assert_eq!(chain.len(), 500);
        for w in chain.codes().windows(2) {
            assert_ne!((w[0] + 2) % 4, w[1]);
        }
    }

    #[test]
    fn digital_line_follows_the_dsl() {
        let dsl = Dsl::new(3, 7, 2).unwrap();
        let pts = digital_line(&dsl, -4, 30);
        assert_eq!(pts.len(), 30);
        assert!(pts.iter().all(|p| dsl.contains(*p)));
        assert_eq!(pts[0].x, -4);
    }

    #[test]
    fn noisy_line_fits_its_strip() {
        let cfg = NoisyLineCfg {
            n: 200,
            amplitude: 0.2,
            ..NoisyLineCfg::default()
        };
        let pts = noisy_line(cfg, 42);
        let mut seg = FuzzySegmentComputer::new(0.4 + 1e-9, GeomCfg::default()).unwrap();
        seg.init(&pts, 0).unwrap();
        while seg.extend_back() {}
        assert_eq!(seg.range(), 0..200);
    }
}
