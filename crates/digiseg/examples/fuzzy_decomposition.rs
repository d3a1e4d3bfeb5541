//! Fuzzy segments of a noisy polyline for a few thickness bounds.
//!
//! Usage:
//!   cargo run -p digiseg --example fuzzy_decomposition
//!
//! Three noisy lines at different angles are concatenated; a thick enough
//! bound recovers roughly one segment per line.

use digiseg::api::{decompose, noisy_line, FuzzySegmentComputer, GeomCfg, NoisyLineCfg, Point2};

fn main() {
    let mut points: Vec<Point2<f64>> = Vec::new();
    for (k, angle) in [0.1f64, 1.2, -0.6].into_iter().enumerate() {
        let cfg = NoisyLineCfg {
            n: 60,
            angle,
            spacing: 0.5,
            amplitude: 0.15,
        };
        let (ox, oy) = points.last().map_or((0.0, 0.0), |p| (p.x, p.y));
        points.extend(
            noisy_line(cfg, 2025 + k as u64)
                .into_iter()
                .skip(1)
                .map(|p| Point2::new(p.x + ox, p.y + oy)),
        );
    }
    for thickness in [0.2, 0.4, 0.8] {
        let proto = match FuzzySegmentComputer::new(thickness, GeomCfg::default()) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        };
        let segments = match decompose(&points, || proto.clone()) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        };
        println!("thickness {thickness}: {} segments", segments.len());
        for s in &segments {
            let d = s.primitive.direction();
            println!(
                "  {:>4}..{:<4} width {:.3} direction ({:.3}, {:.3})",
                s.range.start,
                s.range.end,
                s.primitive.width(),
                d.x,
                d.y
            );
        }
    }
}
