use super::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn p(x: i64, y: i64) -> Point2<i64> {
    Point2::new(x, y)
}

/// Andrew's monotone chain; collinear points are dropped.
fn reference_hull(points: &[Point2<i64>]) -> Vec<Point2<i64>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort();
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let cross = |o: Point2<i64>, a: Point2<i64>, b: Point2<i64>| i64::cross(o, a, b);
    let mut lower: Vec<Point2<i64>> = Vec::with_capacity(pts.len());
    for &q in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], q) <= 0 {
            lower.pop();
        }
        lower.push(q);
    }
    let mut upper: Vec<Point2<i64>> = Vec::with_capacity(pts.len());
    for &q in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], q) <= 0 {
            upper.pop();
        }
        upper.push(q);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

fn build(points: &[Point2<i64>], ends: &[bool]) -> IncrementalHull<i64> {
    let mut hull = IncrementalHull::new(GeomCfg::default());
    for (q, &front) in points.iter().zip(ends.iter().cycle()) {
        if front {
            hull.add_front(*q);
        } else {
            hull.add_back(*q);
        }
    }
    hull
}

#[test]
fn square_with_interior_and_boundary_points() {
    let pts = [p(0, 0), p(4, 0), p(4, 4), p(0, 4), p(2, 2), p(2, 0), p(4, 1)];
    let hull = IncrementalHull::from_points(pts, GeomCfg::default());
    assert_eq!(hull.state(), HullState::Valid);
    assert_eq!(hull.len(), 4);
    assert!(hull.is_convex());
    for q in pts {
        assert!(hull.contains(q));
    }
    assert!(!hull.contains(p(5, 5)));
}

#[test]
fn collinear_points_stay_initializing_with_extremes() {
    let mut hull = IncrementalHull::new(GeomCfg::default());
    assert!(hull.add_back(p(1, 1)));
    assert!(!hull.add_back(p(1, 1)));
    assert!(hull.add_back(p(2, 2)));
    assert!(hull.add_front(p(0, 0)));
    assert!(!hull.add_back(p(1, 1)));
    assert!(hull.add_back(p(5, 5)));
    assert_eq!(hull.state(), HullState::Initializing);
    let verts: BTreeSet<_> = hull.iter().copied().collect();
    assert_eq!(verts, BTreeSet::from([p(0, 0), p(5, 5)]));
    let d = hull.diameter().unwrap();
    assert!((d.length - 50f64.sqrt()).abs() < 1e-12);
    let w = hull.min_width(ThicknessDef::Euclidean).unwrap();
    assert_eq!(w.thickness, 0.0);
}

#[test]
fn empty_hull_queries_fail() {
    let hull = IncrementalHull::<i64>::default();
    assert_eq!(hull.diameter(), Err(HullError::Empty));
    assert_eq!(hull.min_width(ThicknessDef::Euclidean), Err(HullError::Empty));
    assert!(!hull.contains(p(0, 0)));
}

#[test]
fn clockwise_triple_is_reordered() {
    // (0,0) -> (0,1) -> (1,0) turns right; the hull stores it counter-clockwise.
    let hull = IncrementalHull::from_points([p(0, 0), p(0, 1), p(1, 0)], GeomCfg::default());
    assert_eq!(hull.state(), HullState::Valid);
    assert!(hull.is_convex());
    let cw = IncrementalHull::from_points(
        [p(0, 0), p(0, 1), p(1, 0)],
        GeomCfg {
            winding: Winding::Clockwise,
            ..GeomCfg::default()
        },
    );
    let v = cw.vertices();
    assert_eq!(orientation(v[0], v[1], v[2], 0.0), Orientation::Right);
}

#[test]
fn point_on_edge_extension_removes_vertex() {
    let mut hull = IncrementalHull::from_points([p(0, 0), p(1, 0), p(1, 1), p(0, 1)], GeomCfg::default());
    assert!(hull.add_back(p(2, 0)));
    let verts: BTreeSet<_> = hull.iter().copied().collect();
    assert_eq!(verts, BTreeSet::from([p(0, 0), p(2, 0), p(1, 1), p(0, 1)]));
    assert!(hull.is_convex());
}

#[test]
fn diameter_and_width_of_parallelogram() {
    let hull = IncrementalHull::from_points([p(0, 0), p(1, 0), p(2, 1), p(3, 1)], GeomCfg::default());
    let d = hull.diameter().unwrap();
    assert!((d.length - 10f64.sqrt()).abs() < 1e-12);
    let w = hull.min_width(ThicknessDef::Euclidean).unwrap();
    assert!((w.thickness - 1.0 / 5f64.sqrt()).abs() < 1e-12);
    let iso = hull.min_width(ThicknessDef::Isothetic).unwrap();
    assert!((iso.thickness - 0.5).abs() < 1e-12);
}

#[test]
fn parabola_grown_at_both_ends_keeps_deque_ends_on_last_inserts() {
    // every new point sees the closing edge: no scan, no rotation
    let mut hull = IncrementalHull::new(GeomCfg::default());
    hull.add_back(p(0, 0));
    for k in 1..=15 {
        assert!(hull.add_back(p(k, k * k)));
        assert_eq!(hull.verts.back(), Some(&p(k, k * k)));
        assert!(hull.add_front(p(-k, k * k)));
        assert_eq!(hull.verts.front(), Some(&p(-k, k * k)));
        assert_eq!(hull.len(), 2 * k as usize + 1);
    }
    assert!(hull.is_convex());
}

#[test]
fn float_hull_matches_integer_hull() {
    let ints = [p(0, 0), p(3, 1), p(1, 4), p(-2, 2), p(1, 1)];
    let floats: Vec<_> = ints
        .iter()
        .map(|q| Point2::new(q.x as f64, q.y as f64))
        .collect();
    let hi = IncrementalHull::from_points(ints, GeomCfg::default());
    let hf = IncrementalHull::from_points(floats, GeomCfg::default());
    assert_eq!(hi.len(), hf.len());
    let wi = hi.min_width(ThicknessDef::Euclidean).unwrap().thickness;
    let wf = hf.min_width(ThicknessDef::Euclidean).unwrap().thickness;
    assert!((wi - wf).abs() < 1e-12);
}

fn brute_min_width(hull: &[Point2<i64>], points: &[Point2<i64>]) -> f64 {
    let n = hull.len();
    (0..n)
        .map(|i| {
            let (a, b) = (hull[i], hull[(i + 1) % n]);
            points
                .iter()
                .map(|&q| distance_to_line_i(a, b, q))
                .fold(0.0, f64::max)
        })
        .fold(f64::INFINITY, f64::min)
}

fn distance_to_line_i(a: Point2<i64>, b: Point2<i64>, q: Point2<i64>) -> f64 {
    crate::geom2::distance_to_line(a, b, q)
}

fn brute_diameter(points: &[Point2<i64>]) -> f64 {
    let mut best = 0.0f64;
    for &a in points {
        for &b in points {
            best = best.max(a.distance_squared(b).sqrt());
        }
    }
    best
}

fn arb_points() -> impl Strategy<Value = Vec<Point2<i64>>> {
    prop::collection::vec((-12i64..12, -12i64..12), 1..40)
        .prop_map(|v| v.into_iter().map(|(x, y)| Point2::new(x, y)).collect())
}

proptest! {
    #[test]
    fn hull_matches_reference_for_any_insertion_order(
        pts in arb_points(),
        ends in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let hull = build(&pts, &ends);
        prop_assert!(hull.is_convex());
        let got: BTreeSet<_> = hull.iter().copied().collect();
        let want: BTreeSet<_> = reference_hull(&pts).into_iter().collect();
        prop_assert_eq!(got, want);
        for q in &pts {
            prop_assert!(hull.contains(*q));
        }
    }

    #[test]
    fn calipers_match_brute_force(pts in arb_points()) {
        let hull = IncrementalHull::from_points(pts.iter().copied(), GeomCfg::default());
        let d = hull.diameter().unwrap();
        prop_assert!((d.length - brute_diameter(&pts)).abs() < 1e-9);
        if hull.state() == HullState::Valid {
            let verts: Vec<_> = hull.iter().copied().collect();
            let w = hull.min_width(ThicknessDef::Euclidean).unwrap();
            prop_assert!((w.thickness - brute_min_width(&verts, &pts)).abs() < 1e-9);
            // every input point lies in the strip of the antipodal pair
            let strip = w.strip();
            for q in &pts {
                prop_assert!(strip.contains_point(*q, 1e-9));
            }
        }
    }
}
