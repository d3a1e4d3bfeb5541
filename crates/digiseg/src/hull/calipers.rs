//! Rotating-calipers queries on a strictly convex, counter-clockwise polygon.
//!
//! Both scans walk the edges once while the antipodal vertex only moves
//! forward, so each query is O(h) for h hull vertices.

use std::collections::VecDeque;

use crate::geom2::{
    distance_to_line, isothetic_distance_to_line, Coord, ParallelStrip, Point2,
};

/// How the thickness of an edge/vertex pair is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThicknessDef {
    /// Perpendicular distance from the vertex to the edge line.
    #[default]
    Euclidean,
    /// Smaller of the horizontal and vertical gaps between vertex and edge line.
    Isothetic,
}

impl ThicknessDef {
    #[inline]
    pub fn measure<T: Coord>(self, a: Point2<T>, b: Point2<T>, s: Point2<T>) -> f64 {
        match self {
            ThicknessDef::Euclidean => distance_to_line(a, b, s),
            ThicknessDef::Isothetic => isothetic_distance_to_line(a, b, s),
        }
    }
}

/// Farthest pair of hull vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Diameter<T> {
    pub a: Point2<T>,
    pub b: Point2<T>,
    pub length: f64,
}

impl<T: Coord> Diameter<T> {
    pub fn new(a: Point2<T>, b: Point2<T>) -> Self {
        Self {
            a,
            b,
            length: a.distance_squared(b).sqrt(),
        }
    }
}

/// Hull edge `(p, q)`, its farthest vertex, and their thickness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AntipodalPair<T> {
    pub edge: (Point2<T>, Point2<T>),
    pub vertex: Point2<T>,
    pub thickness: f64,
}

impl<T: Coord> AntipodalPair<T> {
    /// Strip bounded by the edge line and the parallel through the vertex.
    pub fn strip(&self) -> ParallelStrip {
        ParallelStrip::from_antipodal(self.edge.0, self.edge.1, self.vertex)
    }
}

/// Advance `j` to the vertex farthest from the line `a → b`.
#[inline]
fn advance<T: Coord>(v: &VecDeque<Point2<T>>, a: Point2<T>, b: Point2<T>, mut j: usize) -> usize {
    let n = v.len();
    while T::cross(a, b, v[(j + 1) % n]) > T::cross(a, b, v[j]) {
        j = (j + 1) % n;
    }
    j
}

pub(super) fn diameter<T: Coord>(v: &VecDeque<Point2<T>>) -> Diameter<T> {
    let n = v.len();
    debug_assert!(n >= 3);
    let mut best = Diameter::new(v[0], v[1]);
    let mut j = 1;
    for i in 0..n {
        let a = v[i];
        let b = v[(i + 1) % n];
        j = advance(v, a, b, j);
        let mut candidates = vec![v[j]];
        // An edge parallel to `a → b` makes both of its endpoints antipodal.
        let next = v[(j + 1) % n];
        if T::cross(a, b, next) == T::cross(a, b, v[j]) {
            candidates.push(next);
        }
        for s in candidates {
            for cand in [Diameter::new(a, s), Diameter::new(b, s)] {
                if cand.length > best.length {
                    best = cand;
                }
            }
        }
    }
    best
}

pub(super) fn min_width<T: Coord>(v: &VecDeque<Point2<T>>, def: ThicknessDef) -> AntipodalPair<T> {
    let n = v.len();
    debug_assert!(n >= 3);
    let mut best = AntipodalPair {
        edge: (v[0], v[1]),
        vertex: v[0],
        thickness: f64::INFINITY,
    };
    let mut j = 1;
    for i in 0..n {
        let a = v[i];
        let b = v[(i + 1) % n];
        j = advance(v, a, b, j);
        let thickness = def.measure(a, b, v[j]);
        if thickness < best.thickness {
            best = AntipodalPair {
                edge: (a, b),
                vertex: v[j],
                thickness,
            };
        }
    }
    best
}
