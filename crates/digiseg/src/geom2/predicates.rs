//! Orientation predicate and its distance variants.
//!
//! Every hull and strip-width computation in this crate goes through these
//! functions; they are the only place where coordinates are compared
//! geometrically.

use std::cmp::Ordering;

use super::types::{Coord, Point2};

/// Position of a point relative to a directed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Left,
    Right,
    Collinear,
}

impl Orientation {
    #[inline]
    fn from_sign(sign: Ordering) -> Self {
        match sign {
            Ordering::Greater => Orientation::Left,
            Ordering::Less => Orientation::Right,
            Ordering::Equal => Orientation::Collinear,
        }
    }
}

/// Signed orientation determinant of `(a, b, c)`.
///
/// Positive if `c` is left of `a → b`, negative if right, zero if collinear.
/// Its magnitude is twice the area of the triangle.
#[inline]
pub fn orient2d<T: Coord>(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> T::Det {
    T::cross(a, b, c)
}

/// Classified orientation; `eps` only matters for floating coordinates.
#[inline]
pub fn orientation<T: Coord>(a: Point2<T>, b: Point2<T>, c: Point2<T>, eps: f64) -> Orientation {
    Orientation::from_sign(T::det_sign(T::cross(a, b, c), eps))
}

/// Sign of `(b - a) · (c - a)`.
#[inline]
pub fn dot_sign<T: Coord>(a: Point2<T>, b: Point2<T>, c: Point2<T>, eps: f64) -> Ordering {
    T::det_sign(T::dot(a, b, c), eps)
}

/// Perpendicular distance from `p` to the line through `a` and `b`.
///
/// Falls back to the point distance `|p - a|` when `a == b`.
pub fn distance_to_line<T: Coord>(a: Point2<T>, b: Point2<T>, p: Point2<T>) -> f64 {
    let len = a.distance_squared(b).sqrt();
    if len == 0.0 {
        return a.distance_squared(p).sqrt();
    }
    T::det_to_f64(T::cross(a, b, p)).abs() / len
}

/// Axis-parallel distance from `p` to the line through `a` and `b`: the
/// smaller of the horizontal and vertical gaps (infinite along an axis the
/// line never crosses).
pub fn isothetic_distance_to_line<T: Coord>(a: Point2<T>, b: Point2<T>, p: Point2<T>) -> f64 {
    let det = T::det_to_f64(T::cross(a, b, p)).abs();
    let dx = (b.x.to_f64() - a.x.to_f64()).abs();
    let dy = (b.y.to_f64() - a.y.to_f64()).abs();
    let vertical = if dx > 0.0 { det / dx } else { f64::INFINITY };
    let horizontal = if dy > 0.0 { det / dy } else { f64::INFINITY };
    let d = vertical.min(horizontal);
    if d.is_finite() {
        d
    } else {
        a.distance_squared(p).sqrt()
    }
}
