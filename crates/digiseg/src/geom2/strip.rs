//! Parallel strip: the primitive recognized by the fuzzy segment computer.
//!
//! A strip is the closed set `{ p : mu <= n·p <= mu + nu }` for a unit normal
//! `n`. It is derived from an antipodal edge/vertex pair of a convex hull and
//! never mutated independently.

use std::fmt;

use nalgebra::Vector2;

use super::types::{Coord, Point2};

/// Infinite line `point + t * direction` (`direction` has unit length).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    pub point: Vector2<f64>,
    pub direction: Vector2<f64>,
}

impl Line2 {
    /// Point of the line at parameter `t`.
    #[inline]
    pub fn at(&self, t: f64) -> Vector2<f64> {
        self.point + self.direction * t
    }
}

/// Two parallel supporting lines at distance `nu`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallelStrip {
    normal: Vector2<f64>,
    mu: f64,
    nu: f64,
}

impl ParallelStrip {
    /// Strip `mu <= n·p <= mu + nu`; `normal` is rescaled to unit length.
    ///
    /// Returns `None` for a zero or non-finite normal, or a negative width.
    pub fn new(normal: Vector2<f64>, mu: f64, nu: f64) -> Option<Self> {
        let norm = normal.norm();
        if !norm.is_finite() || norm <= 0.0 || !(nu >= 0.0) || !mu.is_finite() {
            return None;
        }
        Some(Self {
            normal: normal / norm,
            mu: mu / norm,
            nu: nu / norm,
        })
    }

    /// Strip supported by the line through the edge `p → q` and by the
    /// parallel line through `s`.
    ///
    /// A degenerate edge (`p == q`) yields a horizontal strip through `p` and `s`.
    pub fn from_antipodal<T: Coord>(p: Point2<T>, q: Point2<T>, s: Point2<T>) -> Self {
        let (vp, vq, vs) = (p.to_vector(), q.to_vector(), s.to_vector());
        let edge = vq - vp;
        let len = edge.norm();
        let direction = if len > 0.0 {
            edge / len
        } else {
            Vector2::new(1.0, 0.0)
        };
        let normal = Vector2::new(-direction.y, direction.x);
        let hp = normal.dot(&vp);
        let hs = normal.dot(&vs);
        Self {
            normal,
            mu: hp.min(hs),
            nu: (hs - hp).abs(),
        }
    }

    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        self.normal
    }

    /// Unit direction of the supporting lines (normal rotated by −90°).
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(self.normal.y, -self.normal.x)
    }

    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Euclidean width.
    #[inline]
    pub fn nu(&self) -> f64 {
        self.nu
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.nu
    }

    /// Width measured along the coordinate axis closest to the normal.
    pub fn axis_width(&self) -> f64 {
        let m = self.normal.x.abs().max(self.normal.y.abs());
        self.nu / m
    }

    /// Membership with slack `eps` on both sides.
    pub fn contains(&self, p: Vector2<f64>, eps: f64) -> bool {
        let h = self.normal.dot(&p);
        h >= self.mu - eps && h <= self.mu + self.nu + eps
    }

    pub fn contains_point<T: Coord>(&self, p: Point2<T>, eps: f64) -> bool {
        self.contains(p.to_vector(), eps)
    }

    /// Supporting line `n·p = mu`.
    pub fn lower_line(&self) -> Line2 {
        Line2 {
            point: self.normal * self.mu,
            direction: self.direction(),
        }
    }

    /// Supporting line `n·p = mu + nu`.
    pub fn upper_line(&self) -> Line2 {
        Line2 {
            point: self.normal * (self.mu + self.nu),
            direction: self.direction(),
        }
    }
}

impl fmt::Display for ParallelStrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ParallelStrip] {} <= {}*x + {}*y <= {} (width {})",
            self.mu,
            self.normal.x,
            self.normal.y,
            self.mu + self.nu,
            self.nu
        )
    }
}
