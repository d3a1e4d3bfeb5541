//! Digital straight lines and the characteristics of their subsegments.
//!
//! A naive DSL `(a, b, mu)` in the first octant is the set of points with
//! `0 <= a*x - b*y + mu < b`, i.e. `y = floor((a*x + mu) / b)`. The points of
//! the DSL between two abscissae form a DSS whose minimal characteristics are
//! in general smaller than `(a, b)`. They are found here by recognizing the
//! subsegment point by point, in time linear in its length.

use std::fmt;

use super::dss::{ArithmeticalDss, Connectivity};
use super::SegmentError;
use crate::geom2::Point2;

/// Naive digital straight line `0 <= a*x - b*y + mu < b` with `0 <= a <= b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dsl {
    pub a: i64,
    pub b: i64,
    pub mu: i64,
}

impl Dsl {
    pub fn new(a: i64, b: i64, mu: i64) -> Result<Self, SegmentError> {
        if b <= 0 {
            return Err(SegmentError::config("DSL needs b > 0"));
        }
        if a < 0 || a > b {
            return Err(SegmentError::config("DSL slope must satisfy 0 <= a <= b"));
        }
        Ok(Self { a, b, mu })
    }

    /// Ordinate of the line point at abscissa `x`.
    #[inline]
    pub fn y_at(&self, x: i64) -> i64 {
        (self.a * x + self.mu).div_euclid(self.b)
    }

    #[inline]
    pub fn point_at(&self, x: i64) -> Point2<i64> {
        Point2::new(x, self.y_at(x))
    }

    pub fn contains(&self, p: Point2<i64>) -> bool {
        let r = self.a * p.x - self.b * p.y + self.mu;
        (0..self.b).contains(&r)
    }

    /// Minimal characteristics of the points of this line with abscissa in `[xa, xb]`.
    pub fn subsegment(&self, xa: i64, xb: i64) -> Result<Dsl, SegmentError> {
        dsl_subsegment(self, xa, xb)
    }
}

impl fmt::Display for Dsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Dsl] 0 <= {}x - {}y + {} < {}", self.a, self.b, self.mu, self.b)
    }
}

/// Minimal characteristics `(a', b', mu')` of the subsegment of `dsl` between
/// the abscissae `xa` and `xb` (inclusive).
///
/// A single point yields the horizontal line `(0, 1, y)` through it.
pub fn dsl_subsegment(dsl: &Dsl, xa: i64, xb: i64) -> Result<Dsl, SegmentError> {
    if xa > xb {
        return Err(SegmentError::config(format!(
            "empty abscissa range [{xa}, {xb}]"
        )));
    }
    let start = ArithmeticalDss::new(dsl.point_at(xa), Connectivity::Eight);
    let dss = ((xa + 1)..=xb).try_fold(start, |dss, x| dss.extended_last(dsl.point_at(x)));
    // Points of a DSL always form a naive DSS.
    let dss = dss.ok_or_else(|| SegmentError::config("line points do not form a naive segment"))?;
    if dss.omega() == 0 {
        let p = dss.first();
        return Ok(Dsl {
            a: 0,
            b: 1,
            mu: p.y,
        });
    }
    // First octant: `b >= a >= 0`, so omega is `b` and the band bounds match.
    Ok(Dsl {
        a: dss.a(),
        b: dss.b(),
        mu: -dss.mu(),
    })
}
