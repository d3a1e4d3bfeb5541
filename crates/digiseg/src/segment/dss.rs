//! Arithmetical digital straight segments (DSS).
//!
//! A DSS with characteristics `(a, b, mu, omega)` is a connected run of digital
//! points satisfying `mu <= a*x - b*y < mu + omega`, direction vector `(b, a)`.
//! `omega = |a| + |b|` gives standard (4-connected) segments and
//! `omega = max(|a|, |b|)` naive (8-connected) ones.
//!
//! Extension follows Debled-Rennesson's update: a point whose remainder is
//! inside the band is absorbed as is; a point one unit outside (a weakly
//! exterior point) rotates the direction about the opposite leaning point;
//! anything farther is rejected. Front extension is back extension on the
//! reversed segment.

use std::fmt;
use std::ops::Range;

use super::{SegmentComputer, SegmentError};
use crate::geom2::Point2;

/// Adjacency of consecutive points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Axis steps only; standard segments.
    #[default]
    Four,
    /// Axis and diagonal steps; naive segments.
    Eight,
}

impl Connectivity {
    fn omega(self, a: i64, b: i64) -> i64 {
        match self {
            Connectivity::Four => a.abs() + b.abs(),
            Connectivity::Eight => a.abs().max(b.abs()),
        }
    }

    fn is_step(self, (dx, dy): Step) -> bool {
        match self {
            Connectivity::Four => dx.abs() + dy.abs() == 1,
            Connectivity::Eight => dx.abs().max(dy.abs()) == 1,
        }
    }

    /// Whether two distinct steps can appear in the same segment.
    fn compatible(self, s: Step, t: Step) -> bool {
        match self {
            Connectivity::Four => s.0 * t.0 + s.1 * t.1 == 0,
            Connectivity::Eight => (s.0 - t.0).abs() + (s.1 - t.1).abs() == 1,
        }
    }
}

type Step = (i64, i64);

fn gcd(mut a: i64, mut b: i64) -> i64 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Digital straight segment with its leaning points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArithmeticalDss {
    a: i64,
    b: i64,
    mu: i64,
    omega: i64,
    connectivity: Connectivity,
    first: Point2<i64>,
    last: Point2<i64>,
    /// Upper leaning points (`remainder == mu`) closest to `first` and `last`.
    uf: Point2<i64>,
    ul: Point2<i64>,
    /// Lower leaning points (`remainder == mu + omega - 1`).
    lf: Point2<i64>,
    ll: Point2<i64>,
    steps: [Option<Step>; 2],
}

impl ArithmeticalDss {
    /// Segment made of the single point `p`.
    pub fn new(p: Point2<i64>, connectivity: Connectivity) -> Self {
        Self {
            a: 0,
            b: 0,
            mu: 0,
            omega: 0,
            connectivity,
            first: p,
            last: p,
            uf: p,
            ul: p,
            lf: p,
            ll: p,
            steps: [None, None],
        }
    }

    /// Recognize `points` as one segment, or `None` if they are not one.
    pub fn from_points(points: &[Point2<i64>], connectivity: Connectivity) -> Option<Self> {
        let (&head, tail) = points.split_first()?;
        tail.iter()
            .try_fold(Self::new(head, connectivity), |dss, &p| dss.extended_last(p))
    }

    #[inline]
    pub fn a(&self) -> i64 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> i64 {
        self.b
    }

    #[inline]
    pub fn mu(&self) -> i64 {
        self.mu
    }

    #[inline]
    pub fn omega(&self) -> i64 {
        self.omega
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    pub fn first(&self) -> Point2<i64> {
        self.first
    }

    pub fn last(&self) -> Point2<i64> {
        self.last
    }

    /// Upper leaning points closest to the first and to the last point.
    pub fn upper_leaning(&self) -> (Point2<i64>, Point2<i64>) {
        (self.uf, self.ul)
    }

    /// Lower leaning points closest to the first and to the last point.
    pub fn lower_leaning(&self) -> (Point2<i64>, Point2<i64>) {
        (self.lf, self.ll)
    }

    /// Direction vector `(b, a)`; zero for a single point.
    pub fn direction(&self) -> (i64, i64) {
        (self.b, self.a)
    }

    #[inline]
    pub fn remainder(&self, p: Point2<i64>) -> i64 {
        self.a * p.x - self.b * p.y
    }

    /// True if `p` satisfies the double inequality of the supporting line.
    pub fn in_line(&self, p: Point2<i64>) -> bool {
        if self.omega == 0 {
            return p == self.first;
        }
        let r = self.remainder(p);
        self.mu <= r && r < self.mu + self.omega
    }

    /// True if `p` is in the line and between `first` and `last` along it.
    pub fn contains(&self, p: Point2<i64>) -> bool {
        if !self.in_line(p) {
            return false;
        }
        let along = |q: Point2<i64>| self.b * q.x + self.a * q.y;
        let (lo, hi) = (along(self.first), along(self.last));
        (lo.min(hi)..=lo.max(hi)).contains(&along(p))
    }

    /// The same points traversed from `last` to `first`.
    pub fn reversed(&self) -> Self {
        let neg = |s: Option<Step>| s.map(|(dx, dy)| (-dx, -dy));
        Self {
            a: -self.a,
            b: -self.b,
            mu: if self.omega == 0 {
                0
            } else {
                -self.mu - self.omega + 1
            },
            omega: self.omega,
            connectivity: self.connectivity,
            first: self.last,
            last: self.first,
            uf: self.ll,
            ul: self.lf,
            lf: self.ul,
            ll: self.uf,
            steps: [neg(self.steps[0]), neg(self.steps[1])],
        }
    }

    fn admits(&self, s: Step) -> bool {
        if !self.connectivity.is_step(s) {
            return false;
        }
        match self.steps {
            [None, _] => true,
            [Some(t), None] => t == s || self.connectivity.compatible(t, s),
            [Some(t), Some(u)] => t == s || u == s,
        }
    }

    fn with_step(mut self, s: Step) -> Self {
        match self.steps {
            [None, _] => self.steps[0] = Some(s),
            [Some(t), None] if t != s => self.steps[1] = Some(s),
            _ => {}
        }
        self
    }

    fn set_direction(&mut self, dx: i64, dy: i64) {
        let g = gcd(dx, dy);
        self.b = dx / g;
        self.a = dy / g;
        self.omega = self.connectivity.omega(self.a, self.b);
    }

    /// Segment extended by `p` after `last`, or `None` if the result is not a segment.
    pub fn extended_last(&self, p: Point2<i64>) -> Option<Self> {
        let step = (p.x - self.last.x, p.y - self.last.y);
        if !self.admits(step) {
            return None;
        }
        let mut next = self.with_step(step);
        next.last = p;
        if self.omega == 0 {
            next.set_direction(step.0, step.1);
            next.mu = next.remainder(self.first);
            next.ul = p;
            next.ll = p;
            return Some(next);
        }
        let r = self.remainder(p);
        if r == self.mu - 1 {
            // above the upper leaning line: pivot on the first upper leaning point
            next.ul = p;
            next.lf = self.ll;
            next.set_direction(p.x - self.uf.x, p.y - self.uf.y);
            next.mu = next.remainder(self.uf);
        } else if r == self.mu + self.omega {
            // below the lower leaning line: pivot on the first lower leaning point
            next.ll = p;
            next.uf = self.ul;
            next.set_direction(p.x - self.lf.x, p.y - self.lf.y);
            next.mu = next.remainder(self.lf) - next.omega + 1;
        } else if self.mu <= r && r < self.mu + self.omega {
            if r == self.mu {
                next.ul = p;
            }
            if r == self.mu + self.omega - 1 {
                next.ll = p;
            }
        } else {
            return None;
        }
        Some(next)
    }

    /// Segment extended by `p` before `first`, or `None`.
    pub fn extended_first(&self, p: Point2<i64>) -> Option<Self> {
        self.reversed().extended_last(p).map(|dss| dss.reversed())
    }
}

impl fmt::Display for ArithmeticalDss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ArithmeticalDss] {} <= {}x - {}y < {}, from {} to {}",
            self.mu,
            self.a,
            self.b,
            self.mu + self.omega,
            self.first,
            self.last
        )
    }
}

/// Segment computer recognizing arithmetical DSS over integer points.
#[derive(Clone, Debug)]
pub struct DssComputer<'a> {
    points: &'a [Point2<i64>],
    begin: usize,
    end: usize,
    connectivity: Connectivity,
    dss: Option<ArithmeticalDss>,
}

impl<'a> DssComputer<'a> {
    pub fn new(connectivity: Connectivity) -> Self {
        Self {
            points: &[],
            begin: 0,
            end: 0,
            connectivity,
            dss: None,
        }
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Number of points covered (points of a DSS are pairwise distinct).
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.dss.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point2<i64>> + '_ {
        self.points[self.begin..self.end].iter()
    }

    fn candidate_back(&self) -> Option<ArithmeticalDss> {
        let p = *self.points.get(self.end)?;
        self.dss?.extended_last(p)
    }

    fn candidate_front(&self) -> Option<ArithmeticalDss> {
        let p = self.points[self.begin.checked_sub(1)?];
        self.dss?.extended_first(p)
    }
}

impl Default for DssComputer<'_> {
    fn default() -> Self {
        Self::new(Connectivity::default())
    }
}

impl<'a> SegmentComputer<'a, i64> for DssComputer<'a> {
    type Primitive = ArithmeticalDss;

    fn init(&mut self, points: &'a [Point2<i64>], at: usize) -> Result<(), SegmentError> {
        let p = *points.get(at).ok_or_else(|| {
            SegmentError::config(format!(
                "start index {at} outside a curve of {} points",
                points.len()
            ))
        })?;
        self.points = points;
        self.begin = at;
        self.end = at + 1;
        self.dss = Some(ArithmeticalDss::new(p, self.connectivity));
        Ok(())
    }

    fn range(&self) -> Range<usize> {
        self.begin..self.end
    }

    fn is_extendable_back(&self) -> bool {
        self.candidate_back().is_some()
    }

    fn is_extendable_front(&self) -> bool {
        self.candidate_front().is_some()
    }

    fn extend_back(&mut self) -> bool {
        match self.candidate_back() {
            Some(dss) => {
                self.dss = Some(dss);
                self.end += 1;
                true
            }
            None => false,
        }
    }

    fn extend_front(&mut self) -> bool {
        match self.candidate_front() {
            Some(dss) => {
                self.dss = Some(dss);
                self.begin -= 1;
                true
            }
            None => false,
        }
    }

    fn primitive(&self) -> Result<ArithmeticalDss, SegmentError> {
        self.dss.ok_or(SegmentError::QueryBeforeReady)
    }
}
