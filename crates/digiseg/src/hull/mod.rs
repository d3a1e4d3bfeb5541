//! Incremental convex hull with insertion at both ends of a deque.
//!
//! Purpose
//! - Maintain the convex hull of the points accepted by a segment computer
//!   while the segment grows at its front or at its back.
//! - Answer diameter and minimal-width queries by rotating calipers.
//!
//! Model
//! - Vertices live in a `VecDeque`, counter-clockwise, strictly convex; the
//!   closing edge `back → front` is implicit.
//! - An insertion first tests the closing edge. When it is visible from the
//!   new point, offending vertices are popped from both ends and the point is
//!   pushed (Melkman's update, amortized O(1)). Otherwise the hull is scanned
//!   for a visible edge and the deque is rotated so that edge closes it.
//! - The scan costs O(h) for a hull of h vertices, and after the rotation the
//!   deque ends no longer hold the last points inserted at each end. The
//!   amortized O(1) bound therefore holds only while new points see the
//!   closing edge, e.g. a convex arc grown counter-clockwise at the back or
//!   clockwise at the front; a general curve pays O(h) per insertion.
//! - Points on the boundary are absorbed without changing the hull. A point
//!   on the extension of an edge removes the vertex it passes, so no three
//!   consecutive vertices are ever collinear.
//! - Until three non-collinear points have been seen the hull is a point or a
//!   segment (`HullState::Initializing`) stored as its extreme points.
//!
//! References
//! - A. Melkman, "On-line construction of the convex hull of a simple
//!   polyline", IPL 25 (1987).
//! - G. Toussaint, "Solving geometric problems with the rotating calipers" (1983).
//! - Code cross-refs: `geom2::orientation`, `calipers::{diameter, min_width}`

mod calipers;

use std::collections::VecDeque;
use std::fmt;

use crate::geom2::{dot_sign, orientation, Coord, GeomCfg, Orientation, Point2, Winding};

pub use calipers::{AntipodalPair, Diameter, ThicknessDef};

/// Lifecycle of an [`IncrementalHull`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullState {
    /// No point yet.
    Empty,
    /// A single point or a collinear run (two extreme points).
    Initializing,
    /// A convex polygon with at least three vertices.
    Valid,
}

/// Errors surfaced by hull queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullError {
    /// The query needs at least one point.
    Empty,
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::Empty => write!(f, "convex hull has no point yet"),
        }
    }
}

impl std::error::Error for HullError {}

/// End of the deque receiving a new vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum End {
    Front,
    Back,
}

/// Convex hull maintained under insertions at both ends.
#[derive(Clone, Debug)]
pub struct IncrementalHull<T> {
    verts: VecDeque<Point2<T>>,
    state: HullState,
    cfg: GeomCfg,
}

impl<T: Coord> Default for IncrementalHull<T> {
    fn default() -> Self {
        Self::new(GeomCfg::default())
    }
}

impl<T: Coord> IncrementalHull<T> {
    pub fn new(cfg: GeomCfg) -> Self {
        Self {
            verts: VecDeque::new(),
            state: HullState::Empty,
            cfg,
        }
    }

    /// Hull of `points`, inserted at the back in order.
    pub fn from_points(points: impl IntoIterator<Item = Point2<T>>, cfg: GeomCfg) -> Self {
        let mut hull = Self::new(cfg);
        for p in points {
            hull.add_back(p);
        }
        hull
    }

    #[inline]
    pub fn state(&self) -> HullState {
        self.state
    }

    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    /// Number of hull vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Insert `p` at the back end. Returns `true` if the hull changed.
    pub fn add_back(&mut self, p: Point2<T>) -> bool {
        self.add(p, End::Back)
    }

    /// Insert `p` at the front end. Returns `true` if the hull changed.
    pub fn add_front(&mut self, p: Point2<T>) -> bool {
        self.add(p, End::Front)
    }

    /// Hull vertices in the configured winding, starting at the front vertex.
    pub fn vertices(&self) -> Vec<Point2<T>> {
        let mut out: Vec<_> = self.verts.iter().copied().collect();
        if self.cfg.winding == Winding::Clockwise && out.len() > 2 {
            out[1..].reverse();
        }
        out
    }

    /// Vertices in internal (counter-clockwise) order.
    pub fn iter(&self) -> impl Iterator<Item = &Point2<T>> + '_ {
        self.verts.iter()
    }

    /// True if `p` lies inside or on the boundary of the hull.
    pub fn contains(&self, p: Point2<T>) -> bool {
        let eps = self.cfg.eps_orient;
        match self.state {
            HullState::Empty => false,
            HullState::Initializing => {
                let a = self.verts[0];
                let b = *self.verts.back().unwrap_or(&a);
                if a == b {
                    return a == p;
                }
                orientation(a, b, p, eps) == Orientation::Collinear
                    && dot_sign(a, b, p, eps).is_ge()
                    && dot_sign(b, a, p, eps).is_ge()
            }
            HullState::Valid => (0..self.verts.len()).all(|i| {
                let (a, b) = self.edge(i);
                orientation(a, b, p, eps) != Orientation::Right
            }),
        }
    }

    /// Checks the stored invariant: every consecutive triple turns left.
    pub fn is_convex(&self) -> bool {
        let n = self.verts.len();
        match self.state {
            HullState::Empty => n == 0,
            HullState::Initializing => n == 1 || (n == 2 && self.verts[0] != self.verts[1]),
            HullState::Valid => {
                n >= 3
                    && (0..n).all(|i| {
                        let (a, b) = self.edge(i);
                        let c = self.verts[(i + 2) % n];
                        orientation(a, b, c, self.cfg.eps_orient) == Orientation::Left
                    })
            }
        }
    }

    /// Farthest pair of hull vertices.
    pub fn diameter(&self) -> Result<Diameter<T>, HullError> {
        match self.state {
            HullState::Empty => Err(HullError::Empty),
            HullState::Initializing => {
                let a = self.verts[0];
                let b = *self.verts.back().unwrap_or(&a);
                Ok(Diameter::new(a, b))
            }
            HullState::Valid => Ok(calipers::diameter(&self.verts)),
        }
    }

    /// Antipodal edge/vertex pair realizing the minimal thickness under `def`.
    pub fn min_width(&self, def: ThicknessDef) -> Result<AntipodalPair<T>, HullError> {
        match self.state {
            HullState::Empty => Err(HullError::Empty),
            HullState::Initializing => {
                let a = self.verts[0];
                let b = *self.verts.back().unwrap_or(&a);
                Ok(AntipodalPair {
                    edge: (a, b),
                    vertex: a,
                    thickness: 0.0,
                })
            }
            HullState::Valid => Ok(calipers::min_width(&self.verts, def)),
        }
    }

    #[inline]
    fn edge(&self, i: usize) -> (Point2<T>, Point2<T>) {
        let n = self.verts.len();
        (self.verts[i], self.verts[(i + 1) % n])
    }

    fn add(&mut self, p: Point2<T>, end: End) -> bool {
        let changed = match self.state {
            HullState::Empty => {
                self.verts.push_back(p);
                self.state = HullState::Initializing;
                true
            }
            HullState::Initializing => self.add_to_run(p, end),
            HullState::Valid => self.add_to_polygon(p, end),
        };
        debug_assert!(self.is_convex(), "hull lost convexity: {:?}", self.verts);
        changed
    }

    /// Insertion while all points seen so far are collinear.
    fn add_to_run(&mut self, p: Point2<T>, end: End) -> bool {
        let eps = self.cfg.eps_orient;
        let a = self.verts[0];
        if self.verts.len() == 1 {
            if p == a {
                return false;
            }
            self.push(p, end);
            return true;
        }
        let b = self.verts[1];
        match orientation(a, b, p, eps) {
            Orientation::Collinear => {
                if dot_sign(a, b, p, eps).is_lt() {
                    // beyond a
                    self.verts[0] = p;
                    true
                } else if dot_sign(b, a, p, eps).is_lt() {
                    // beyond b
                    self.verts[1] = p;
                    true
                } else {
                    false
                }
            }
            turn => {
                // Counter-clockwise triangle; `p` sits at the requested end.
                let (u, v) = if turn == Orientation::Left { (a, b) } else { (b, a) };
                self.verts.clear();
                match end {
                    End::Back => self.verts.extend([u, v, p]),
                    End::Front => self.verts.extend([p, u, v]),
                }
                self.state = HullState::Valid;
                true
            }
        }
    }

    fn add_to_polygon(&mut self, p: Point2<T>, end: End) -> bool {
        let eps = self.cfg.eps_orient;
        let n = self.verts.len();
        let closing_visible =
            orientation(self.verts[n - 1], self.verts[0], p, eps) == Orientation::Right;
        if !closing_visible {
            let visible = (0..n - 1).find(|&i| {
                orientation(self.verts[i], self.verts[i + 1], p, eps) == Orientation::Right
            });
            match visible {
                // Inside or on the boundary.
                None => return false,
                Some(i) => self.verts.rotate_left(i + 1),
            }
        }
        // The closing edge is visible: drop every vertex whose incident edge
        // on that side does not keep `p` strictly to its left.
        while self.verts.len() >= 3 {
            let k = self.verts.len();
            if orientation(self.verts[k - 2], self.verts[k - 1], p, eps) == Orientation::Left {
                break;
            }
            self.verts.pop_back();
        }
        while self.verts.len() >= 3 {
            if orientation(self.verts[0], self.verts[1], p, eps) == Orientation::Left {
                break;
            }
            self.verts.pop_front();
        }
        self.push(p, end);
        true
    }

    #[inline]
    fn push(&mut self, p: Point2<T>, end: End) {
        match end {
            End::Back => self.verts.push_back(p),
            End::Front => self.verts.push_front(p),
        }
    }
}

#[cfg(test)]
mod tests;
