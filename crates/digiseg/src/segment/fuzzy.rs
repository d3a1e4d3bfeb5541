//! Fuzzy (blurred) segment recognition with an incremental convex hull.
//!
//! A range of points is a fuzzy segment of thickness `t` when its convex hull
//! has minimal width at most `t`. The hull is updated at the end that grows,
//! and the width is re-measured by rotating calipers on the tentative hull.
//! Extensions are tried on a copy of the hull and committed only on success.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

use tracing::trace;

use super::{SegmentComputer, SegmentError};
use crate::geom2::{Coord, GeomCfg, ParallelStrip, Point2};
use crate::hull::{AntipodalPair, HullState, IncrementalHull, ThicknessDef};

/// Outcome of a tentative insertion.
enum Trial<T> {
    /// The point lies in the current hull; width is unchanged.
    Inside,
    /// The point grows the hull; the new width fits the bound.
    Grown(IncrementalHull<T>, AntipodalPair<T>),
}

/// Recognizer of fuzzy segments of bounded thickness.
#[derive(Clone, Debug)]
pub struct FuzzySegmentComputer<'a, T> {
    points: &'a [Point2<T>],
    begin: usize,
    end: usize,
    set: BTreeSet<Point2<T>>,
    hull: IncrementalHull<T>,
    antipodal: Option<AntipodalPair<T>>,
    bound: f64,
    def: ThicknessDef,
    cfg: GeomCfg,
}

impl<'a, T: Coord> FuzzySegmentComputer<'a, T> {
    /// Computer accepting hulls of width at most `thickness`.
    pub fn new(thickness: f64, cfg: GeomCfg) -> Result<Self, SegmentError> {
        if !thickness.is_finite() {
            return Err(SegmentError::config("thickness must be finite"));
        }
        if thickness <= 0.0 {
            return Err(SegmentError::config("thickness must be > 0"));
        }
        Ok(Self {
            points: &[],
            begin: 0,
            end: 0,
            set: BTreeSet::new(),
            hull: IncrementalHull::new(cfg),
            antipodal: None,
            bound: thickness,
            def: ThicknessDef::default(),
            cfg,
        })
    }

    /// Measure widths with `def` instead of the Euclidean width.
    pub fn with_thickness_def(mut self, def: ThicknessDef) -> Self {
        self.def = def;
        self
    }

    /// Number of distinct points accepted.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Distinct accepted points in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &Point2<T>> + '_ {
        self.set.iter()
    }

    /// Hull vertices in the configured winding.
    pub fn convex_hull(&self) -> Vec<Point2<T>> {
        self.hull.vertices()
    }

    /// Antipodal pair realizing the current width.
    pub fn antipodal(&self) -> Option<&AntipodalPair<T>> {
        self.antipodal.as_ref()
    }

    /// Current width of the accepted points.
    pub fn thickness(&self) -> Result<f64, SegmentError> {
        self.antipodal
            .map(|pair| pair.thickness)
            .ok_or(SegmentError::QueryBeforeReady)
    }

    pub fn thickness_bound(&self) -> f64 {
        self.bound
    }

    pub fn thickness_def(&self) -> ThicknessDef {
        self.def
    }

    /// Consistency of the internal state.
    pub fn is_valid(&self) -> bool {
        match self.antipodal {
            None => self.set.is_empty() && self.hull.state() == HullState::Empty,
            Some(pair) => {
                self.begin < self.end
                    && self.end <= self.points.len()
                    && self.hull.is_convex()
                    && pair.thickness <= self.bound + self.cfg.eps_width
                    && self.set.iter().all(|p| self.hull.contains(*p))
            }
        }
    }

    fn trial(
        &self,
        p: Point2<T>,
        insert: fn(&mut IncrementalHull<T>, Point2<T>) -> bool,
    ) -> Option<Trial<T>> {
        self.antipodal?;
        if self.set.contains(&p) || self.hull.contains(p) {
            return Some(Trial::Inside);
        }
        let mut hull = self.hull.clone();
        if !insert(&mut hull, p) {
            return Some(Trial::Inside);
        }
        let pair = hull.min_width(self.def).ok()?;
        (pair.thickness <= self.bound + self.cfg.eps_width).then_some(Trial::Grown(hull, pair))
    }

    fn commit(&mut self, p: Point2<T>, trial: Trial<T>) {
        self.set.insert(p);
        if let Trial::Grown(hull, pair) = trial {
            self.hull = hull;
            self.antipodal = Some(pair);
        }
    }

    fn back_point(&self) -> Option<Point2<T>> {
        self.points.get(self.end).copied()
    }

    fn front_point(&self) -> Option<Point2<T>> {
        self.begin.checked_sub(1).map(|i| self.points[i])
    }
}

impl<'a, T: Coord> SegmentComputer<'a, T> for FuzzySegmentComputer<'a, T> {
    type Primitive = ParallelStrip;

    fn init(&mut self, points: &'a [Point2<T>], at: usize) -> Result<(), SegmentError> {
        let p = *points.get(at).ok_or_else(|| {
            SegmentError::config(format!(
                "start index {at} outside a curve of {} points",
                points.len()
            ))
        })?;
        self.points = points;
        self.begin = at;
        self.end = at + 1;
        self.set.clear();
        self.set.insert(p);
        self.hull = IncrementalHull::new(self.cfg);
        self.hull.add_back(p);
        self.antipodal = Some(self.hull.min_width(self.def)?);
        Ok(())
    }

    fn range(&self) -> Range<usize> {
        self.begin..self.end
    }

    fn is_extendable_back(&self) -> bool {
        self.back_point()
            .and_then(|p| self.trial(p, IncrementalHull::add_back))
            .is_some()
    }

    fn is_extendable_front(&self) -> bool {
        self.front_point()
            .and_then(|p| self.trial(p, IncrementalHull::add_front))
            .is_some()
    }

    fn extend_back(&mut self) -> bool {
        let Some(p) = self.back_point() else {
            return false;
        };
        match self.trial(p, IncrementalHull::add_back) {
            Some(trial) => {
                self.commit(p, trial);
                self.end += 1;
                true
            }
            None => {
                trace!(index = self.end, bound = self.bound, "fuzzy segment refused point");
                false
            }
        }
    }

    fn extend_front(&mut self) -> bool {
        let Some(p) = self.front_point() else {
            return false;
        };
        match self.trial(p, IncrementalHull::add_front) {
            Some(trial) => {
                self.commit(p, trial);
                self.begin -= 1;
                true
            }
            None => {
                trace!(index = self.begin - 1, bound = self.bound, "fuzzy segment refused point");
                false
            }
        }
    }

    fn primitive(&self) -> Result<ParallelStrip, SegmentError> {
        self.antipodal
            .map(|pair| pair.strip())
            .ok_or(SegmentError::QueryBeforeReady)
    }
}

impl<T: Coord> fmt::Display for FuzzySegmentComputer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[FuzzySegmentComputer] range {:?}, {} points, {} hull vertices, ",
            self.range(),
            self.len(),
            self.hull.len()
        )?;
        match self.antipodal {
            Some(pair) => write!(f, "thickness {} <= {}", pair.thickness, self.bound),
            None => write!(f, "not initialized"),
        }
    }
}
