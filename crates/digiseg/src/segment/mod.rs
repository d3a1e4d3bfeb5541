//! Segment computers: incremental recognizers grown one point at a time.
//!
//! Purpose
//! - A segment computer owns a contiguous range `[begin, end)` of a point
//!   slice and decides whether the next point at either end still fits the
//!   primitive it recognizes.
//! - Drivers (`decompose`) only talk to the [`SegmentComputer`] trait, so the
//!   fuzzy recognizer and the arithmetical DSS recognizer are interchangeable.
//!
//! Why this design
//! - `is_extendable_*` are pure queries on `&self`; `extend_*` either commit
//!   or leave the computer untouched. A rejected extension is a `false`, not an
//!   error: callers retry at the other end or close the segment.
//! - "back" is the end that walks forward through the slice (`points[end]`),
//!   "front" the end that walks backward (`points[begin - 1]`).
//!
//! References
//! - I. Debled-Rennesson, J.-P. Reveillès, "A linear algorithm for
//!   segmentation of digital curves", IJPRAI 9 (1995).
//! - I. Debled-Rennesson, F. Feschet, J. Rouyer-Degli, "Optimal blurred
//!   segments decomposition of noisy shapes in linear time", C&G 30 (2006).
//! - Code cross-refs: `hull::IncrementalHull`, `decompose::GreedyDecomposition`

mod dsl;
mod dss;
mod fuzzy;

use std::fmt;
use std::ops::Range;

use crate::geom2::{Coord, Point2};
use crate::hull::HullError;

pub use dsl::{dsl_subsegment, Dsl};
pub use dss::{ArithmeticalDss, Connectivity, DssComputer};
pub use fuzzy::FuzzySegmentComputer;

/// Errors raised by segment computers.
#[derive(Clone, Debug, PartialEq)]
pub enum SegmentError {
    /// Invalid parameters (thickness, start index, line characteristics).
    Configuration { reason: String },
    /// A primitive was requested before `init`.
    QueryBeforeReady,
    Hull(HullError),
}

impl SegmentError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { reason } => write!(f, "invalid configuration: {reason}"),
            Self::QueryBeforeReady => write!(f, "segment computer queried before init"),
            Self::Hull(e) => write!(f, "hull query failed: {e}"),
        }
    }
}

impl std::error::Error for SegmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Hull(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HullError> for SegmentError {
    fn from(e: HullError) -> Self {
        Self::Hull(e)
    }
}

/// Incremental recognizer over a borrowed point slice.
pub trait SegmentComputer<'a, T: Coord> {
    /// Geometric description of the recognized segment.
    type Primitive;

    /// Reset to the single point `points[at]`.
    fn init(&mut self, points: &'a [Point2<T>], at: usize) -> Result<(), SegmentError>;

    /// Indices of the slice currently covered.
    fn range(&self) -> Range<usize>;

    fn is_extendable_back(&self) -> bool;

    fn is_extendable_front(&self) -> bool;

    /// Absorb `points[end]`; returns `false` and changes nothing if it does not fit.
    fn extend_back(&mut self) -> bool;

    /// Absorb `points[begin - 1]`; returns `false` and changes nothing if it does not fit.
    fn extend_front(&mut self) -> bool;

    fn primitive(&self) -> Result<Self::Primitive, SegmentError>;
}
