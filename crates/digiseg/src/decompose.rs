//! Greedy decomposition of a curve into maximal segments.
//!
//! Purpose
//! - Cut a point sequence into consecutive segments, each grown at its back
//!   until the segment computer refuses the next point.
//! - The next segment starts at the first refused point, so the ranges
//!   partition the input: no overlap, no gap, union `0..n`.
//!
//! Why this design
//! - The driver is an iterator over `Result<Segmented<_>, _>`; callers stream
//!   segments or collect them with [`decompose`].
//! - A fresh computer is drawn from a factory for every segment, so drivers
//!   are generic over the recognizer (fuzzy strips, arithmetical DSS).
//!
//! Code cross-refs: `segment::SegmentComputer`, `segment::FuzzySegmentComputer`,
//! `segment::DssComputer`

use std::marker::PhantomData;
use std::ops::Range;

use tracing::{debug, trace};

use crate::geom2::{Coord, Point2};
use crate::segment::{SegmentComputer, SegmentError};

/// A primitive tagged with the indices of the points it covers.
#[derive(Clone, Debug, PartialEq)]
pub struct Segmented<P> {
    pub range: Range<usize>,
    pub primitive: P,
}

impl<P> Segmented<P> {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Iterator yielding the segments of a greedy decomposition.
pub struct GreedyDecomposition<'a, T, S, F> {
    points: &'a [Point2<T>],
    cursor: usize,
    factory: F,
    _computer: PhantomData<fn() -> S>,
}

impl<'a, T, S, F> GreedyDecomposition<'a, T, S, F> {
    /// Index of the first point not yet covered.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Greedy decomposition of `points`, one computer from `factory` per segment.
pub fn greedy_decomposition<'a, T, S, F>(
    points: &'a [Point2<T>],
    factory: F,
) -> GreedyDecomposition<'a, T, S, F>
where
    T: Coord,
    S: SegmentComputer<'a, T>,
    F: FnMut() -> S,
{
    GreedyDecomposition {
        points,
        cursor: 0,
        factory,
        _computer: PhantomData,
    }
}

impl<'a, T, S, F> Iterator for GreedyDecomposition<'a, T, S, F>
where
    T: Coord,
    S: SegmentComputer<'a, T>,
    F: FnMut() -> S,
{
    type Item = Result<Segmented<S::Primitive>, SegmentError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.points.len() {
            return None;
        }
        let mut computer = (self.factory)();
        if let Err(e) = computer.init(self.points, self.cursor) {
            self.cursor = self.points.len();
            return Some(Err(e));
        }
        while computer.extend_back() {}
        let range = computer.range();
        debug_assert_eq!(range.start, self.cursor);
        self.cursor = range.end;
        trace!(start = range.start, end = range.end, "segment closed");
        Some(computer.primitive().map(|primitive| Segmented { range, primitive }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.points.len() - self.cursor;
        (usize::from(left > 0), Some(left))
    }
}

/// All segments of the greedy decomposition of `points`.
pub fn decompose<'a, T, S, F>(
    points: &'a [Point2<T>],
    factory: F,
) -> Result<Vec<Segmented<S::Primitive>>, SegmentError>
where
    T: Coord,
    S: SegmentComputer<'a, T>,
    F: FnMut() -> S,
{
    let segments = greedy_decomposition(points, factory).collect::<Result<Vec<_>, _>>()?;
    debug!(
        points = points.len(),
        segments = segments.len(),
        "greedy decomposition done"
    );
    Ok(segments)
}

/// Segment grown from `points[at]` alternately at both ends until neither
/// end accepts another point.
pub fn maximal_segment_at<'a, T, S>(
    points: &'a [Point2<T>],
    at: usize,
    mut computer: S,
) -> Result<Segmented<S::Primitive>, SegmentError>
where
    T: Coord,
    S: SegmentComputer<'a, T>,
{
    computer.init(points, at)?;
    loop {
        let back = computer.extend_back();
        let front = computer.extend_front();
        if !back && !front {
            break;
        }
    }
    let range = computer.range();
    trace!(at, start = range.start, end = range.end, "maximal segment");
    Ok(Segmented {
        range,
        primitive: computer.primitive()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::FreemanChain;
    use crate::geom2::GeomCfg;
    use crate::segment::{Connectivity, DssComputer, FuzzySegmentComputer};
    use proptest::prelude::*;

    fn assert_partition<P>(segments: &[Segmented<P>], n: usize) {
        let mut next = 0;
        for s in segments {
            assert_eq!(s.range.start, next);
            assert!(!s.is_empty());
            next = s.range.end;
        }
        assert_eq!(next, n);
    }

    #[test]
    fn empty_curve_has_no_segment() {
        let points: Vec<Point2<i64>> = Vec::new();
        let segs = decompose(&points, || DssComputer::new(Connectivity::Four)).unwrap();
        assert!(segs.is_empty());
    }

    #[test]
    fn freeman_square_splits_at_corners() {
        // 3x3 square, counter-clockwise from the origin
        let chain = FreemanChain::parse("0 0 000111222333").unwrap();
        let points = chain.points();
        let segs = decompose(&points, || DssComputer::new(Connectivity::Four)).unwrap();
        assert_partition(&segs, points.len());
        // the bottom side takes one step up; the right-top turn is one DSS
        let lens: Vec<_> = segs.iter().map(Segmented::len).collect();
        assert_eq!(lens, vec![5, 5, 3]);
    }

    #[test]
    fn fuzzy_decomposition_of_a_zigzag() {
        let points: Vec<_> = [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (4, 6), (4, 7), (4, 8)]
            .into_iter()
            .map(|(x, y)| Point2::new(x, y))
            .collect();
        let proto = FuzzySegmentComputer::new(1.0, GeomCfg::default()).unwrap();
        let segs = decompose(&points, || proto.clone()).unwrap();
        assert_partition(&segs, points.len());
        assert_eq!(segs[0].range, 0..5);
        assert_eq!(segs[1].range, 5..8);
        assert_eq!(segs[1].primitive.width(), 0.0);
    }

    #[test]
    fn maximal_segment_grows_both_ways() {
        let points: Vec<_> = [(0, 5), (1, 0), (2, 0), (3, 0), (4, 0), (5, 3)]
            .into_iter()
            .map(|(x, y)| Point2::new(x, y))
            .collect();
        let seg = maximal_segment_at(&points, 2, DssComputer::new(Connectivity::Four));
        let seg = seg.unwrap();
        assert_eq!(seg.range, 1..5);
        assert_eq!(seg.primitive.a(), 0);
        assert!(maximal_segment_at(&points, 6, DssComputer::default()).is_err());
    }

    proptest! {
        #[test]
        fn greedy_ranges_partition_the_curve(
            steps in prop::collection::vec(0u8..4, 0..200),
            thickness in 0.5f64..4.0,
        ) {
            let codes: String = steps.iter().map(|c| char::from(b'0' + c)).collect();
            let chain = FreemanChain::parse(&format!("0 0 {codes}")).unwrap();
            let points = chain.points();

            let proto = FuzzySegmentComputer::new(thickness, GeomCfg::default()).unwrap();
            let fuzzy = decompose(&points, || proto.clone()).unwrap();
            assert_partition(&fuzzy, points.len());
            for s in &fuzzy {
                for p in &points[s.range.clone()] {
                    prop_assert!(s.primitive.contains_point(*p, 1e-9));
                    prop_assert!(s.primitive.width() <= thickness + 1e-9);
                }
            }

            let dss = decompose(&points, || DssComputer::new(Connectivity::Four)).unwrap();
            assert_partition(&dss, points.len());
            for s in &dss {
                for p in &points[s.range.clone()] {
                    prop_assert!(s.primitive.contains(*p));
                }
            }
        }
    }
}
