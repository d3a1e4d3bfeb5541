//! Digital segment recognition: fuzzy segments, arithmetical DSS and greedy
//! curve decomposition.
//!
//! Layout
//! - `geom2`: points over exact or floating coordinates, the orientation
//!   predicate, the `ParallelStrip` primitive.
//! - `hull`: convex hull under insertions at both ends, rotating calipers.
//! - `segment`: the `SegmentComputer` contract and its recognizers.
//! - `decompose`: greedy decomposition and maximal segments.
//! - `curve`: Freeman chains and seeded random curves.
//!
//! API Policy
//! - The curated surface lives in [`api`] and [`prelude`]; module paths may
//!   move between versions.

pub mod api;
pub mod curve;
pub mod decompose;
pub mod geom2;
pub mod hull;
pub mod segment;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{GeomCfg, Point2};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::decompose::{decompose, greedy_decomposition, maximal_segment_at, Segmented};
    pub use crate::geom2::{orientation, Coord, GeomCfg, Orientation, ParallelStrip, Point2, Winding};
    pub use crate::hull::{IncrementalHull, ThicknessDef};
    pub use crate::segment::{
        ArithmeticalDss, Connectivity, DssComputer, FuzzySegmentComputer, SegmentComputer,
        SegmentError,
    };
    pub use nalgebra::Vector2 as Vec2;
}
