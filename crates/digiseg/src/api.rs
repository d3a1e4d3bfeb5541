//! Curated API surface.
//!
//! Prefer these re-exports in binaries and examples; internal module paths
//! are free to change.

// Primitives and predicates
pub use crate::geom2::{
    distance_to_line, isothetic_distance_to_line, orient2d, orientation, Coord, GeomCfg, Line2,
    Orientation, ParallelStrip, Point2, Winding,
};
// Incremental hull
pub use crate::hull::{AntipodalPair, Diameter, HullError, HullState, IncrementalHull, ThicknessDef};
// Segment computers
pub use crate::segment::{
    dsl_subsegment, ArithmeticalDss, Connectivity, Dsl, DssComputer, FuzzySegmentComputer,
    SegmentComputer, SegmentError,
};
// Drivers
pub use crate::decompose::{
    decompose, greedy_decomposition, maximal_segment_at, GreedyDecomposition, Segmented,
};
// Curve sources
pub use crate::curve::rand::{digital_line, noisy_line, point_cloud, random_walk, NoisyLineCfg};
pub use crate::curve::{FreemanChain, FreemanError};
