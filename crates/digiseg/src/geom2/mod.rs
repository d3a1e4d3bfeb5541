//! 2D primitives for digital segment recognition.
//!
//! Purpose
//! - One point type over exact (`i32`, `i64`) or floating (`f64`) coordinates,
//!   with the orientation predicate as the single source of geometric truth.
//! - The `ParallelStrip` primitive returned by fuzzy segment recognition.
//!
//! Why a numeric trait
//! - Exact and floating paths share every algorithm; only `Coord` decides how
//!   determinants are accumulated and when they count as zero.
//!
//! Code cross-refs: `Coord`, `Point2`, `GeomCfg`, `orientation`, `ParallelStrip`

pub mod predicates;
mod strip;
mod types;

pub use predicates::{
    distance_to_line, dot_sign, isothetic_distance_to_line, orient2d, orientation, Orientation,
};
pub use strip::{Line2, ParallelStrip};
pub use types::{Coord, GeomCfg, Point2, Winding};
