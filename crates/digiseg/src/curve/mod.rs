//! Curve sources: Freeman chain codes and seeded random curves.
//!
//! Segment computers read `&[Point2<_>]`; these helpers produce such slices
//! for examples, tests and benchmarks.

mod freeman;
pub mod rand;

pub use freeman::{FreemanChain, FreemanError};
