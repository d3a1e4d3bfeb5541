//! Basic 2D types and tolerances shared by predicates, hulls and segment computers.
//!
//! - `Coord`: numeric domain of input coordinates (exact integers or `f64`).
//! - `Point2`: immutable, totally ordered point value.
//! - `GeomCfg`: centralizes epsilons and the hull winding used on output.
//!
//! Code cross-refs: `predicates::{orient2d, orientation}`, `hull::IncrementalHull`

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

/// Numeric domain of point coordinates.
///
/// Integer implementations evaluate determinants in a wider integer type, so
/// orientation tests are exact for coordinates below `2^62` (`i64`) and for all
/// `i32` values. The `f64` implementation compares determinants against the
/// `eps` handed to [`Coord::det_sign`].
pub trait Coord: Copy + fmt::Debug + fmt::Display + PartialOrd + Send + Sync + 'static {
    /// Accumulator holding cross and dot products of coordinate differences.
    type Det: Copy + fmt::Debug + PartialOrd;

    /// True when predicates on this type are exact (no epsilon involved).
    const EXACT: bool;

    /// `(b - a) × (c - a)`: positive when `c` is left of the directed line `a → b`.
    fn cross(a: Point2<Self>, b: Point2<Self>, c: Point2<Self>) -> Self::Det;

    /// `(b - a) · (c - a)`.
    fn dot(a: Point2<Self>, b: Point2<Self>, c: Point2<Self>) -> Self::Det;

    /// Sign of a determinant; `eps` is ignored by exact types.
    fn det_sign(det: Self::Det, eps: f64) -> Ordering;

    fn det_to_f64(det: Self::Det) -> f64;

    fn to_f64(self) -> f64;

    /// Total order used for point sets (`f64::total_cmp` for floats).
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Canonical representative (maps `-0.0` to `0.0`).
    fn canonical(self) -> Self {
        self
    }
}

macro_rules! impl_exact_coord {
    ($t:ty, $wide:ty) => {
        impl Coord for $t {
            type Det = $wide;
            const EXACT: bool = true;

            #[inline]
            fn cross(a: Point2<Self>, b: Point2<Self>, c: Point2<Self>) -> $wide {
                let (ux, uy) = (b.x as $wide - a.x as $wide, b.y as $wide - a.y as $wide);
                let (vx, vy) = (c.x as $wide - a.x as $wide, c.y as $wide - a.y as $wide);
                ux * vy - uy * vx
            }

            #[inline]
            fn dot(a: Point2<Self>, b: Point2<Self>, c: Point2<Self>) -> $wide {
                let (ux, uy) = (b.x as $wide - a.x as $wide, b.y as $wide - a.y as $wide);
                let (vx, vy) = (c.x as $wide - a.x as $wide, c.y as $wide - a.y as $wide);
                ux * vx + uy * vy
            }

            #[inline]
            fn det_sign(det: $wide, _eps: f64) -> Ordering {
                det.cmp(&0)
            }

            #[inline]
            fn det_to_f64(det: $wide) -> f64 {
                det as f64
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    };
}

impl_exact_coord!(i32, i64);
impl_exact_coord!(i64, i128);

impl Coord for f64 {
    type Det = f64;
    const EXACT: bool = false;

    #[inline]
    fn cross(a: Point2<Self>, b: Point2<Self>, c: Point2<Self>) -> f64 {
        (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
    }

    #[inline]
    fn dot(a: Point2<Self>, b: Point2<Self>, c: Point2<Self>) -> f64 {
        (b.x - a.x) * (c.x - a.x) + (b.y - a.y) * (c.y - a.y)
    }

    #[inline]
    fn det_sign(det: f64, eps: f64) -> Ordering {
        if det.abs() <= eps {
            Ordering::Equal
        } else if det > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }

    #[inline]
    fn det_to_f64(det: f64) -> f64 {
        det
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }

    #[inline]
    fn canonical(self) -> Self {
        // -0.0 + 0.0 == +0.0
        self + 0.0
    }
}

/// A point of the digital (or real) plane.
///
/// Points are ordered by `x` and then by `y`; equality agrees with that order,
/// so `-0.0` and `0.0` are the same point once built through [`Point2::new`].
#[derive(Clone, Copy, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point2<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        debug_assert!(x.to_f64().is_finite() && y.to_f64().is_finite());
        Self {
            x: x.canonical(),
            y: y.canonical(),
        }
    }

    /// Coordinates as a real vector (for strip geometry and distances).
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x.to_f64(), self.y.to_f64())
    }

    /// Squared Euclidean distance, evaluated in `f64`.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        (other.to_vector() - self.to_vector()).norm_squared()
    }
}

impl<T: Coord> Ord for Point2<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl<T: Coord> PartialOrd for Point2<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Coord> Eq for Point2<T> {}

impl<T: fmt::Debug> fmt::Debug for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl<T: fmt::Display> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Coord> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Coord> From<[T; 2]> for Point2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Vertex order used when hull vertices are handed out.
///
/// Hulls are maintained counter-clockwise internally; `Clockwise` only
/// reverses the exported sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Winding {
    #[default]
    CounterClockwise,
    Clockwise,
}

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Orientation determinants with `|det| <= eps_orient` count as collinear (`f64` only).
    pub eps_orient: f64,
    /// Slack added to the thickness bound when testing extensions.
    pub eps_width: f64,
    pub winding: Winding,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_orient: 1e-12,
            eps_width: 1e-12,
            winding: Winding::CounterClockwise,
        }
    }
}
