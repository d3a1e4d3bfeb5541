//! Freeman chain codes on the 4-connected grid.
//!
//! Text form: `"x0 y0 codes"` where each code is a digit `0..=3` standing for
//! the steps `+x`, `+y`, `-x`, `-y`. The codes token may be absent.

use std::fmt;
use std::str::FromStr;

use crate::geom2::Point2;

/// Errors raised while parsing a chain code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FreemanError {
    /// Missing or malformed start coordinates, or trailing tokens.
    Syntax { reason: String },
    /// A code outside `0..=3`.
    InvalidCode { index: usize, code: char },
}

impl fmt::Display for FreemanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { reason } => write!(f, "malformed chain code: {reason}"),
            Self::InvalidCode { index, code } => {
                write!(f, "invalid Freeman code {code:?} at position {index}")
            }
        }
    }
}

impl std::error::Error for FreemanError {}

fn syntax(reason: impl Into<String>) -> FreemanError {
    FreemanError::Syntax {
        reason: reason.into(),
    }
}

/// Largest coordinate magnitude a walk may reach; keeps `i64` predicates exact.
pub const COORD_LIMIT: i64 = 1 << 62;

/// Every point of a walk of `len` unit moves from `start` stays within
/// [`COORD_LIMIT`] on both axes.
fn check_range(start: Point2<i64>, len: usize) -> Result<(), FreemanError> {
    let reach = i64::try_from(len)
        .ok()
        .and_then(|n| COORD_LIMIT.checked_sub(n))
        .filter(|r| *r >= 0)
        .ok_or_else(|| syntax(format!("chain of {len} moves is too long")))?
        .unsigned_abs();
    if start.x.unsigned_abs() > reach || start.y.unsigned_abs() > reach {
        return Err(syntax(format!(
            "start ({}, {}) lets the walk leave [-2^62, 2^62]",
            start.x, start.y
        )));
    }
    Ok(())
}

/// Start point plus a sequence of unit moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreemanChain {
    pub(super) start: Point2<i64>,
    pub(super) codes: Vec<u8>,
}

impl FreemanChain {
    pub fn new(start: Point2<i64>, codes: Vec<u8>) -> Result<Self, FreemanError> {
        if let Some(index) = codes.iter().position(|&c| c > 3) {
            return Err(FreemanError::InvalidCode {
                index,
                code: char::from_digit(u32::from(codes[index]), 36).unwrap_or('?'),
            });
        }
        check_range(start, codes.len())?;
        Ok(Self { start, codes })
    }

    pub fn parse(s: &str) -> Result<Self, FreemanError> {
        let mut tokens = s.split_whitespace();
        let mut coord = |name: &str| -> Result<i64, FreemanError> {
            let tok = tokens
                .next()
                .ok_or_else(|| syntax(format!("missing {name}")))?;
            tok.parse()
                .map_err(|_| syntax(format!("{name} is not an integer: {tok:?}")))
        };
        let x = coord("x")?;
        let y = coord("y")?;
        let codes = match tokens.next() {
            None => Vec::new(),
            Some(tok) => tok
                .chars()
                .enumerate()
                .map(|(index, code)| match code.to_digit(10) {
                    Some(d) if d <= 3 => Ok(d as u8),
                    _ => Err(FreemanError::InvalidCode { index, code }),
                })
                .collect::<Result<Vec<_>, _>>()?,
        };
        if let Some(extra) = tokens.next() {
            return Err(syntax(format!("unexpected token {extra:?}")));
        }
        let start = Point2::new(x, y);
        check_range(start, codes.len())?;
        Ok(Self { start, codes })
    }

    /// Unit displacement of a code.
    #[inline]
    pub fn step(code: u8) -> (i64, i64) {
        match code & 3 {
            0 => (1, 0),
            1 => (0, 1),
            2 => (-1, 0),
            _ => (0, -1),
        }
    }

    pub fn start(&self) -> Point2<i64> {
        self.start
    }

    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    /// Number of moves (one less than the number of points).
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Last point of the walk.
    pub fn end(&self) -> Point2<i64> {
        let (dx, dy) = self.codes.iter().fold((0, 0), |(x, y), &c| {
            let (sx, sy) = Self::step(c);
            (x + sx, y + sy)
        });
        Point2::new(self.start.x + dx, self.start.y + dy)
    }

    pub fn is_closed(&self) -> bool {
        !self.codes.is_empty() && self.end() == self.start
    }

    /// Visited points, starting point included.
    pub fn points(&self) -> Vec<Point2<i64>> {
        let mut out = Vec::with_capacity(self.codes.len() + 1);
        let mut p = self.start;
        out.push(p);
        for &c in &self.codes {
            let (dx, dy) = Self::step(c);
            p = Point2::new(p.x + dx, p.y + dy);
            out.push(p);
        }
        out
    }
}

impl FromStr for FreemanChain {
    type Err = FreemanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FreemanChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.start.x, self.start.y)?;
        for c in &self.codes {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_and_codes() {
        let chain: FreemanChain = "31 16 0123".parse().unwrap();
        assert_eq!(chain.start(), Point2::new(31, 16));
        assert_eq!(chain.len(), 4);
        let pts = chain.points();
        assert_eq!(
            pts,
            vec![
                Point2::new(31, 16),
                Point2::new(32, 16),
                Point2::new(32, 17),
                Point2::new(31, 17),
                Point2::new(31, 16),
            ]
        );
        assert!(chain.is_closed());
        assert_eq!(chain.to_string(), "31 16 0123");
    }

    #[test]
    fn missing_codes_is_a_single_point() {
        let chain = FreemanChain::parse("  -2 5 ").unwrap();
        assert!(chain.is_empty());
        assert_eq!(chain.points(), vec![Point2::new(-2, 5)]);
        assert!(!chain.is_closed());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            FreemanChain::parse("1"),
            Err(FreemanError::Syntax { .. })
        ));
        assert!(matches!(
            FreemanChain::parse("a 1 01"),
            Err(FreemanError::Syntax { .. })
        ));
        assert_eq!(
            FreemanChain::parse("0 0 0140"),
            Err(FreemanError::InvalidCode {
                index: 2,
                code: '4'
            })
        );
        assert!(matches!(
            FreemanChain::parse("0 0 01 23"),
            Err(FreemanError::Syntax { .. })
        ));
        assert!(FreemanChain::new(Point2::new(0, 0), vec![0, 7]).is_err());
    }

    #[test]
    fn rejects_starts_whose_walk_leaves_the_exact_range() {
        assert!(matches!(
            FreemanChain::parse("9223372036854775807 0 0"),
            Err(FreemanError::Syntax { .. })
        ));
        assert!(matches!(
            FreemanChain::parse("0 -9223372036854775808"),
            Err(FreemanError::Syntax { .. })
        ));
        let edge = COORD_LIMIT - 2;
        let chain = FreemanChain::new(Point2::new(edge, -edge), vec![0, 3]).unwrap();
        assert_eq!(chain.end(), Point2::new(COORD_LIMIT - 1, -COORD_LIMIT + 1));
        assert!(FreemanChain::new(Point2::new(edge, 0), vec![0, 0, 0]).is_err());
        assert!(FreemanChain::parse(&format!("{} 0 000", -edge)).is_err());
    }
}
