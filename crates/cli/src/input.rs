//! Curve loading: JSON point lists and Freeman chains.
//!
//! Accepted JSON shapes
//! - `{"curves": [{"name": "c0", "points": [[x, y], ...]}, ...]}`
//! - `[[x, y], ...]` (a single unnamed curve)
//!
//! Curves whose coordinates are all integral run on the exact `i64` path;
//! any fractional coordinate switches the whole curve to `f64`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use digiseg::api::{FreemanChain, Point2};
use serde::Deserialize;

/// Largest magnitude below which every integer is exactly representable in `f64`.
const EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

#[derive(Deserialize)]
#[serde(untagged)]
enum InputDoc {
    Curves { curves: Vec<CurveDoc> },
    Bare(Vec<[f64; 2]>),
}

#[derive(Deserialize)]
struct CurveDoc {
    #[serde(default)]
    name: Option<String>,
    points: Vec<[f64; 2]>,
}

/// Point sequence in the numeric domain chosen for it.
#[derive(Clone, Debug, PartialEq)]
pub enum Coords {
    Int(Vec<Point2<i64>>),
    Float(Vec<Point2<f64>>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub name: String,
    pub coords: Coords,
}

impl Curve {
    pub fn len(&self) -> usize {
        match &self.coords {
            Coords::Int(p) => p.len(),
            Coords::Float(p) => p.len(),
        }
    }

    pub fn is_integral(&self) -> bool {
        matches!(self.coords, Coords::Int(_))
    }
}

fn classify(name: &str, raw: Vec<[f64; 2]>) -> Result<Coords> {
    if let Some(i) = raw.iter().position(|[x, y]| !x.is_finite() || !y.is_finite()) {
        bail!("curve {name}: point {i} has a non-finite coordinate");
    }
    let integral = raw
        .iter()
        .flatten()
        .all(|v| v.fract() == 0.0 && v.abs() < EXACT_F64_INT);
    Ok(if integral {
        Coords::Int(
            raw.into_iter()
                .map(|[x, y]| Point2::new(x as i64, y as i64))
                .collect(),
        )
    } else {
        Coords::Float(raw.into_iter().map(|[x, y]| Point2::new(x, y)).collect())
    })
}

pub fn parse_json(text: &str) -> Result<Vec<Curve>> {
    let doc: InputDoc = serde_json::from_str(text).context("parsing curve JSON")?;
    let docs = match doc {
        InputDoc::Curves { curves } => curves,
        InputDoc::Bare(points) => vec![CurveDoc { name: None, points }],
    };
    docs.into_iter()
        .enumerate()
        .map(|(i, c)| {
            let name = c.name.unwrap_or_else(|| format!("curve{i}"));
            let coords = classify(&name, c.points)?;
            Ok(Curve { name, coords })
        })
        .collect()
}

pub fn load_json(path: &Path) -> Result<Vec<Curve>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_json(&text).with_context(|| format!("loading curves from {}", path.display()))
}

pub fn from_freeman(text: &str) -> Result<Curve> {
    let chain = FreemanChain::parse(text).context("parsing Freeman chain")?;
    Ok(Curve {
        name: "freeman".to_string(),
        coords: Coords::Int(chain.points()),
    })
}
