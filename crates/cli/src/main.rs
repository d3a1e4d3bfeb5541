mod input;
mod output;
mod provenance;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use digiseg::api::{
    decompose, dsl_subsegment, maximal_segment_at, Connectivity, Coord, Dsl, DssComputer,
    FuzzySegmentComputer, GeomCfg, IncrementalHull, Point2, SegmentComputer, Segmented,
    ThicknessDef,
};
use serde::Serialize;
use serde_json::json;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use input::{Coords, Curve};
use output::{CurveReport, HullReport, SegmentReport};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "digiseg")]
#[command(about = "Segmentation of digital curves into fuzzy segments and DSS")]
struct Cmd {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Greedy decomposition of every input curve
    Decompose {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        recognizer: Recognizer,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Maximal segment around one point index of every input curve
    Maximal {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        recognizer: Recognizer,
        #[arg(long)]
        at: usize,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Convex hull, diameter and width of every input curve
    Hull {
        #[command(flatten)]
        source: Source,
        #[arg(long)]
        isothetic: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Minimal characteristics of a subsegment of the DSL 0 <= ax - by + mu < b
    Dsl {
        #[arg(long)]
        a: i64,
        #[arg(long)]
        b: i64,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        mu: i64,
        #[arg(long, allow_hyphen_values = true)]
        xa: i64,
        #[arg(long, allow_hyphen_values = true)]
        xb: i64,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Where the curves come from.
#[derive(Args, Clone, Debug)]
struct Source {
    /// JSON file: {"curves": [{"name": .., "points": [[x, y], ..]}]} or [[x, y], ..]
    #[arg(long, conflicts_with = "freeman", required_unless_present = "freeman")]
    input: Option<PathBuf>,
    /// Freeman chain "x y codes" (codes 0..3 = +x, +y, -x, -y)
    #[arg(long, allow_hyphen_values = true)]
    freeman: Option<String>,
}

impl Source {
    fn load(&self) -> Result<Vec<Curve>> {
        match (&self.input, &self.freeman) {
            (Some(path), _) => input::load_json(path),
            (None, Some(chain)) => Ok(vec![input::from_freeman(chain)?]),
            (None, None) => bail!("either --input or --freeman is required"),
        }
    }

    fn describe(&self) -> String {
        match (&self.input, &self.freeman) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(chain)) => format!("freeman:{chain}"),
            (None, None) => String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
enum Algo {
    /// Fuzzy segments of bounded thickness
    Fuzzy,
    /// Arithmetical digital straight segments (integer curves only)
    Dss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
enum ConnectivityArg {
    Four,
    Eight,
}

impl From<ConnectivityArg> for Connectivity {
    fn from(c: ConnectivityArg) -> Self {
        match c {
            ConnectivityArg::Four => Connectivity::Four,
            ConnectivityArg::Eight => Connectivity::Eight,
        }
    }
}

/// Segment computer selection and its parameters.
#[derive(Args, Clone, Debug, Serialize)]
struct Recognizer {
    #[arg(long, value_enum, default_value_t = Algo::Fuzzy)]
    algo: Algo,
    /// Thickness bound of fuzzy segments
    #[arg(long, default_value_t = 1.0)]
    thickness: f64,
    /// Orientation tolerance for floating coordinates
    #[arg(long, default_value_t = 1e-12)]
    eps: f64,
    /// Measure fuzzy thickness along the axes instead of perpendicularly
    #[arg(long)]
    isothetic: bool,
    /// Step adjacency of DSS
    #[arg(long, value_enum, default_value_t = ConnectivityArg::Four)]
    connectivity: ConnectivityArg,
}

impl Recognizer {
    fn cfg(&self) -> GeomCfg {
        GeomCfg {
            eps_orient: self.eps,
            eps_width: self.eps,
            ..GeomCfg::default()
        }
    }

    fn thickness_def(&self) -> ThicknessDef {
        if self.isothetic {
            ThicknessDef::Isothetic
        } else {
            ThicknessDef::Euclidean
        }
    }

    /// Thickness definition recorded next to fuzzy segments.
    fn thickness_label(&self) -> Option<&'static str> {
        match (self.algo, self.isothetic) {
            (Algo::Dss, _) => None,
            (Algo::Fuzzy, false) => Some("euclidean"),
            (Algo::Fuzzy, true) => Some("isothetic"),
        }
    }

    fn fuzzy<'a, T: Coord>(&self) -> Result<FuzzySegmentComputer<'a, T>> {
        Ok(FuzzySegmentComputer::new(self.thickness, self.cfg())
            .context("building fuzzy segment computer")?
            .with_thickness_def(self.thickness_def()))
    }

    fn dss<'a>(&self) -> DssComputer<'a> {
        DssComputer::new(self.connectivity.into())
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Decompose {
            source,
            recognizer,
            out,
        } => run_decompose(&source, &recognizer, out.as_deref()),
        Action::Maximal {
            source,
            recognizer,
            at,
            out,
        } => run_maximal(&source, &recognizer, at, out.as_deref()),
        Action::Hull {
            source,
            isothetic,
            out,
        } => run_hull(&source, isothetic, out.as_deref()),
        Action::Dsl { a, b, mu, xa, xb } => run_dsl(a, b, mu, xa, xb),
        Action::Report => report(),
    }
}

fn run_decompose(source: &Source, rec: &Recognizer, out: Option<&Path>) -> Result<()> {
    let curves = source.load()?;
    tracing::info!(
        source = %source.describe(),
        curves = curves.len(),
        algo = ?rec.algo,
        "decompose"
    );
    let reports = decompose_curves(&curves, rec)?;
    let params = json!({ "recognizer": rec });
    emit(&reports, out, Payload::new("decompose", params).with_input(source.describe()))
}

fn run_maximal(source: &Source, rec: &Recognizer, at: usize, out: Option<&Path>) -> Result<()> {
    let curves = source.load()?;
    tracing::info!(source = %source.describe(), curves = curves.len(), at, "maximal");
    let reports = curves
        .iter()
        .map(|curve| maximal_one(curve, rec, at))
        .collect::<Result<Vec<_>>>()?;
    let params = json!({ "at": at, "recognizer": rec });
    emit(&reports, out, Payload::new("maximal", params).with_input(source.describe()))
}

fn run_hull(source: &Source, isothetic: bool, out: Option<&Path>) -> Result<()> {
    let curves = source.load()?;
    tracing::info!(source = %source.describe(), curves = curves.len(), isothetic, "hull");
    let def = if isothetic {
        ThicknessDef::Isothetic
    } else {
        ThicknessDef::Euclidean
    };
    let reports: Vec<HullReport> = curves
        .iter()
        .map(|curve| match &curve.coords {
            Coords::Int(pts) => hull_report(&curve.name, pts, def),
            Coords::Float(pts) => hull_report(&curve.name, pts, def),
        })
        .collect();
    let params = json!({ "isothetic": isothetic });
    emit(&reports, out, Payload::new("hull", params).with_input(source.describe()))
}

fn run_dsl(a: i64, b: i64, mu: i64, xa: i64, xb: i64) -> Result<()> {
    let dsl = Dsl::new(a, b, mu).context("invalid DSL")?;
    let sub = dsl_subsegment(&dsl, xa, xb).context("computing DSL subsegment")?;
    tracing::info!(%dsl, xa, xb, a = sub.a, b = sub.b, mu = sub.mu, "dsl subsegment");
    let doc = json!({
        "line": { "a": dsl.a, "b": dsl.b, "mu": dsl.mu },
        "range": [xa, xb],
        "subsegment": { "a": sub.a, "b": sub.b, "mu": sub.mu },
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::code_rev(),
        "digiseg_version": digiseg::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Decompose every curve with a fresh computer per segment.
fn decompose_curves(
    curves: &[Curve],
    rec: &Recognizer,
) -> Result<Vec<CurveReport<SegmentReport>>> {
    curves
        .iter()
        .map(|curve| -> Result<CurveReport<SegmentReport>> {
            let segments = match (&curve.coords, rec.algo) {
                (Coords::Int(pts), Algo::Fuzzy) => fuzzy_segments(pts, rec)?,
                (Coords::Float(pts), Algo::Fuzzy) => fuzzy_segments(pts, rec)?,
                (Coords::Int(pts), Algo::Dss) => to_reports(&decompose(pts, || rec.dss())?),
                (Coords::Float(_), Algo::Dss) => {
                    bail!("curve {}: DSS recognition needs integer coordinates", curve.name)
                }
            };
            tracing::debug!(
                curve = %curve.name,
                points = curve.len(),
                integral = curve.is_integral(),
                segments = segments.len(),
                "decomposed"
            );
            Ok(CurveReport {
                name: curve.name.clone(),
                points: curve.len(),
                thickness_def: rec.thickness_label(),
                segments,
            })
        })
        .collect()
}

fn fuzzy_segments<T: Coord>(pts: &[Point2<T>], rec: &Recognizer) -> Result<Vec<SegmentReport>> {
    let proto = rec.fuzzy::<T>()?;
    Ok(to_reports(&decompose(pts, || proto.clone())?))
}

fn to_reports<P>(segments: &[Segmented<P>]) -> Vec<SegmentReport>
where
    for<'s> SegmentReport: From<&'s Segmented<P>>,
{
    segments.iter().map(SegmentReport::from).collect()
}

fn maximal_one(curve: &Curve, rec: &Recognizer, at: usize) -> Result<CurveReport<SegmentReport>> {
    let segment = match (&curve.coords, rec.algo) {
        (Coords::Int(pts), Algo::Fuzzy) => maximal_report(pts, at, rec.fuzzy::<i64>()?),
        (Coords::Float(pts), Algo::Fuzzy) => maximal_report(pts, at, rec.fuzzy::<f64>()?),
        (Coords::Int(pts), Algo::Dss) => maximal_report(pts, at, rec.dss()),
        (Coords::Float(_), Algo::Dss) => {
            bail!("curve {}: DSS recognition needs integer coordinates", curve.name)
        }
    }
    .with_context(|| format!("curve {}: maximal segment at {at}", curve.name))?;
    Ok(CurveReport {
        name: curve.name.clone(),
        points: curve.len(),
        thickness_def: rec.thickness_label(),
        segments: vec![segment],
    })
}

fn maximal_report<'a, T, S>(pts: &'a [Point2<T>], at: usize, computer: S) -> Result<SegmentReport>
where
    T: Coord,
    S: SegmentComputer<'a, T>,
    for<'s> SegmentReport: From<&'s Segmented<S::Primitive>>,
{
    let seg = maximal_segment_at(pts, at, computer)?;
    Ok(SegmentReport::from(&seg))
}

fn hull_report<T: Coord>(name: &str, pts: &[Point2<T>], def: ThicknessDef) -> HullReport {
    let hull = IncrementalHull::from_points(pts.iter().copied(), GeomCfg::default());
    HullReport::new(name, pts.len(), &hull, def)
}

/// Print `value` as JSON, or write it to `out` with a provenance sidecar.
fn emit<V: Serialize>(value: &V, out: Option<&Path>, payload: Payload) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    let Some(out) = out else {
        println!("{text}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %sidecar.display(), "wrote");
    Ok(())
}
