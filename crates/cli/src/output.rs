//! JSON shapes written by the commands.

use digiseg::api::{
    ArithmeticalDss, Coord, IncrementalHull, ParallelStrip, Point2, Segmented, ThicknessDef,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CurveReport<S> {
    pub name: String,
    pub points: usize,
    /// How strip thickness was bounded: `"euclidean"` or `"isothetic"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness_def: Option<&'static str>,
    pub segments: Vec<S>,
}

/// One recognized segment, tagged with the primitive kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentReport {
    Strip {
        start: usize,
        end: usize,
        normal: [f64; 2],
        direction: [f64; 2],
        mu: f64,
        width: f64,
        /// Width along the axis closest to the normal; the isothetic thickness.
        axis_width: f64,
    },
    Dss {
        start: usize,
        end: usize,
        a: i64,
        b: i64,
        mu: i64,
        omega: i64,
        first: [i64; 2],
        last: [i64; 2],
    },
}

impl From<&Segmented<ParallelStrip>> for SegmentReport {
    fn from(s: &Segmented<ParallelStrip>) -> Self {
        let n = s.primitive.normal();
        let d = s.primitive.direction();
        SegmentReport::Strip {
            start: s.range.start,
            end: s.range.end,
            normal: [n.x, n.y],
            direction: [d.x, d.y],
            mu: s.primitive.mu(),
            width: s.primitive.width(),
            axis_width: s.primitive.axis_width(),
        }
    }
}

impl From<&Segmented<ArithmeticalDss>> for SegmentReport {
    fn from(s: &Segmented<ArithmeticalDss>) -> Self {
        let dss = &s.primitive;
        SegmentReport::Dss {
            start: s.range.start,
            end: s.range.end,
            a: dss.a(),
            b: dss.b(),
            mu: dss.mu(),
            omega: dss.omega(),
            first: [dss.first().x, dss.first().y],
            last: [dss.last().x, dss.last().y],
        }
    }
}

/// Convex hull summary of one curve.
#[derive(Debug, Serialize)]
pub struct HullReport {
    pub name: String,
    pub points: usize,
    pub vertices: Vec<[f64; 2]>,
    pub diameter: Option<f64>,
    pub width: Option<f64>,
}

fn xy<T: Coord>(p: Point2<T>) -> [f64; 2] {
    [p.x.to_f64(), p.y.to_f64()]
}

impl HullReport {
    pub fn new<T: Coord>(
        name: &str,
        points: usize,
        hull: &IncrementalHull<T>,
        def: ThicknessDef,
    ) -> Self {
        Self {
            name: name.to_string(),
            points,
            vertices: hull.vertices().into_iter().map(xy).collect(),
            diameter: hull.diameter().ok().map(|d| d.length),
            width: hull.min_width(def).ok().map(|w| w.thickness),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digiseg::api::GeomCfg;
    use serde_json::json;

    #[test]
    fn dss_segment_serializes_with_kind_tag() {
        let dss = ArithmeticalDss::from_points(
            &[Point2::new(0, 0), Point2::new(1, 0), Point2::new(1, 1)],
            digiseg::api::Connectivity::Four,
        )
        .unwrap();
        let report = SegmentReport::from(&Segmented {
            range: 3..6,
            primitive: dss,
        });
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["kind"], "dss");
        assert_eq!(value["start"], 3);
        assert_eq!(value["a"], 1);
        assert_eq!(value["b"], 1);
        assert_eq!(value["last"], json!([1, 1]));
    }

    #[test]
    fn strip_segment_serializes_geometry() {
        let strip = ParallelStrip::from_antipodal(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 0.5),
        );
        let report = SegmentReport::from(&Segmented {
            range: 0..4,
            primitive: strip,
        });
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["kind"], "strip");
        assert_eq!(value["width"], 0.5);
        assert_eq!(value["axis_width"], 0.5);
        assert_eq!(value["direction"], json!([1.0, 0.0]));
    }

    #[test]
    fn diagonal_strip_reports_axis_width() {
        // band between y = x and y = x - 1: Euclidean 1/sqrt(2), vertical gap 1
        let strip = ParallelStrip::from_antipodal(
            Point2::new(0, 0),
            Point2::new(3, 3),
            Point2::new(1, 0),
        );
        let report = SegmentReport::from(&Segmented {
            range: 0..3,
            primitive: strip,
        });
        let SegmentReport::Strip {
            width, axis_width, ..
        } = report
        else {
            panic!("expected a strip");
        };
        assert!((width - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert!((axis_width - 1.0).abs() < 1e-12);
    }

    #[test]
    fn thickness_def_is_omitted_for_dss_curves() {
        let report = CurveReport::<SegmentReport> {
            name: "c".to_string(),
            points: 0,
            thickness_def: None,
            segments: Vec::new(),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("thickness_def").is_none());
    }

    #[test]
    fn empty_hull_report_has_no_measures() {
        let hull = IncrementalHull::<i64>::new(GeomCfg::default());
        let report = HullReport::new("empty", 0, &hull, ThicknessDef::Euclidean);
        assert!(report.vertices.is_empty());
        assert_eq!(report.diameter, None);
        assert_eq!(report.width, None);
    }
}
