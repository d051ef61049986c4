//! Structured squircle outline construction.
//!
//! The outline is built as a segment list first and serialized in a single
//! pass, so the serialized form never needs whitespace or quoting fix-up
//! passes afterwards.

use crate::fmt::push_number;
use crate::geom::{Point, RadiusPair, Size, point};

/// One SVG path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CurveTo {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
}

/// An ordered list of path segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    segments: Vec<PathSegment>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn move_to(&mut self, to: Point) {
        self.segments.push(PathSegment::MoveTo(to));
    }

    pub fn line_to(&mut self, to: Point) {
        self.segments.push(PathSegment::LineTo(to));
    }

    pub fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.segments.push(PathSegment::CurveTo { ctrl1, ctrl2, to });
    }

    /// Serializes to a single-line SVG `d` string suitable for attribute
    /// embedding: segments joined by single spaces, coordinates as `x,y`.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let mut buf = ryu_js::Buffer::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match *segment {
                PathSegment::MoveTo(to) => {
                    out.push_str("M ");
                    push_point(&mut out, to, &mut buf);
                }
                PathSegment::LineTo(to) => {
                    out.push_str("L ");
                    push_point(&mut out, to, &mut buf);
                }
                PathSegment::CurveTo { ctrl1, ctrl2, to } => {
                    out.push_str("C ");
                    push_point(&mut out, ctrl1, &mut buf);
                    out.push(' ');
                    push_point(&mut out, ctrl2, &mut buf);
                    out.push(' ');
                    push_point(&mut out, to, &mut buf);
                }
            }
        }
        out
    }
}

fn push_point(out: &mut String, p: Point, buf: &mut ryu_js::Buffer) {
    push_number(out, p.x, buf);
    out.push(',');
    push_number(out, p.y, buf);
}

/// Builds the squircle outline: a closed contour starting at the top of the
/// left edge and proceeding clockwise through four corners, each rendered as
/// a cubic Bezier whose control points sit at distance `radii.inner` from
/// the curve's endpoints and whose apex reaches `radii.outer` from the true
/// rectangle corner.
pub fn squircle_path(size: Size, radii: RadiusPair) -> PathData {
    let w = size.width;
    let h = size.height;
    let RadiusPair {
        inner: r1,
        outer: r2,
    } = radii;

    let mut path = PathData::new();
    path.move_to(point(0.0, r2));
    path.curve_to(point(0.0, r1), point(r1, 0.0), point(r2, 0.0));
    path.line_to(point(w - r2, 0.0));
    path.curve_to(point(w - r1, 0.0), point(w, r1), point(w, r2));
    path.line_to(point(w, h - r2));
    path.curve_to(point(w, h - r1), point(w - r1, h), point(w - r2, h));
    path.line_to(point(r2, h));
    path.curve_to(point(r1, h), point(0.0, h - r1), point(0.0, h - r2));
    path.line_to(point(0.0, r2));
    path
}

/// Normalizes the radius pair and serializes the outline in one call.
///
/// Total for any numeric input; degenerate values produce a degenerate (but
/// syntactically valid) path rather than an error.
pub fn squircle_path_svg(width: f64, height: f64, r1: f64, r2: f64) -> String {
    squircle_path(
        crate::geom::size(width, height),
        RadiusPair::normalized(r1, r2),
    )
    .to_svg()
}
