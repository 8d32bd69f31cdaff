//! Curve flattening.
//!
//! Curves are approximated by evenly sampling their parameter. A curve
//! sampled with `steps` produces `steps + 1` points, the first of which is
//! the curve's start point.

use lyon::geom::{self, Angle, CubicBezierSegment, QuadraticBezierSegment};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use vectorcut_core::Point2D;

/// Sample count used for Bézier curves and elliptical arcs.
pub const DEFAULT_CURVE_STEPS: usize = 100;

/// Segment count used for circles and ellipses.
pub const DEFAULT_ELLIPSE_SEGMENTS: usize = 50;

/// Resolution used when turning curves into polylines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flattening {
    /// Samples per Bézier curve or arc.
    pub curve_steps: usize,
    /// Segments per circle or ellipse.
    pub ellipse_segments: usize,
}

impl Default for Flattening {
    fn default() -> Self {
        Self {
            curve_steps: DEFAULT_CURVE_STEPS,
            ellipse_segments: DEFAULT_ELLIPSE_SEGMENTS,
        }
    }
}

fn to_lyon(p: Point2D) -> geom::Point<f64> {
    geom::point(p.x, p.y)
}

fn from_lyon(p: geom::Point<f64>) -> Point2D {
    Point2D::new(p.x, p.y)
}

/// Samples a quadratic Bézier curve.
pub fn quadratic_bezier_points(
    p0: Point2D,
    p1: Point2D,
    p2: Point2D,
    steps: usize,
) -> Vec<Point2D> {
    let curve = QuadraticBezierSegment {
        from: to_lyon(p0),
        ctrl: to_lyon(p1),
        to: to_lyon(p2),
    };
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| from_lyon(curve.sample(i as f64 / steps as f64)))
        .collect()
}

/// Samples a cubic Bézier curve.
pub fn cubic_bezier_points(
    p0: Point2D,
    p1: Point2D,
    p2: Point2D,
    p3: Point2D,
    steps: usize,
) -> Vec<Point2D> {
    let curve = CubicBezierSegment {
        from: to_lyon(p0),
        ctrl1: to_lyon(p1),
        ctrl2: to_lyon(p2),
        to: to_lyon(p3),
    };
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| from_lyon(curve.sample(i as f64 / steps as f64)))
        .collect()
}

/// An elliptical arc in SVG endpoint form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub start: Point2D,
    pub end: Point2D,
    pub rx: f64,
    pub ry: f64,
    /// Rotation of the ellipse's X axis, in degrees.
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

/// The center form of an [`ArcSegment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCenter {
    pub center: Point2D,
    /// Radii after out-of-range correction.
    pub rx: f64,
    pub ry: f64,
    /// Rotation of the ellipse's X axis, in radians.
    pub rotation: f64,
    /// Start angle, in radians.
    pub start_angle: f64,
    /// Signed angular extent, in radians.
    pub sweep_angle: f64,
}

impl ArcSegment {
    /// Converts the arc to center form.
    ///
    /// Returns `None` for degenerate arcs: identical endpoints, or a zero
    /// radius.
    pub fn to_center(&self) -> Option<ArcCenter> {
        if self.start == self.end {
            return None;
        }

        let mut rx = self.rx.abs();
        let mut ry = self.ry.abs();
        if rx == 0.0 || ry == 0.0 {
            return None;
        }

        let rotation = self.x_axis_rotation.to_radians();
        let (sin_phi, cos_phi) = rotation.sin_cos();

        // Start point in the ellipse's frame, relative to the chord midpoint.
        let dx = (self.start.x - self.end.x) / 2.0;
        let dy = (self.start.y - self.end.y) / 2.0;
        let x1p = cos_phi * dx + sin_phi * dy;
        let y1p = -sin_phi * dx + cos_phi * dy;

        let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
        if lambda > 1.0 {
            let factor = lambda.sqrt();
            rx *= factor;
            ry *= factor;
        }

        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let numerator = rx2 * ry2 - rx2 * y1p * y1p - ry2 * x1p * x1p;
        let denominator = rx2 * y1p * y1p + ry2 * x1p * x1p;
        let sign = if self.large_arc != self.sweep { 1.0 } else { -1.0 };
        let coef = sign * (numerator / denominator).max(0.0).sqrt();

        let cxp = coef * (rx * y1p / ry);
        let cyp = coef * -(ry * x1p / rx);

        let center = Point2D::new(
            cos_phi * cxp - sin_phi * cyp + (self.start.x + self.end.x) / 2.0,
            sin_phi * cxp + cos_phi * cyp + (self.start.y + self.end.y) / 2.0,
        );

        let start_angle = ((y1p - cyp) / ry).atan2((x1p - cxp) / rx);
        let end_angle = ((-y1p - cyp) / ry).atan2((-x1p - cxp) / rx);
        let mut sweep_angle = end_angle - start_angle;

        if !self.sweep && sweep_angle > 0.0 {
            sweep_angle -= 2.0 * PI;
        } else if self.sweep && sweep_angle < 0.0 {
            sweep_angle += 2.0 * PI;
        }

        Some(ArcCenter {
            center,
            rx,
            ry,
            rotation,
            start_angle,
            sweep_angle,
        })
    }

    /// Flattens the arc into `steps + 1` points.
    ///
    /// A zero-radius arc degrades to a straight segment to `end`. An arc
    /// whose endpoints coincide produces no points.
    pub fn points(&self, steps: usize) -> Vec<Point2D> {
        if self.start == self.end {
            return Vec::new();
        }

        let Some(arc) = self.to_center() else {
            return vec![self.end];
        };

        let lyon_arc = geom::Arc {
            center: to_lyon(arc.center),
            radii: geom::vector(arc.rx, arc.ry),
            x_rotation: Angle::radians(arc.rotation),
            start_angle: Angle::radians(arc.start_angle),
            sweep_angle: Angle::radians(arc.sweep_angle),
        };

        let steps = steps.max(1);
        (0..=steps)
            .map(|i| from_lyon(lyon_arc.sample(i as f64 / steps as f64)))
            .collect()
    }
}

/// Flattens an SVG elliptical arc. See [`ArcSegment::points`].
#[allow(clippy::too_many_arguments)]
pub fn arc_points(
    start: Point2D,
    end: Point2D,
    rx: f64,
    ry: f64,
    x_axis_rotation: f64,
    large_arc: bool,
    sweep: bool,
    steps: usize,
) -> Vec<Point2D> {
    ArcSegment {
        start,
        end,
        rx,
        ry,
        x_axis_rotation,
        large_arc,
        sweep,
    }
    .points(steps)
}

/// Samples an axis-aligned ellipse into `segments + 1` points, closing on
/// the start point at angle zero.
pub fn ellipse_points(center: Point2D, rx: f64, ry: f64, segments: usize) -> Vec<Point2D> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / segments as f64;
            Point2D::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
        })
        .collect()
}
