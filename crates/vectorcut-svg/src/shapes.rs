//! Basic shapes and their polyline approximations.

use crate::flatten::{ellipse_points, Flattening};
use crate::path::PathData;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use vectorcut_core::Point2D;

/// The recognized element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rect,
    Circle,
    Ellipse,
    Line,
    Polyline,
    Polygon,
    Path,
    /// Only built programmatically as a [`Shape::Star`]; SVG has no
    /// `<star>` element, so [`ShapeKind::from_tag`] never returns it.
    Star,
}

impl ShapeKind {
    /// Maps an element's local name to a shape kind, ignoring ASCII case.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "rect" => Some(Self::Rect),
            "circle" => Some(Self::Circle),
            "ellipse" => Some(Self::Ellipse),
            "line" => Some(Self::Line),
            "polyline" => Some(Self::Polyline),
            "polygon" => Some(Self::Polygon),
            "path" => Some(Self::Path),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Line => "line",
            Self::Polyline => "polyline",
            Self::Polygon => "polygon",
            Self::Path => "path",
            Self::Star => "star",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A drawable shape in its own coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        center: Point2D,
        radius: f64,
    },
    Ellipse {
        center: Point2D,
        rx: f64,
        ry: f64,
    },
    Line {
        start: Point2D,
        end: Point2D,
    },
    /// Open polyline.
    Polyline(Vec<Point2D>),
    /// Closed polygon; the first vertex is repeated at the end when flattened.
    Polygon(Vec<Point2D>),
    Path(PathData),
    /// A star with `points` tips alternating between the two radii.
    Star {
        center: Point2D,
        outer_radius: f64,
        inner_radius: f64,
        points: u32,
    },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rect { .. } => ShapeKind::Rect,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Ellipse { .. } => ShapeKind::Ellipse,
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Polyline(_) => ShapeKind::Polyline,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Path(_) => ShapeKind::Path,
            Shape::Star { .. } => ShapeKind::Star,
        }
    }

    /// Flattens the shape into an ordered point list.
    pub fn points(&self, flattening: &Flattening) -> Vec<Point2D> {
        match self {
            Shape::Rect {
                x,
                y,
                width,
                height,
            } => rect_points(*x, *y, *width, *height),
            Shape::Circle { center, radius } => {
                ellipse_points(*center, *radius, *radius, flattening.ellipse_segments)
            }
            Shape::Ellipse { center, rx, ry } => {
                ellipse_points(*center, *rx, *ry, flattening.ellipse_segments)
            }
            Shape::Line { start, end } => vec![*start, *end],
            Shape::Polyline(points) => points.clone(),
            Shape::Polygon(points) => polygon_points(points),
            Shape::Path(path) => path.points(flattening),
            Shape::Star {
                center,
                outer_radius,
                inner_radius,
                points,
            } => star_points(*center, *outer_radius, *inner_radius, *points),
        }
    }
}

/// Corners of a rectangle, clockwise from the origin, closed.
pub fn rect_points(x: f64, y: f64, width: f64, height: f64) -> Vec<Point2D> {
    vec![
        Point2D::new(x, y),
        Point2D::new(x + width, y),
        Point2D::new(x + width, y + height),
        Point2D::new(x, y + height),
        Point2D::new(x, y),
    ]
}

/// Closes a vertex list by repeating its first point.
pub fn polygon_points(vertices: &[Point2D]) -> Vec<Point2D> {
    let mut points = vertices.to_vec();
    if let Some(first) = vertices.first() {
        points.push(*first);
    }
    points
}

/// Star outline with tips on `outer_radius`, the first at angle zero.
///
/// Fewer than two tips produces no points.
pub fn star_points(
    center: Point2D,
    outer_radius: f64,
    inner_radius: f64,
    tips: u32,
) -> Vec<Point2D> {
    if tips < 2 {
        return Vec::new();
    }

    let step = PI / tips as f64;
    let mut points: Vec<Point2D> = (0..tips * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            let angle = i as f64 * step;
            Point2D::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect();

    if let Some(first) = points.first().copied() {
        points.push(first);
    }
    points
}

/// Parses a `points` attribute into coordinate pairs.
///
/// Values are separated by whitespace or commas and taken two at a time.
/// A pair with an unparsable member is dropped and a trailing odd value is
/// ignored.
pub fn parse_points_list(value: &str) -> Vec<Point2D> {
    let tokens: Vec<&str> = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();

    tokens
        .chunks_exact(2)
        .filter_map(|pair| {
            let x = pair[0].parse::<f64>().ok()?;
            let y = pair[1].parse::<f64>().ok()?;
            Some(Point2D::new(x, y))
        })
        .collect()
}
