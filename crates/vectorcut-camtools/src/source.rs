//! Geometry inputs accepted by the toolpath generator.

use vectorcut_core::Point2D;
use vectorcut_svg::{DrawableObject, Flattening, SvgElementData};

/// One continuous cut: rapid to the first point, cut through the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    /// Human-readable origin, written as a comment.
    pub label: String,
    pub points: Vec<Point2D>,
}

/// Anything that can be broken into contours to cut.
pub trait GeometrySource {
    fn contours(&self, flattening: &Flattening) -> Vec<Contour>;
}

/// One contour per element.
impl GeometrySource for [SvgElementData] {
    fn contours(&self, _flattening: &Flattening) -> Vec<Contour> {
        self.iter()
            .map(|element| Contour {
                label: format!("{} ({} points)", element.element_type, element.points.len()),
                points: element.points.clone(),
            })
            .collect()
    }
}

/// One contour per visible object; hidden objects are skipped.
impl GeometrySource for [DrawableObject] {
    fn contours(&self, flattening: &Flattening) -> Vec<Contour> {
        self.iter()
            .filter(|object| object.visible)
            .map(|object| Contour {
                label: format!(
                    "{} (Type: {}) at X{} Y{}",
                    object.name,
                    object.shape.kind(),
                    object.position.x,
                    object.position.y
                ),
                points: object.geometry_points(flattening),
            })
            .collect()
    }
}

/// A bare point list is a single contour.
impl GeometrySource for [Point2D] {
    fn contours(&self, _flattening: &Flattening) -> Vec<Contour> {
        if self.is_empty() {
            return Vec::new();
        }
        vec![Contour {
            label: "point sequence".to_string(),
            points: self.to_vec(),
        }]
    }
}

impl<T> GeometrySource for Vec<T>
where
    [T]: GeometrySource,
{
    fn contours(&self, flattening: &Flattening) -> Vec<Contour> {
        self.as_slice().contours(flattening)
    }
}
