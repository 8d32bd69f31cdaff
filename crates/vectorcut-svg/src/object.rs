//! Placed shapes with identity and visibility.

use crate::flatten::Flattening;
use crate::shapes::Shape;
use uuid::Uuid;
use vectorcut_core::{Bounds2D, Point2D};

/// A shape placed on the work area.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableObject {
    pub id: Uuid,
    pub name: String,
    /// Offset added to every point of the shape.
    pub position: Point2D,
    /// Hidden objects are skipped by toolpath generation.
    pub visible: bool,
    pub shape: Shape,
}

impl DrawableObject {
    /// Creates a visible object at the origin with a fresh id.
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            position: Point2D::ZERO,
            visible: true,
            shape,
        }
    }

    pub fn with_position(mut self, position: Point2D) -> Self {
        self.position = position;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Flattened shape points offset by `position`.
    pub fn geometry_points(&self, flattening: &Flattening) -> Vec<Point2D> {
        self.shape
            .points(flattening)
            .into_iter()
            .map(|p| p + self.position)
            .collect()
    }

    pub fn bounds(&self, flattening: &Flattening) -> Option<Bounds2D> {
        Bounds2D::from_points(&self.geometry_points(flattening))
    }

    /// Returns a copy moved by `offset`. The copy keeps the same id.
    pub fn translate(&self, offset: Point2D) -> Self {
        Self {
            position: self.position + offset,
            ..self.clone()
        }
    }

    /// Bounds-based hit test.
    pub fn contains(&self, point: &Point2D, flattening: &Flattening) -> bool {
        self.bounds(flattening)
            .is_some_and(|bounds| bounds.contains(point))
    }
}
