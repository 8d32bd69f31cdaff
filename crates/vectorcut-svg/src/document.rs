//! SVG document walking.
//!
//! [`SvgParser`] visits the element tree below the `<svg>` root, turns each
//! recognized shape element into a [`SvgElementData`] and flattens group
//! transforms into the points of their descendants.
//!
//! Element-level problems (unknown tags, bad path data, bad attributes) are
//! logged and recovered locally. Only document-level problems are errors.

use crate::error::{SvgError, SvgResult};
use crate::flatten::Flattening;
use crate::path::PathData;
use crate::shapes::{parse_points_list, Shape, ShapeKind};
use crate::style::SvgStyle;
use crate::transform::Transform;
use roxmltree::{Document, Node, ParsingOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};
use vectorcut_core::{Bounds2D, Point2D};

/// One styled, fully transformed shape from a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgElementData {
    pub points: Vec<Point2D>,
    pub style: SvgStyle,
    /// Local name of the source element, as written.
    pub element_type: String,
}

impl SvgElementData {
    pub fn bounds(&self) -> Option<Bounds2D> {
        bounds_of(&self.points)
    }
}

/// Min/max box over a point list; `None` when empty.
pub fn bounds_of(points: &[Point2D]) -> Option<Bounds2D> {
    Bounds2D::from_points(points)
}

/// Concatenates the points of every element in document order.
pub fn flatten_elements(elements: &[SvgElementData]) -> Vec<Point2D> {
    elements
        .iter()
        .flat_map(|e| e.points.iter().copied())
        .collect()
}

fn parse_document(text: &str) -> SvgResult<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(text, options).map_err(|e| SvgError::MalformedXml(e.to_string()))
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Returns true when `text` is well-formed XML with an `<svg>` root.
pub fn is_valid_svg(text: &str) -> bool {
    parse_document(strip_bom(text))
        .map(|doc| doc.root_element().tag_name().name() == "svg")
        .unwrap_or(false)
}

/// File form of [`is_valid_svg`]; false when the file cannot be read.
pub fn is_valid_svg_file(path: impl AsRef<Path>) -> bool {
    std::fs::read(path.as_ref())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .is_some_and(|text| is_valid_svg(&text))
}

/// Stateless SVG-to-geometry converter.
#[derive(Debug, Clone, Default)]
pub struct SvgParser {
    flattening: Flattening,
}

impl SvgParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flattening(flattening: Flattening) -> Self {
        Self { flattening }
    }

    pub fn flattening(&self) -> &Flattening {
        &self.flattening
    }

    /// Reads and parses an SVG file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> SvgResult<Vec<SvgElementData>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SvgError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path)?;
        let elements = self.parse_bytes(&bytes)?;
        info!(
            "Parsed {} elements from {}",
            elements.len(),
            path.display()
        );
        Ok(elements)
    }

    /// Parses UTF-8 encoded SVG bytes.
    pub fn parse_bytes(&self, bytes: &[u8]) -> SvgResult<Vec<SvgElementData>> {
        let text = std::str::from_utf8(bytes).map_err(|e| SvgError::InvalidEncoding(e.to_string()))?;
        self.parse_str(text)
    }

    /// Parses SVG markup.
    pub fn parse_str(&self, text: &str) -> SvgResult<Vec<SvgElementData>> {
        let doc = parse_document(strip_bom(text))?;
        let root = doc.root_element();
        let root_name = root.tag_name().name();
        if root_name != "svg" {
            return Err(SvgError::NotSvg {
                root: root_name.to_string(),
            });
        }

        Ok(self.visit_children(root))
    }

    pub fn parse_file_to_points(&self, path: impl AsRef<Path>) -> SvgResult<Vec<Point2D>> {
        Ok(flatten_elements(&self.parse_file(path)?))
    }

    pub fn parse_str_to_points(&self, text: &str) -> SvgResult<Vec<Point2D>> {
        Ok(flatten_elements(&self.parse_str(text)?))
    }

    /// Flattens a bare path `d` value. Blank input yields no points.
    pub fn parse_path(&self, d: &str) -> SvgResult<Vec<Point2D>> {
        if d.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(PathData::parse(d)?.points(&self.flattening))
    }

    fn visit_children(&self, node: Node<'_, '_>) -> Vec<SvgElementData> {
        node.children()
            .filter(|child| child.is_element())
            .flat_map(|child| self.visit(child))
            .collect()
    }

    fn visit(&self, node: Node<'_, '_>) -> Vec<SvgElementData> {
        let tag = node.tag_name().name();

        if tag.eq_ignore_ascii_case("g") {
            let transform = node_transform(node);
            let mut children = self.visit_children(node);
            if !transform.is_identity() {
                for child in &mut children {
                    child.points = transform.apply_all(&child.points);
                }
            }
            return children;
        }

        let Some(kind) = ShapeKind::from_tag(tag) else {
            debug!("Skipping unsupported element <{}>", tag);
            return Vec::new();
        };

        let Some(shape) = shape_from_node(kind, node) else {
            return Vec::new();
        };

        let points = shape.points(&self.flattening);
        if points.is_empty() {
            debug!("Element <{}> produced no geometry", tag);
            return Vec::new();
        }

        let style = SvgStyle::from_attributes(
            node.attribute("fill"),
            node.attribute("stroke"),
            node.attribute("stroke-width"),
        );
        let transform = node_transform(node);

        vec![SvgElementData {
            points: transform.apply_all(&points),
            style,
            element_type: tag.to_string(),
        }]
    }
}

fn node_transform(node: Node<'_, '_>) -> Transform {
    node.attribute("transform")
        .map(Transform::parse)
        .unwrap_or_default()
}

/// Numeric attribute; missing or malformed values read as zero.
fn attr_f64(node: Node<'_, '_>, name: &str) -> f64 {
    node.attribute(name)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn shape_from_node(kind: ShapeKind, node: Node<'_, '_>) -> Option<Shape> {
    let shape = match kind {
        ShapeKind::Rect => Shape::Rect {
            x: attr_f64(node, "x"),
            y: attr_f64(node, "y"),
            width: attr_f64(node, "width"),
            height: attr_f64(node, "height"),
        },
        ShapeKind::Circle => Shape::Circle {
            center: Point2D::new(attr_f64(node, "cx"), attr_f64(node, "cy")),
            radius: attr_f64(node, "r"),
        },
        ShapeKind::Ellipse => Shape::Ellipse {
            center: Point2D::new(attr_f64(node, "cx"), attr_f64(node, "cy")),
            rx: attr_f64(node, "rx"),
            ry: attr_f64(node, "ry"),
        },
        ShapeKind::Line => Shape::Line {
            start: Point2D::new(attr_f64(node, "x1"), attr_f64(node, "y1")),
            end: Point2D::new(attr_f64(node, "x2"), attr_f64(node, "y2")),
        },
        ShapeKind::Polygon => Shape::Polygon(parse_points_list(node.attribute("points")?)),
        ShapeKind::Polyline => Shape::Polyline(parse_points_list(node.attribute("points")?)),
        ShapeKind::Path => {
            let d = node.attribute("d")?;
            match PathData::parse(d) {
                Ok(path) => Shape::Path(path),
                Err(e) => {
                    warn!("Ignoring <path> with malformed data: {}", e);
                    return None;
                }
            }
        }
        // from_tag never yields Star
        ShapeKind::Star => return None,
    };
    Some(shape)
}
