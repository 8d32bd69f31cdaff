//! `transform` attribute parsing and application.
//!
//! Only the first `translate`, `scale` and `rotate` in an attribute are
//! honored, and they are always applied in the fixed order scale, rotate,
//! translate regardless of how they are written.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use vectorcut_core::Point2D;

/// Rotations smaller than this, in degrees, are skipped.
const MIN_ROTATION_DEG: f64 = 0.001;

/// A decomposed element transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation_deg: f64,
    pub rotation_center_x: f64,
    pub rotation_center_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn translate_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"translate\s*\(\s*([^,\s()]+)(?:(?:\s*,\s*|\s+)([^,\s()]+))?\s*\)")
            .expect("invalid regex pattern")
    })
}

fn scale_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"scale\s*\(\s*([^,\s()]+)(?:(?:\s*,\s*|\s+)([^,\s()]+))?\s*\)")
            .expect("invalid regex pattern")
    })
}

fn rotate_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"rotate\s*\(\s*([^,\s()]+)(?:(?:\s*,\s*|\s+)([^,\s()]+)(?:\s*,\s*|\s+)([^,\s()]+))?\s*\)",
        )
        .expect("invalid regex pattern")
    })
}

fn capture_f64(caps: &regex::Captures<'_>, index: usize) -> Option<f64> {
    caps.get(index)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        rotation_deg: 0.0,
        rotation_center_x: 0.0,
        rotation_center_y: 0.0,
    };

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self {
            translate_x: tx,
            translate_y: ty,
            ..Self::IDENTITY
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            scale_x: sx,
            scale_y: sy,
            ..Self::IDENTITY
        }
    }

    pub fn rotate(angle_deg: f64, center: Point2D) -> Self {
        Self {
            rotation_deg: angle_deg,
            rotation_center_x: center.x,
            rotation_center_y: center.y,
            ..Self::IDENTITY
        }
    }

    /// Parses a `transform` attribute value.
    ///
    /// Unrecognized functions and unparsable numbers leave the matching
    /// component at its identity value.
    pub fn parse(value: &str) -> Self {
        let mut transform = Self::IDENTITY;

        if let Some(caps) = translate_regex().captures(value) {
            if let Some(tx) = capture_f64(&caps, 1) {
                transform.translate_x = tx;
            }
            if let Some(ty) = capture_f64(&caps, 2) {
                transform.translate_y = ty;
            }
        }

        if let Some(caps) = scale_regex().captures(value) {
            if let Some(sx) = capture_f64(&caps, 1) {
                transform.scale_x = sx;
                transform.scale_y = sx;
            }
            if let Some(sy) = capture_f64(&caps, 2) {
                transform.scale_y = sy;
            }
        }

        if let Some(caps) = rotate_regex().captures(value) {
            if let Some(angle) = capture_f64(&caps, 1) {
                transform.rotation_deg = angle;
            }
            if let (Some(cx), Some(cy)) = (capture_f64(&caps, 2), capture_f64(&caps, 3)) {
                transform.rotation_center_x = cx;
                transform.rotation_center_y = cy;
            }
        }

        transform
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Maps one point: scale, then rotate about the center, then translate.
    pub fn apply(&self, point: Point2D) -> Point2D {
        let mut x = point.x * self.scale_x;
        let mut y = point.y * self.scale_y;

        if self.rotation_deg.abs() > MIN_ROTATION_DEG {
            let (sin, cos) = self.rotation_deg.to_radians().sin_cos();
            let dx = x - self.rotation_center_x;
            let dy = y - self.rotation_center_y;
            x = self.rotation_center_x + dx * cos - dy * sin;
            y = self.rotation_center_y + dx * sin + dy * cos;
        }

        Point2D::new(x + self.translate_x, y + self.translate_y)
    }

    pub fn apply_all(&self, points: &[Point2D]) -> Vec<Point2D> {
        points.iter().map(|p| self.apply(*p)).collect()
    }
}
