//! Presentation attribute parsing: fill, stroke and stroke width.
//!
//! Color values are decoded by trying, in order, `#` hex notation,
//! `rgb()`/`rgba()` functional notation and the named-color table. Every
//! failure falls back to the caller's default color.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;
use vectorcut_core::Rgba8;

/// Resolved paint properties of one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SvgStyle {
    pub fill_color: Rgba8,
    pub stroke_color: Rgba8,
    pub stroke_width: f64,
    pub has_fill: bool,
    pub has_stroke: bool,
}

impl Default for SvgStyle {
    /// Black fill, no stroke, width 1.
    fn default() -> Self {
        Self {
            fill_color: Rgba8::BLACK,
            stroke_color: Rgba8::TRANSPARENT,
            stroke_width: 1.0,
            has_fill: true,
            has_stroke: false,
        }
    }
}

impl SvgStyle {
    /// Builds a style from raw `fill`, `stroke` and `stroke-width` values.
    pub fn from_attributes(
        fill: Option<&str>,
        stroke: Option<&str>,
        stroke_width: Option<&str>,
    ) -> Self {
        let mut style = SvgStyle {
            stroke_width: parse_stroke_width(stroke_width),
            ..SvgStyle::default()
        };

        match fill.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) if value.eq_ignore_ascii_case("none") => {
                style.fill_color = Rgba8::TRANSPARENT;
                style.has_fill = false;
            }
            Some(value) => {
                style.fill_color = parse_color(value, Rgba8::BLACK);
            }
            None => {}
        }

        match stroke.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) if !value.eq_ignore_ascii_case("none") => {
                style.stroke_color = parse_color(value, Rgba8::BLACK);
                style.has_stroke = true;
            }
            _ => {}
        }

        style
    }
}

/// Reasons a color value could not be decoded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),

    #[error("invalid rgb color '{0}'")]
    InvalidRgb(String),
}

/// Decodes a color value, returning `default` on any failure.
///
/// `none` and the empty string decode to transparent.
pub fn parse_color(value: &str, default: Rgba8) -> Rgba8 {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return Rgba8::TRANSPARENT;
    }

    let decoded = if value.starts_with('#') {
        parse_hex_color(value)
    } else if value
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("rgb"))
    {
        parse_rgb_color(value)
    } else {
        return named_color(value).unwrap_or(default);
    };

    decoded.unwrap_or_else(|e| {
        warn!("Falling back to default color: {}", e);
        default
    })
}

/// Decodes `#RGB`, `#RRGGBB` or `#AARRGGBB`.
pub fn parse_hex_color(value: &str) -> Result<Rgba8, ColorError> {
    let digits = value.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(value.to_string()));
    }

    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map_err(|_| ColorError::InvalidHex(value.to_string()))
    };

    match expanded.len() {
        6 => Ok(Rgba8::rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Ok(Rgba8::argb(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        _ => Err(ColorError::InvalidHex(value.to_string())),
    }
}

/// Decodes `rgb(r, g, b)` or `rgba(r, g, b, a)` with integer channels and
/// alpha in `0.0..=1.0`.
pub fn parse_rgb_color(value: &str) -> Result<Rgba8, ColorError> {
    static RGB_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = RGB_REGEX.get_or_init(|| {
        Regex::new(r"(?i)rgba?\s*\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*([\d.]+))?\s*\)")
            .expect("invalid regex pattern")
    });

    let invalid = || ColorError::InvalidRgb(value.to_string());
    let caps = re.captures(value).ok_or_else(invalid)?;
    let channel = |i: usize| caps[i].parse::<u8>().map_err(|_| invalid());

    let (r, g, b) = (channel(1)?, channel(2)?, channel(3)?);
    match caps.get(4) {
        Some(alpha) => {
            let alpha = alpha.as_str().parse::<f64>().map_err(|_| invalid())?;
            let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
            Ok(Rgba8::argb(a, r, g, b))
        }
        None => Ok(Rgba8::rgb(r, g, b)),
    }
}

/// Looks up a color keyword, ignoring ASCII case.
pub fn named_color(name: &str) -> Option<Rgba8> {
    let color = match name.trim().to_ascii_lowercase().as_str() {
        "black" => Rgba8::BLACK,
        "white" => Rgba8::WHITE,
        "red" => Rgba8::RED,
        "green" => Rgba8::GREEN,
        "blue" => Rgba8::BLUE,
        "yellow" => Rgba8::YELLOW,
        "cyan" => Rgba8::CYAN,
        "magenta" => Rgba8::MAGENTA,
        "orange" => Rgba8::ORANGE,
        "purple" => Rgba8::PURPLE,
        "pink" => Rgba8::PINK,
        "brown" => Rgba8::BROWN,
        "gray" | "grey" => Rgba8::GRAY,
        "darkred" => Rgba8::DARK_RED,
        "darkgreen" => Rgba8::DARK_GREEN,
        "darkblue" => Rgba8::DARK_BLUE,
        "lightgray" | "lightgrey" => Rgba8::LIGHT_GRAY,
        "transparent" => Rgba8::TRANSPARENT,
        _ => return None,
    };
    Some(color)
}

/// Parses `stroke-width`, ignoring unit letters and `%`.
///
/// Absent or unparsable values give `1.0`; negatives clamp to zero.
pub fn parse_stroke_width(value: Option<&str>) -> f64 {
    let Some(value) = value else {
        return 1.0;
    };

    let numeric: String = value
        .chars()
        .filter(|c| !c.is_ascii_alphabetic() && *c != '%')
        .collect();

    match numeric.trim().parse::<f64>() {
        Ok(width) if width.is_finite() => width.max(0.0),
        _ => 1.0,
    }
}
