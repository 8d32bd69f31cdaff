//! 8-bit RGBA color.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A color with 8-bit red, green, blue and alpha channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8::rgb(0, 0, 0);
    pub const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);
    pub const RED: Rgba8 = Rgba8::rgb(255, 0, 0);
    pub const GREEN: Rgba8 = Rgba8::rgb(0, 128, 0);
    pub const BLUE: Rgba8 = Rgba8::rgb(0, 0, 255);
    pub const YELLOW: Rgba8 = Rgba8::rgb(255, 255, 0);
    pub const CYAN: Rgba8 = Rgba8::rgb(0, 255, 255);
    pub const MAGENTA: Rgba8 = Rgba8::rgb(255, 0, 255);
    pub const ORANGE: Rgba8 = Rgba8::rgb(255, 165, 0);
    pub const PURPLE: Rgba8 = Rgba8::rgb(128, 0, 128);
    pub const PINK: Rgba8 = Rgba8::rgb(255, 192, 203);
    pub const BROWN: Rgba8 = Rgba8::rgb(165, 42, 42);
    pub const GRAY: Rgba8 = Rgba8::rgb(128, 128, 128);
    pub const DARK_RED: Rgba8 = Rgba8::rgb(139, 0, 0);
    pub const DARK_GREEN: Rgba8 = Rgba8::rgb(0, 100, 0);
    pub const DARK_BLUE: Rgba8 = Rgba8::rgb(0, 0, 139);
    pub const LIGHT_GRAY: Rgba8 = Rgba8::rgb(211, 211, 211);
    /// Fully transparent; used for disabled paint channels.
    pub const TRANSPARENT: Rgba8 = Rgba8::argb(0, 0, 0, 0);

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from alpha, red, green and blue, in that order.
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgba8 {
    /// Formats as `#AARRGGBB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}
