//! # vectorcut Core
//!
//! Value types shared by every layer of the SVG to G-Code pipeline:
//! - [`Point2D`] and [`Bounds2D`] for flattened geometry
//! - [`Rgba8`] for resolved SVG paint colors
//!
//! All types are small `Copy` values. Arithmetic always returns new
//! instances, nothing here is mutated in place.

pub mod color;
pub mod geometry;

pub use color::Rgba8;
pub use geometry::{Bounds2D, Point2D, POINT_EPSILON};
