//! # VectorCut SVG
//!
//! Turns SVG markup into flattened, styled point sequences ready for
//! toolpath generation.
//!
//! ## Modules
//!
//! - **path**: `d` attribute tokenizing and command interpretation
//! - **flatten**: Bézier, arc and ellipse sampling
//! - **shapes**: basic shape outlines (rect, circle, polygon, star, ...)
//! - **style**: fill, stroke and color decoding
//! - **transform**: translate/scale/rotate parsing and application
//! - **document**: element tree walking and group transform flattening
//! - **object**: placed drawable objects

pub mod document;
pub mod error;
pub mod flatten;
pub mod object;
pub mod path;
pub mod shapes;
pub mod style;
pub mod transform;

pub use document::{
    bounds_of, flatten_elements, is_valid_svg, is_valid_svg_file, SvgElementData, SvgParser,
};
pub use error::{PathDataError, SvgError, SvgResult};
pub use flatten::{
    arc_points, cubic_bezier_points, quadratic_bezier_points, ArcSegment, Flattening,
};
pub use object::DrawableObject;
pub use path::{PathCommand, PathData, PathState};
pub use shapes::{Shape, ShapeKind};
pub use style::{parse_color, parse_hex_color, SvgStyle};
pub use transform::Transform;
