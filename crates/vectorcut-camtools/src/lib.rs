//! # VectorCut CAM Tools
//!
//! G-Code generation for laser and spindle machines from flattened vector
//! geometry.
//!
//! ## Modules
//!
//! - **settings**: machine and output parameters
//! - **source**: geometry inputs (SVG elements, drawable objects, point lists)
//! - **toolpath**: program header, per-contour moves and footer
//! - **validator**: structural program checks and run time estimation
//! - **pipeline**: SVG file to G-Code in one call

pub mod error;
pub mod pipeline;
pub mod settings;
pub mod source;
pub mod toolpath;
pub mod validator;

pub use error::{
    CamToolError, CamToolResult, ParameterError, ParameterResult, ValidationError,
};
pub use pipeline::{convert_svg_file, convert_svg_str, ConversionReport};
pub use settings::{GCodeSettings, MAX_DECIMAL_PLACES};
pub use source::{Contour, GeometrySource};
pub use toolpath::{format_number, GCodeGenerator};
pub use validator::{estimate_breakdown, estimate_execution_time, GCodeValidator, TimeEstimate};
