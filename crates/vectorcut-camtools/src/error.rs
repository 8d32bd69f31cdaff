//! Error types for the CAM tools crate.
//!
//! Generation itself is infallible; these errors cover settings validation,
//! G-Code validation results and the file conversion pipeline.

use thiserror::Error;
use vectorcut_svg::SvgError;

/// Errors that can occur during CAM tool operations.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// The input drawing could not be loaded.
    #[error("SVG error: {0}")]
    Svg(#[from] SvgError),
}

/// Errors related to settings validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Reasons a G-Code program is rejected by the validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The program has no content.
    #[error("Program is empty")]
    EmptyProgram,

    /// A line does not start with a recognized word.
    #[error("Invalid G-Code at line {line_number}: {line}")]
    InvalidLine { line_number: usize, line: String },
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
