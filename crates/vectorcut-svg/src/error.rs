//! Error types for SVG loading and path data parsing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or parsing an SVG document.
#[derive(Error, Debug)]
pub enum SvgError {
    /// The input file does not exist.
    #[error("SVG file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The input is not well-formed XML.
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// The document root is not an `<svg>` element.
    #[error("Not an SVG document: root element is <{root}>")]
    NotSvg { root: String },

    /// The input bytes are not valid UTF-8.
    #[error("Invalid text encoding: {0}")]
    InvalidEncoding(String),

    /// I/O error while reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Path data could not be tokenized.
    #[error("Path data error: {0}")]
    Path(#[from] PathDataError),
}

/// Errors raised by the path data tokenizer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathDataError {
    /// A numeric token could not be parsed.
    #[error("Invalid number '{token}' at offset {position}")]
    InvalidNumber { position: usize, token: String },
}

/// Result type alias for SVG operations.
pub type SvgResult<T> = Result<T, SvgError>;
