//! One-call SVG to G-Code conversion.

use crate::error::CamToolResult;
use crate::settings::GCodeSettings;
use crate::toolpath::GCodeGenerator;
use crate::validator::{estimate_breakdown, GCodeValidator, TimeEstimate};
use std::path::Path;
use tracing::{info, warn};
use vectorcut_svg::{Flattening, SvgElementData, SvgParser};

/// Result of converting a drawing.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub gcode: String,
    /// Number of drawable elements found in the document
    pub element_count: usize,
    pub valid: bool,
    pub estimate: TimeEstimate,
}

impl ConversionReport {
    pub fn estimated_seconds(&self) -> f64 {
        self.estimate.total_seconds()
    }
}

/// Converts the SVG file at `path` into a program.
///
/// Settings are validated before anything is read.
pub fn convert_svg_file(
    path: impl AsRef<Path>,
    settings: &GCodeSettings,
    flattening: &Flattening,
) -> CamToolResult<ConversionReport> {
    let path = path.as_ref();
    settings.validate()?;

    let elements = SvgParser::with_flattening(*flattening).parse_file(path)?;
    info!("Converting {} ({} elements)", path.display(), elements.len());
    Ok(convert_elements(&elements, settings, flattening))
}

/// Converts SVG markup into a program.
pub fn convert_svg_str(
    text: &str,
    settings: &GCodeSettings,
    flattening: &Flattening,
) -> CamToolResult<ConversionReport> {
    settings.validate()?;

    let elements = SvgParser::with_flattening(*flattening).parse_str(text)?;
    Ok(convert_elements(&elements, settings, flattening))
}

fn convert_elements(
    elements: &[SvgElementData],
    settings: &GCodeSettings,
    flattening: &Flattening,
) -> ConversionReport {
    let gcode = GCodeGenerator::new(settings.clone())
        .with_flattening(*flattening)
        .generate(elements);

    let valid = match GCodeValidator::new().check(&gcode) {
        Ok(()) => true,
        Err(e) => {
            warn!("Generated program failed validation: {}", e);
            false
        }
    };
    let estimate = estimate_breakdown(&gcode, settings);

    info!(
        "Converted {} elements: {} lines, estimated {:.1}s",
        elements.len(),
        gcode.lines().count(),
        estimate.total_seconds()
    );

    ConversionReport {
        gcode,
        element_count: elements.len(),
        valid,
        estimate,
    }
}
