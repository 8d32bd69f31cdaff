//! # VectorCut
//!
//! Converts SVG drawings into G-Code for laser cutters and CNC routers.
//!
//! ## Architecture
//!
//! VectorCut is organized as a workspace with multiple crates:
//!
//! 1. **vectorcut-core** - Point, bounds and color value types
//! 2. **vectorcut-svg** - Path data, shapes, style, transforms and document walking
//! 3. **vectorcut-camtools** - Toolpath generation, validation and time estimation
//! 4. **vectorcut-settings** - Configuration files
//! 5. **vectorcut** - Command-line binary that integrates all crates

pub use vectorcut_core::{Bounds2D, Point2D, Rgba8};

pub use vectorcut_svg::{
    bounds_of, flatten_elements, is_valid_svg, is_valid_svg_file, DrawableObject, Flattening,
    PathData, Shape, ShapeKind, SvgElementData, SvgError, SvgParser, SvgStyle, Transform,
};

pub use vectorcut_camtools::{
    convert_svg_file, convert_svg_str, estimate_breakdown, estimate_execution_time,
    CamToolError, ConversionReport, GCodeGenerator, GCodeSettings, GCodeValidator,
    GeometrySource, TimeEstimate, ValidationError,
};

pub use vectorcut_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Installs a formatting layer on stderr filtered by `RUST_LOG`. Without
/// `RUST_LOG` the level is `info`, or `debug` when `verbose` is set.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .with_line_number(verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
