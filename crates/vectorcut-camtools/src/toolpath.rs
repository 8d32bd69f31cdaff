//! G-Code toolpath generation.
//!
//! A program is written in three phases. The header sets millimeter units,
//! absolute positioning and feed-per-minute mode, then parks the tool at the
//! safe height over the origin. Each contour is cut by a rapid to its first
//! point, a plunge to the work height, tool engagement, one `G1` per
//! remaining point, disengagement and a retract. The footer turns the tool
//! off, retracts, returns home and ends the program.
//!
//! Generation never fails: any settings value produces a syntactically
//! valid program.

use crate::settings::{GCodeSettings, MAX_DECIMAL_PLACES};
use crate::source::{Contour, GeometrySource};
use tracing::{debug, info};
use vectorcut_core::Point2D;
use vectorcut_svg::Flattening;

/// Formats `value` with a fixed number of fractional digits, without a
/// sign on zero. `decimals` is capped at [`MAX_DECIMAL_PLACES`].
pub fn format_number(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals.min(MAX_DECIMAL_PLACES), value);
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

/// Writes G-Code programs for a fixed set of settings.
#[derive(Debug, Clone, Default)]
pub struct GCodeGenerator {
    settings: GCodeSettings,
    flattening: Flattening,
}

impl GCodeGenerator {
    pub fn new(settings: GCodeSettings) -> Self {
        Self {
            settings,
            flattening: Flattening::default(),
        }
    }

    /// Sets the sampling used for drawable objects' curves.
    pub fn with_flattening(mut self, flattening: Flattening) -> Self {
        self.flattening = flattening;
        self
    }

    pub fn settings(&self) -> &GCodeSettings {
        &self.settings
    }

    /// Generates a complete program for `source`.
    pub fn generate<S>(&self, source: &S) -> String
    where
        S: GeometrySource + ?Sized,
    {
        self.generate_with_progress(source, |_| {})
    }

    /// Generates a program, reporting progress in `0.0..=1.0` after each
    /// contour.
    pub fn generate_with_progress<S, F>(&self, source: &S, mut progress_callback: F) -> String
    where
        S: GeometrySource + ?Sized,
        F: FnMut(f32),
    {
        let contours = source.contours(&self.flattening);
        let mut writer = ProgramWriter::new(&self.settings);

        writer.header();
        progress_callback(0.0);

        let total = contours.len().max(1) as f32;
        for (index, contour) in contours.iter().enumerate() {
            writer.contour(index, contour);
            progress_callback((index + 1) as f32 / total);
        }

        writer.footer();
        progress_callback(1.0);

        info!(
            "Generated G-code for {} contours ({} cutting moves)",
            contours.len(),
            writer.cut_moves
        );
        writer.finish()
    }
}

/// Accumulates program text.
struct ProgramWriter<'a> {
    settings: &'a GCodeSettings,
    gcode: String,
    cut_moves: usize,
}

impl<'a> ProgramWriter<'a> {
    fn new(settings: &'a GCodeSettings) -> Self {
        Self {
            settings,
            gcode: String::new(),
            cut_moves: 0,
        }
    }

    fn finish(self) -> String {
        self.gcode
    }

    fn line(&mut self, code: &str, comment: &str) {
        self.gcode.push_str(code);
        if self.settings.include_comments && !comment.is_empty() {
            self.gcode.push_str(" ; ");
            self.gcode.push_str(comment);
        }
        self.gcode.push('\n');
    }

    fn comment(&mut self, text: &str) {
        if self.settings.include_comments {
            self.gcode.push_str(&format!("; {}\n", text));
        }
    }

    fn num(&self, value: f64) -> String {
        format_number(value, self.settings.decimal_places)
    }

    fn xy(&self, point: Point2D) -> String {
        let s = self.settings;
        format!(
            "X{} Y{}",
            self.num(point.x * s.scale_factor + s.x_offset),
            self.num(point.y * s.scale_factor + s.y_offset)
        )
    }

    fn tool_name(&self) -> &'static str {
        if self.settings.use_laser_mode {
            "laser"
        } else {
            "spindle"
        }
    }

    fn header(&mut self) {
        let s = self.settings;
        if s.include_comments {
            self.comment("G-Code generated by vectorcut");
            self.comment(&format!(
                "Generated on: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            ));
            self.comment("Settings:");
            self.comment(&format!("  Cut feed rate: {} mm/min", s.cut_feed_rate));
            self.comment(&format!("  Rapid feed rate: {} mm/min", s.rapid_feed_rate));
            self.comment(&format!("  Power: {}", s.laser_power));
            self.comment(&format!("  Scale factor: {}", s.scale_factor));
            self.comment(&format!("  Offset: X{} Y{}", s.x_offset, s.y_offset));
            self.comment(&format!("  Mode: {}", self.tool_name()));
            self.gcode.push('\n');
        }

        self.line("G21", "Set units to millimeters");
        self.line("G90", "Absolute positioning");
        self.line("G94", "Units per minute feed rate mode");
        if s.use_laser_mode {
            self.line("M3 S0", "Enable laser mode with power off");
        }
        self.raise_to_safe_height();
        self.line("G0 X0 Y0", "Move to origin");
        self.gcode.push('\n');
    }

    fn contour(&mut self, index: usize, contour: &Contour) {
        let Some((first, rest)) = contour.points.split_first() else {
            debug!("Skipping empty contour {}", index + 1);
            return;
        };

        self.comment(&format!("Contour {}: {}", index + 1, contour.label));
        self.rapid_to_start(*first);
        self.lower_to_work_height();
        self.engage_tool();
        for point in rest {
            self.cut_move(*point);
        }
        self.disengage_tool();
        self.raise_to_safe_height();
        self.gcode.push('\n');

        debug!(
            "Contour {} ({}): {} points",
            index + 1,
            contour.label,
            contour.points.len()
        );
    }

    fn footer(&mut self) {
        self.comment("End of program");
        self.disengage_tool();
        self.raise_to_safe_height();
        self.line("G0 X0 Y0", "Return to origin");
        self.line("M30", "Program end");
    }

    fn rapid_to_start(&mut self, point: Point2D) {
        let code = format!("G0 {}", self.xy(point));
        self.line(&code, "Rapid to contour start");
    }

    fn lower_to_work_height(&mut self) {
        let code = format!("G0 Z{}", self.num(self.settings.work_height));
        self.line(&code, "Lower to work height");
    }

    fn engage_tool(&mut self) {
        let code = format!("M3 S{}", self.settings.laser_power);
        let comment = format!("Turn on {}", self.tool_name());
        self.line(&code, &comment);
    }

    fn cut_move(&mut self, point: Point2D) {
        let code = format!("G1 {} F{}", self.xy(point), self.settings.cut_feed_rate);
        self.line(&code, "");
        self.cut_moves += 1;
    }

    fn disengage_tool(&mut self) {
        let comment = format!("Turn off {}", self.tool_name());
        self.line("M5", &comment);
    }

    fn raise_to_safe_height(&mut self) {
        let code = format!("G0 Z{}", self.num(self.settings.safe_height));
        self.line(&code, "Move to safe height");
    }
}
