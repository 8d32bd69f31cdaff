//! G-Code validation and execution time estimation.

use crate::error::ValidationError;
use crate::settings::GCodeSettings;
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;
use vectorcut_core::Point2D;

/// Words a command line may start with.
const LEADING_WORDS: &[char] = &['G', 'M', 'X', 'Y', 'Z', 'F', 'S'];

/// Returns the line with any `;` or `(` comment removed.
fn strip_comment(line: &str) -> &str {
    match line.find([';', '(']) {
        Some(index) => &line[..index],
        None => line,
    }
}

/// Line-oriented structural check for generated programs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GCodeValidator;

impl GCodeValidator {
    pub fn new() -> Self {
        Self
    }

    /// Reports the first line that is not a recognized command.
    ///
    /// Blank lines and lines starting with `;` or `(` are ignored. A program
    /// with no content at all is rejected.
    pub fn check(&self, gcode: &str) -> Result<(), ValidationError> {
        if gcode.trim().is_empty() {
            return Err(ValidationError::EmptyProgram);
        }

        for (index, line) in gcode.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('(') {
                continue;
            }

            let leading = trimmed
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or(' ');
            if !LEADING_WORDS.contains(&leading) {
                return Err(ValidationError::InvalidLine {
                    line_number: index + 1,
                    line: trimmed.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn validate(&self, gcode: &str) -> bool {
        self.check(gcode).is_ok()
    }
}

/// Distances and durations of the motion in a program.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeEstimate {
    /// Total `G0` travel (mm)
    pub rapid_distance: f64,
    /// Total `G1` travel (mm)
    pub cut_distance: f64,
    pub rapid_seconds: f64,
    pub cut_seconds: f64,
}

impl TimeEstimate {
    pub fn total_seconds(&self) -> f64 {
        self.rapid_seconds + self.cut_seconds
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Motion {
    Rapid,
    Cut,
}

fn motion_of(line: &str) -> Option<Motion> {
    static MOTION: OnceLock<Regex> = OnceLock::new();
    let re = MOTION.get_or_init(|| {
        Regex::new(r"^[Gg]0*([01])(?:[^0-9.]|$)").expect("invalid regex pattern")
    });

    let caps = re.captures(line)?;
    match &caps[1] {
        "0" => Some(Motion::Rapid),
        _ => Some(Motion::Cut),
    }
}

fn axis_value(line: &str, axis: char) -> Option<f64> {
    static X_WORD: OnceLock<Regex> = OnceLock::new();
    static Y_WORD: OnceLock<Regex> = OnceLock::new();
    let re = match axis {
        'X' => X_WORD.get_or_init(|| {
            Regex::new(r"(?i)X\s*([-+]?(?:\d+\.?\d*|\.\d+))").expect("invalid regex pattern")
        }),
        _ => Y_WORD.get_or_init(|| {
            Regex::new(r"(?i)Y\s*([-+]?(?:\d+\.?\d*|\.\d+))").expect("invalid regex pattern")
        }),
    };
    re.captures(line).and_then(|caps| caps[1].parse::<f64>().ok())
}

fn seconds_at(distance: f64, feed_rate: f64) -> Option<f64> {
    if feed_rate > 0.0 && feed_rate.is_finite() {
        Some(distance / feed_rate * 60.0)
    } else {
        None
    }
}

/// Breaks a program's motion down into rapid and cutting travel.
///
/// The machine starts at the origin. `G0` moves are timed at the rapid feed
/// rate and `G1` moves at the cut feed rate; a missing axis keeps its
/// previous value. Moves at a non-positive feed rate add distance but no
/// time.
pub fn estimate_breakdown(gcode: &str, settings: &GCodeSettings) -> TimeEstimate {
    let mut estimate = TimeEstimate::default();
    let mut position = Point2D::ZERO;
    let mut untimed = 0.0;

    for line in gcode.lines() {
        let code = strip_comment(line).trim();
        let Some(motion) = motion_of(code) else {
            continue;
        };

        let target = Point2D::new(
            axis_value(code, 'X').unwrap_or(position.x),
            axis_value(code, 'Y').unwrap_or(position.y),
        );
        let distance = position.distance_to(&target);
        position = target;

        let (total, seconds, feed_rate) = match motion {
            Motion::Rapid => (
                &mut estimate.rapid_distance,
                &mut estimate.rapid_seconds,
                settings.rapid_feed_rate,
            ),
            Motion::Cut => (
                &mut estimate.cut_distance,
                &mut estimate.cut_seconds,
                settings.cut_feed_rate,
            ),
        };
        *total += distance;
        match seconds_at(distance, feed_rate) {
            Some(s) => *seconds += s,
            None => untimed += distance,
        }
    }

    if untimed > 0.0 {
        warn!(
            "{:.3} mm of travel left out of the time estimate: feed rate is not positive",
            untimed
        );
    }

    estimate
}

/// Estimated run time of a program, in seconds.
pub fn estimate_execution_time(gcode: &str, settings: &GCodeSettings) -> f64 {
    estimate_breakdown(gcode, settings).total_seconds()
}
