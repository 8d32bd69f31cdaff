//! SVG path data (`d` attribute) tokenizing and interpretation.
//!
//! Path data is split into [`PathCommand`]s, each a command letter with its
//! numeric parameters. Interpretation walks the commands with an explicit
//! [`PathState`] (current point and subpath start) and accumulates the
//! flattened points.
//!
//! Supported commands are `M L H V Z A Q C` in both absolute and relative
//! form. Other letters are skipped without emitting points.

use crate::error::PathDataError;
use crate::flatten::{cubic_bezier_points, quadratic_bezier_points, ArcSegment, Flattening};
use std::str::FromStr;
use tracing::debug;
use vectorcut_core::Point2D;

/// A single path command and its raw parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub letter: char,
    pub params: Vec<f64>,
}

impl PathCommand {
    pub fn new(letter: char, params: Vec<f64>) -> Self {
        Self { letter, params }
    }

    /// Lowercase letters are relative to the current point.
    pub fn is_relative(&self) -> bool {
        self.letter.is_ascii_lowercase()
    }
}

/// Pen state carried between path commands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PathState {
    /// Current pen position.
    pub current: Point2D,
    /// Start of the current subpath; target of `Z`.
    pub start: Point2D,
}

/// Parsed path data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Tokenizes a `d` attribute value.
    pub fn parse(d: &str) -> Result<Self, PathDataError> {
        Ok(Self {
            commands: tokenize(d)?,
        })
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Flattens the path into a single point list.
    pub fn points(&self, flattening: &Flattening) -> Vec<Point2D> {
        interpret(&self.commands, flattening)
    }
}

impl FromStr for PathData {
    type Err = PathDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b','
}

fn is_number_start(b: u8) -> bool {
    b.is_ascii_digit() || b == b'-' || b == b'+' || b == b'.'
}

/// Scans one number starting at `start` and returns the end offset.
///
/// Accepts an optional sign, digits with at most one decimal point, and an
/// exponent. Stops at a second sign or decimal point so packed values such
/// as `1.5.5` or `10-20` split into separate numbers.
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    if i < bytes.len() && (bytes[i] == b'-' || bytes[i] == b'+') {
        i += 1;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'-' || bytes[j] == b'+') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }
    i
}

/// Splits path data into commands.
///
/// Numbers that appear before the first command letter are ignored. A
/// malformed number, or any character that is neither a letter, a number
/// nor a separator, is reported with its byte offset.
pub fn tokenize(d: &str) -> Result<Vec<PathCommand>, PathDataError> {
    let bytes = d.as_bytes();
    let mut commands = Vec::new();
    let mut current: Option<PathCommand> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if is_separator(b) {
            i += 1;
        } else if b.is_ascii_alphabetic() {
            if let Some(cmd) = current.take() {
                commands.push(cmd);
            }
            current = Some(PathCommand::new(b as char, Vec::new()));
            i += 1;
        } else if is_number_start(b) {
            let end = scan_number(bytes, i);
            let token = &d[i..end];
            let value = token
                .parse::<f64>()
                .map_err(|_| PathDataError::InvalidNumber {
                    position: i,
                    token: token.to_string(),
                })?;
            match current.as_mut() {
                Some(cmd) => cmd.params.push(value),
                None => debug!("Ignoring number '{}' before first path command", token),
            }
            i = end;
        } else {
            let token = d[i..].chars().next().map(String::from).unwrap_or_default();
            return Err(PathDataError::InvalidNumber { position: i, token });
        }
    }

    if let Some(cmd) = current {
        commands.push(cmd);
    }

    Ok(commands)
}

/// Applies one command to the pen state.
///
/// Returns the new state and the points the command emits. Parameters that
/// do not fill a complete tuple for the command are ignored.
pub fn execute(
    state: PathState,
    command: &PathCommand,
    flattening: &Flattening,
) -> (PathState, Vec<Point2D>) {
    let relative = command.is_relative();
    let params = &command.params;
    let mut state = state;
    let mut points = Vec::new();

    let resolve = |current: Point2D, x: f64, y: f64| {
        if relative {
            current + Point2D::new(x, y)
        } else {
            Point2D::new(x, y)
        }
    };

    match command.letter.to_ascii_uppercase() {
        'M' => {
            // Pairs after the first are implicit line-tos.
            for (n, pair) in params.chunks_exact(2).enumerate() {
                let target = resolve(state.current, pair[0], pair[1]);
                if n == 0 {
                    state.start = target;
                }
                state.current = target;
                points.push(target);
            }
        }
        'L' => {
            for pair in params.chunks_exact(2) {
                state.current = resolve(state.current, pair[0], pair[1]);
                points.push(state.current);
            }
        }
        'H' => {
            for &x in params {
                state.current.x = if relative { state.current.x + x } else { x };
                points.push(state.current);
            }
        }
        'V' => {
            for &y in params {
                state.current.y = if relative { state.current.y + y } else { y };
                points.push(state.current);
            }
        }
        'Z' => {
            state.current = state.start;
            points.push(state.start);
        }
        'A' => {
            for arc in params.chunks_exact(7) {
                let end = resolve(state.current, arc[5], arc[6]);
                let segment = ArcSegment {
                    start: state.current,
                    end,
                    rx: arc[0],
                    ry: arc[1],
                    x_axis_rotation: arc[2],
                    large_arc: arc[3] != 0.0,
                    sweep: arc[4] != 0.0,
                };
                points.extend(segment.points(flattening.curve_steps));
                state.current = end;
            }
        }
        'Q' => {
            for quad in params.chunks_exact(4) {
                let ctrl = resolve(state.current, quad[0], quad[1]);
                let end = resolve(state.current, quad[2], quad[3]);
                points.extend(quadratic_bezier_points(
                    state.current,
                    ctrl,
                    end,
                    flattening.curve_steps,
                ));
                state.current = end;
            }
        }
        'C' => {
            for cubic in params.chunks_exact(6) {
                let ctrl1 = resolve(state.current, cubic[0], cubic[1]);
                let ctrl2 = resolve(state.current, cubic[2], cubic[3]);
                let end = resolve(state.current, cubic[4], cubic[5]);
                points.extend(cubic_bezier_points(
                    state.current,
                    ctrl1,
                    ctrl2,
                    end,
                    flattening.curve_steps,
                ));
                state.current = end;
            }
        }
        other => {
            debug!("Skipping unsupported path command '{}'", other);
        }
    }

    (state, points)
}

/// Runs every command from an initial state at the origin.
pub fn interpret(commands: &[PathCommand], flattening: &Flattening) -> Vec<Point2D> {
    let mut state = PathState::default();
    let mut points = Vec::new();

    for command in commands {
        let (next, emitted) = execute(state, command, flattening);
        state = next;
        points.extend(emitted);
    }

    points
}
