//! G-Code generation settings.

use crate::error::{ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};

/// Largest accepted `decimal_places`.
pub const MAX_DECIMAL_PLACES: usize = 10;

/// Machine and output parameters for toolpath generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GCodeSettings {
    /// Feed rate for cutting moves (mm/min)
    pub cut_feed_rate: f64,
    /// Feed rate assumed for rapid moves when estimating (mm/min)
    pub rapid_feed_rate: f64,
    /// `S` value used when engaging the tool
    pub laser_power: u32,
    /// Z height for travel moves (mm)
    pub safe_height: f64,
    /// Z height while cutting (mm)
    pub work_height: f64,
    /// Laser mode arms the laser at power zero in the header
    pub use_laser_mode: bool,
    pub include_comments: bool,
    /// Multiplier applied to every X/Y coordinate
    pub scale_factor: f64,
    /// Added to X after scaling (mm)
    pub x_offset: f64,
    /// Added to Y after scaling (mm)
    pub y_offset: f64,
    /// Fractional digits for X/Y/Z words
    pub decimal_places: usize,
}

impl Default for GCodeSettings {
    fn default() -> Self {
        Self {
            cut_feed_rate: 1000.0,
            rapid_feed_rate: 3000.0,
            laser_power: 255,
            safe_height: 5.0,
            work_height: 0.0,
            use_laser_mode: true,
            include_comments: true,
            scale_factor: 1.0,
            x_offset: 0.0,
            y_offset: 0.0,
            decimal_places: 3,
        }
    }
}

fn require_finite(name: &str, value: f64) -> ParameterResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: "must be a finite number".to_string(),
        })
    }
}

fn require_positive(name: &str, value: f64) -> ParameterResult<()> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::OutOfRange {
            name: name.to_string(),
            value,
            min: 0.0,
            max: f64::INFINITY,
        })
    }
}

impl GCodeSettings {
    /// Checks that the settings describe a usable machine setup.
    ///
    /// Generation does not require this; it only guards user-supplied
    /// configuration.
    pub fn validate(&self) -> ParameterResult<()> {
        require_positive("cut_feed_rate", self.cut_feed_rate)?;
        require_positive("rapid_feed_rate", self.rapid_feed_rate)?;
        require_finite("safe_height", self.safe_height)?;
        require_finite("work_height", self.work_height)?;
        require_finite("x_offset", self.x_offset)?;
        require_finite("y_offset", self.y_offset)?;
        require_finite("scale_factor", self.scale_factor)?;

        if self.scale_factor == 0.0 {
            return Err(ParameterError::InvalidValue {
                name: "scale_factor".to_string(),
                reason: "must not be zero".to_string(),
            });
        }

        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ParameterError::OutOfRange {
                name: "decimal_places".to_string(),
                value: self.decimal_places as f64,
                min: 0.0,
                max: MAX_DECIMAL_PLACES as f64,
            });
        }

        Ok(())
    }
}
