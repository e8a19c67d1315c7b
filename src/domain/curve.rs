//! Reference growth curves (SD lines) derived from LMS parameters.

use serde::{Deserialize, Serialize};

use super::lms::{round_half_away, LmsParams};

/// Z values of the standard deviation lines, lowest first.
pub const SD_LINES: [f64; 7] = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0];

/// Measurements at each SD line for one reference cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Age in months or height in cm, depending on the table
    pub key: f64,

    /// Values at -3SD .. +3SD, rounded to one decimal
    pub sd: [f64; 7],
}

impl CurvePoint {
    #[must_use]
    pub fn from_lms(key: f64, lms: &LmsParams) -> Self {
        Self {
            key,
            sd: SD_LINES.map(|z| round_half_away(lms.value_at(z), 1)),
        }
    }

    #[must_use]
    pub fn median(&self) -> f64 {
        self.sd[3]
    }
}
