//! LMS parameters and Z-score computation.
//!
//! Implements the WHO LMS method (Box-Cox power `L`, median `M`,
//! coefficient of variation `S`) for converting anthropometric measurements
//! into standardized scores.

use serde::{Deserialize, Serialize};

/// Number of decimals a Z-score is reported with.
pub const ZSCORE_DECIMALS: i32 = 2;

/// LMS triple for one reference cell (one gender, one age or height).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsParams {
    /// Box-Cox power (skewness)
    #[serde(rename = "L")]
    pub l: f64,

    /// Median
    #[serde(rename = "M")]
    pub m: f64,

    /// Coefficient of variation
    #[serde(rename = "S")]
    pub s: f64,
}

impl LmsParams {
    #[must_use]
    pub const fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }

    /// Check that the triple can be used for Z-score computation.
    ///
    /// # Errors
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.l.is_finite() && self.m.is_finite() && self.s.is_finite()) {
            return Err(format!(
                "non-finite LMS values (L={}, M={}, S={})",
                self.l, self.m, self.s
            ));
        }
        if self.m <= 0.0 {
            return Err(format!("median M must be positive, got {}", self.m));
        }
        if self.s <= 0.0 {
            return Err(format!("coefficient of variation S must be positive, got {}", self.s));
        }
        Ok(())
    }

    /// Z-score of `measured` against this cell, rounded to two decimals.
    ///
    /// The caller guarantees `measured > 0`; see [`zscore`].
    #[must_use]
    pub fn zscore(&self, measured: f64) -> f64 {
        round_half_away(self.raw_zscore(measured), ZSCORE_DECIMALS)
    }

    /// Unrounded Z-score.
    #[must_use]
    pub fn raw_zscore(&self, measured: f64) -> f64 {
        let ratio = measured / self.m;
        if self.l == 0.0 {
            ratio.ln() / self.s
        } else {
            (ratio.powf(self.l) - 1.0) / (self.l * self.s)
        }
    }

    /// Measurement that sits exactly at `z` standard deviations (inverse LMS).
    #[must_use]
    pub fn value_at(&self, z: f64) -> f64 {
        if self.l == 0.0 {
            self.m * (self.s * z).exp()
        } else {
            self.m * (1.0 + self.l * self.s * z).powf(1.0 / self.l)
        }
    }
}

/// Compute the WHO LMS Z-score of a measurement.
///
/// - `L == 0`: `ln(measured / M) / S`
/// - otherwise: `((measured / M)^L - 1) / (L * S)`
///
/// The result is rounded to two decimals, half away from zero. No input
/// validation happens here: `measured` and `M` must be positive and `S`
/// non-zero, otherwise the result is NaN or infinite.
#[must_use]
pub fn zscore(measured: f64, reference: &LmsParams) -> f64 {
    reference.zscore(measured)
}

/// Round the exact binary value to `decimals` places, ties away from zero.
///
/// `value * factor` can itself round onto a half (the double nearest to
/// 85.05 is slightly below it, yet `85.05 * 10` is exactly `850.5`). The
/// product error recovered with a fused multiply-add decides which side of
/// the half the exact value lies on. Negative zero comes back as `0.0`.
#[must_use]
pub fn round_half_away(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    let rounded = if scaled.fract().abs() == 0.5 {
        let error = value.mul_add(factor, -scaled);
        if error != 0.0 && error.is_sign_positive() != scaled.is_sign_positive() {
            scaled.trunc()
        } else {
            scaled.round()
        }
    } else {
        scaled.round()
    };
    rounded / factor + 0.0
}
