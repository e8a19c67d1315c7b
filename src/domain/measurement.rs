//! Child measurement input.
//!
//! The fields mirror what a growth-monitoring form collects: age in completed
//! months, gender, standing/recumbent height and body weight.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::lms::round_half_away;

/// Gender partition of the WHO reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Suffix used by the WHO table files (`hfa_boys.json`, `hfa_girls.json`).
    #[must_use]
    pub const fn table_suffix(&self) -> &'static str {
        match self {
            Self::Male => "boys",
            Self::Female => "girls",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender value other than `male` or `female`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported gender {0:?}: expected \"male\" or \"female\"")]
pub struct UnsupportedGender(pub String);

impl FromStr for Gender {
    type Err = UnsupportedGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(UnsupportedGender(s.to_string())),
        }
    }
}

/// One set of measurements for a child.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Age in completed months
    pub age_months: u32,

    pub gender: Gender,

    /// Height (or recumbent length) in cm
    pub height_cm: f64,

    /// Weight in kg
    pub weight_kg: f64,
}

impl Measurement {
    #[must_use]
    pub fn new(age_months: u32, gender: Gender, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            age_months,
            gender,
            height_cm,
            weight_kg,
        }
    }

    /// Height rounded to the one-decimal grid used by weight-for-height keys.
    #[must_use]
    pub fn rounded_height_cm(&self) -> f64 {
        round_half_away(self.height_cm, 1)
    }

    /// Validate that every measurement is present and positive.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.age_months == 0 {
            errors.push("Age must be greater than 0 months".to_string());
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            errors.push(format!("Height {} cm must be a positive number", self.height_cm));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            errors.push(format!("Weight {} kg must be a positive number", self.weight_kg));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
