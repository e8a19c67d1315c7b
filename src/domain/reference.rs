//! WHO growth-standard reference tables.
//!
//! Three indicators, each partitioned by gender:
//! - height-for-age and weight-for-age, keyed by age in whole months (0-60)
//! - weight-for-height, keyed by height in cm on a 0.5 cm grid (45.0-110.0)
//!
//! Lookups are exact. There is no interpolation between sampled cells and no
//! fallback to a neighbouring cell: a missing key is an error.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::lms::{round_half_away, LmsParams};
use super::measurement::Gender;

/// Height keys are stored as integer tenths of a centimetre.
const HEIGHT_KEY_SCALE: f64 = 10.0;

/// Tolerance when checking that a height key has at most one decimal.
const HEIGHT_KEY_EPSILON: f64 = 1e-6;

/// Growth indicator backed by a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    /// Height-for-age (HAZ)
    HeightForAge,
    /// Weight-for-age (WFA)
    WeightForAge,
    /// Weight-for-height (WHZ)
    WeightForHeight,
}

impl Indicator {
    pub const ALL: [Self; 3] = [Self::HeightForAge, Self::WeightForAge, Self::WeightForHeight];

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::HeightForAge => "HAZ",
            Self::WeightForAge => "WFA",
            Self::WeightForHeight => "WHZ",
        }
    }

    /// File stem of the WHO source table (`hfa`, `wfa`, `wfh`).
    #[must_use]
    pub const fn table_stem(&self) -> &'static str {
        match self {
            Self::HeightForAge => "hfa",
            Self::WeightForAge => "wfa",
            Self::WeightForHeight => "wfh",
        }
    }

    #[must_use]
    pub const fn keyed_by_height(&self) -> bool {
        matches!(self, Self::WeightForHeight)
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Key of a reference cell, as requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceKey {
    AgeMonths(u32),
    HeightCm(f64),
}

impl std::fmt::Display for ReferenceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AgeMonths(months) => write!(f, "age {months} months"),
            Self::HeightCm(cm) => write!(f, "height {cm:.1} cm"),
        }
    }
}

/// One raw row of a source table.
///
/// The key column is `umur` (age) or `Height` in the WHO exports; the
/// generic names `key`, `age` and `height` are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    #[serde(alias = "umur", alias = "age", alias = "Height", alias = "height")]
    pub key: f64,

    #[serde(flatten)]
    pub params: LmsParams,
}

impl ReferenceRecord {
    #[must_use]
    pub const fn new(key: f64, l: f64, m: f64, s: f64) -> Self {
        Self {
            key,
            params: LmsParams::new(l, m, s),
        }
    }
}

/// Errors raised while loading or querying reference tables.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReferenceError {
    #[error("{indicator} reference not found for {key} and gender {gender}")]
    NotFound {
        indicator: Indicator,
        key: ReferenceKey,
        gender: Gender,
    },

    #[error("Duplicate {indicator} reference row for {key} ({gender})")]
    DuplicateKey {
        indicator: Indicator,
        key: ReferenceKey,
        gender: Gender,
    },

    #[error("Invalid {indicator} reference key {key} ({gender}): {reason}")]
    InvalidKey {
        indicator: Indicator,
        key: f64,
        gender: Gender,
        reason: String,
    },

    #[error("Invalid {indicator} LMS parameters at {key} ({gender}): {reason}")]
    InvalidParams {
        indicator: Indicator,
        key: ReferenceKey,
        gender: Gender,
        reason: String,
    },

    #[error("{indicator} reference table for {gender} is already loaded")]
    AlreadyLoaded { indicator: Indicator, gender: Gender },
}

/// Round a height to the one-decimal grid used for weight-for-height keys.
#[must_use]
pub fn round_height_cm(height_cm: f64) -> f64 {
    round_half_away(height_cm, 1)
}

fn height_slot(height_cm: f64) -> Option<i64> {
    let rounded = round_height_cm(height_cm);
    rounded
        .is_finite()
        .then(|| (rounded * HEIGHT_KEY_SCALE).round() as i64)
}

/// Immutable LMS lookup for all indicators and genders.
///
/// Built once at startup with [`ReferenceTable::insert_records`], then shared
/// read-only (it is `Send + Sync`).
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    grids: HashMap<(Indicator, Gender), BTreeMap<i64, LmsParams>>,
}

impl ReferenceTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one (indicator, gender) table from raw records.
    ///
    /// Either every record is accepted or the table is left untouched.
    ///
    /// # Errors
    /// Returns error on malformed keys, duplicate keys, invalid LMS values, or
    /// if the table was loaded before.
    pub fn insert_records(
        &mut self,
        indicator: Indicator,
        gender: Gender,
        records: &[ReferenceRecord],
    ) -> Result<usize, ReferenceError> {
        if self.grids.contains_key(&(indicator, gender)) {
            return Err(ReferenceError::AlreadyLoaded { indicator, gender });
        }

        let mut grid = BTreeMap::new();
        for record in records {
            let (slot, key) = Self::record_slot(indicator, gender, record.key)?;

            record
                .params
                .validate()
                .map_err(|reason| ReferenceError::InvalidParams {
                    indicator,
                    key,
                    gender,
                    reason,
                })?;

            if grid.insert(slot, record.params).is_some() {
                return Err(ReferenceError::DuplicateKey {
                    indicator,
                    key,
                    gender,
                });
            }
        }

        let count = grid.len();
        self.grids.insert((indicator, gender), grid);
        Ok(count)
    }

    fn record_slot(
        indicator: Indicator,
        gender: Gender,
        raw: f64,
    ) -> Result<(i64, ReferenceKey), ReferenceError> {
        let invalid = |reason: &str| ReferenceError::InvalidKey {
            indicator,
            key: raw,
            gender,
            reason: reason.to_string(),
        };

        if !raw.is_finite() || raw < 0.0 {
            return Err(invalid("key must be a finite, non-negative number"));
        }

        if indicator.keyed_by_height() {
            let scaled = raw * HEIGHT_KEY_SCALE;
            if (scaled - scaled.round()).abs() > HEIGHT_KEY_EPSILON {
                return Err(invalid("height key must have at most one decimal"));
            }
            Ok((scaled.round() as i64, ReferenceKey::HeightCm(round_height_cm(raw))))
        } else {
            if raw.fract() != 0.0 || raw > f64::from(u32::MAX) {
                return Err(invalid("age key must be a whole number of months"));
            }
            Ok((raw as i64, ReferenceKey::AgeMonths(raw as u32)))
        }
    }

    fn cell(
        &self,
        indicator: Indicator,
        gender: Gender,
        slot: Option<i64>,
        key: ReferenceKey,
    ) -> Result<LmsParams, ReferenceError> {
        slot.and_then(|slot| self.grids.get(&(indicator, gender))?.get(&slot))
            .copied()
            .ok_or(ReferenceError::NotFound {
                indicator,
                key,
                gender,
            })
    }

    /// LMS parameters for height-for-age at `age_months`.
    ///
    /// # Errors
    /// Returns `ReferenceError::NotFound` if the cell does not exist.
    pub fn lookup_haz(&self, age_months: u32, gender: Gender) -> Result<LmsParams, ReferenceError> {
        self.cell(
            Indicator::HeightForAge,
            gender,
            Some(i64::from(age_months)),
            ReferenceKey::AgeMonths(age_months),
        )
    }

    /// LMS parameters for weight-for-age at `age_months`.
    ///
    /// # Errors
    /// Returns `ReferenceError::NotFound` if the cell does not exist.
    pub fn lookup_wfa(&self, age_months: u32, gender: Gender) -> Result<LmsParams, ReferenceError> {
        self.cell(
            Indicator::WeightForAge,
            gender,
            Some(i64::from(age_months)),
            ReferenceKey::AgeMonths(age_months),
        )
    }

    /// LMS parameters for weight-for-height at `height_cm`.
    ///
    /// The height is rounded to one decimal first; the rounded value must be
    /// a sampled cell (0.5 cm grid).
    ///
    /// # Errors
    /// Returns `ReferenceError::NotFound` if the cell does not exist.
    pub fn lookup_whz(&self, height_cm: f64, gender: Gender) -> Result<LmsParams, ReferenceError> {
        self.cell(
            Indicator::WeightForHeight,
            gender,
            height_slot(height_cm),
            ReferenceKey::HeightCm(round_height_cm(height_cm)),
        )
    }

    /// Cells of one table in ascending key order, with keys in table units
    /// (months or cm).
    pub fn cells(
        &self,
        indicator: Indicator,
        gender: Gender,
    ) -> impl Iterator<Item = (f64, &LmsParams)> + '_ {
        let scale = if indicator.keyed_by_height() {
            HEIGHT_KEY_SCALE
        } else {
            1.0
        };
        self.grids
            .get(&(indicator, gender))
            .into_iter()
            .flat_map(move |grid| grid.iter().map(move |(slot, lms)| (*slot as f64 / scale, lms)))
    }

    /// Number of cells loaded for one table.
    #[must_use]
    pub fn len(&self, indicator: Indicator, gender: Gender) -> usize {
        self.grids.get(&(indicator, gender)).map_or(0, BTreeMap::len)
    }

    #[must_use]
    pub fn is_loaded(&self, indicator: Indicator, gender: Gender) -> bool {
        self.grids.contains_key(&(indicator, gender))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ReferenceTable {
        let mut table = ReferenceTable::new();
        table
            .insert_records(
                Indicator::HeightForAge,
                Gender::Male,
                &[
                    ReferenceRecord::new(0.0, 1.0, 49.9, 0.038),
                    ReferenceRecord::new(24.0, 1.0, 85.0, 0.04),
                ],
            )
            .expect("Should load HAZ");
        table
            .insert_records(
                Indicator::WeightForHeight,
                Gender::Male,
                &[
                    ReferenceRecord::new(84.5, -0.35, 11.9, 0.08),
                    ReferenceRecord::new(85.0, 1.0, 12.0, 0.1),
                ],
            )
            .expect("Should load WHZ");
        table
    }

    #[test]
    fn test_exact_lookup() {
        let table = sample_table();
        let haz = table.lookup_haz(24, Gender::Male).expect("Should find");
        assert_eq!(haz, LmsParams::new(1.0, 85.0, 0.04));

        let whz = table.lookup_whz(85.0, Gender::Male).expect("Should find");
        assert_eq!(whz, LmsParams::new(1.0, 12.0, 0.1));
    }

    #[test]
    fn test_height_is_rounded_before_lookup() {
        let table = sample_table();
        assert!(table.lookup_whz(85.04, Gender::Male).is_ok());
        assert!(table.lookup_whz(84.95, Gender::Male).is_ok());
        assert_eq!(
            table.lookup_whz(84.46, Gender::Male).expect("Should find"),
            LmsParams::new(-0.35, 11.9, 0.08)
        );
    }

    #[test]
    fn test_height_rounding_follows_exact_value() {
        let table = sample_table();
        // 85.05 and 84.55 are stored just below the decimal half.
        assert_eq!(round_height_cm(85.05), 85.0);
        assert_eq!(
            table.lookup_whz(85.05, Gender::Male).expect("Should find"),
            LmsParams::new(1.0, 12.0, 0.1)
        );
        assert_eq!(
            table.lookup_whz(84.55, Gender::Male).expect("Should find"),
            LmsParams::new(-0.35, 11.9, 0.08)
        );
    }

    #[test]
    fn test_off_grid_height_is_not_interpolated() {
        let table = sample_table();
        let err = table.lookup_whz(84.7, Gender::Male).expect_err("Should fail");
        assert_eq!(
            err,
            ReferenceError::NotFound {
                indicator: Indicator::WeightForHeight,
                key: ReferenceKey::HeightCm(84.7),
                gender: Gender::Male,
            }
        );
        assert!(table.lookup_whz(f64::NAN, Gender::Male).is_err());
    }

    #[test]
    fn test_missing_cells() {
        let table = sample_table();
        assert!(table.lookup_haz(61, Gender::Male).is_err());
        assert!(table.lookup_haz(12, Gender::Male).is_err());
        // Gender partition never loaded
        assert!(table.lookup_haz(24, Gender::Female).is_err());
        // Indicator never loaded
        assert!(table.lookup_wfa(24, Gender::Male).is_err());
    }

    #[test]
    fn test_not_found_message_names_key_and_gender() {
        let table = sample_table();
        let err = table.lookup_haz(61, Gender::Female).expect_err("Should fail");
        assert_eq!(
            err.to_string(),
            "HAZ reference not found for age 61 months and gender female"
        );
    }

    #[test]
    fn test_duplicate_rows_rejected() {
        let mut table = ReferenceTable::new();
        let err = table
            .insert_records(
                Indicator::WeightForAge,
                Gender::Female,
                &[
                    ReferenceRecord::new(3.0, 0.1, 5.8, 0.12),
                    ReferenceRecord::new(3.0, 0.1, 5.9, 0.12),
                ],
            )
            .expect_err("Should fail");
        assert!(matches!(err, ReferenceError::DuplicateKey { .. }));
        assert!(!table.is_loaded(Indicator::WeightForAge, Gender::Female));
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let mut table = ReferenceTable::new();
        assert!(matches!(
            table.insert_records(
                Indicator::HeightForAge,
                Gender::Male,
                &[ReferenceRecord::new(1.5, 1.0, 55.0, 0.035)],
            ),
            Err(ReferenceError::InvalidKey { .. })
        ));
        assert!(matches!(
            table.insert_records(
                Indicator::WeightForHeight,
                Gender::Male,
                &[ReferenceRecord::new(45.25, 1.0, 2.4, 0.09)],
            ),
            Err(ReferenceError::InvalidKey { .. })
        ));
        assert!(matches!(
            table.insert_records(
                Indicator::WeightForAge,
                Gender::Male,
                &[ReferenceRecord::new(-1.0, 1.0, 3.3, 0.14)],
            ),
            Err(ReferenceError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let mut table = ReferenceTable::new();
        let err = table
            .insert_records(
                Indicator::WeightForAge,
                Gender::Male,
                &[ReferenceRecord::new(6.0, 0.1, 7.9, 0.0)],
            )
            .expect_err("Should fail");
        assert!(matches!(err, ReferenceError::InvalidParams { .. }));
    }

    #[test]
    fn test_table_loaded_once() {
        let mut table = sample_table();
        let err = table
            .insert_records(Indicator::HeightForAge, Gender::Male, &[])
            .expect_err("Should fail");
        assert_eq!(
            err,
            ReferenceError::AlreadyLoaded {
                indicator: Indicator::HeightForAge,
                gender: Gender::Male,
            }
        );
    }

    #[test]
    fn test_cells_are_ordered_in_table_units() {
        let table = sample_table();
        let keys: Vec<f64> = table
            .cells(Indicator::WeightForHeight, Gender::Male)
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec![84.5, 85.0]);
        assert_eq!(table.len(Indicator::HeightForAge, Gender::Male), 2);
        assert_eq!(table.cells(Indicator::WeightForAge, Gender::Male).count(), 0);
    }

    #[test]
    fn test_record_accepts_source_field_names() {
        let age: ReferenceRecord =
            serde_json::from_str(r#"{"umur": 24, "L": 1, "M": 87.1161, "S": 0.03507}"#)
                .expect("Should parse");
        assert_eq!(age.key, 24.0);
        assert_eq!(age.params.m, 87.1161);

        let height: ReferenceRecord =
            serde_json::from_str(r#"{"Height": 85.5, "L": -0.3521, "M": 11.9, "S": 0.08}"#)
                .expect("Should parse");
        assert_eq!(height.key, 85.5);
    }
}
