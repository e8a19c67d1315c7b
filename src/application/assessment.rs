//! Assessment service: Orchestrates growth classification.
//!
//! This service coordinates:
//! - Measurement validation
//! - Reference lookup
//! - Z-score computation and banding
//! - Rule matching and trace

use std::sync::Arc;

use crate::domain::{
    categorize_haz, categorize_whz, zscore, CurvePoint, Facts, ForwardChainer, Gender,
    GrowthAssessment, Indicator, Measurement, ReferenceTable, RuleBase, Trace,
};
use crate::ports::ReferenceSource;
use crate::GrowthError;

/// Build a reference table from every (indicator, gender) table of `source`.
///
/// All six tables must be present.
///
/// # Errors
/// Returns error if the source fails, a table is missing, or a table holds
/// invalid rows.
pub fn load_reference_table<S: ReferenceSource>(source: &S) -> Result<ReferenceTable, GrowthError> {
    tracing::info!("Loading reference tables from {}", source.describe());

    let mut table = ReferenceTable::new();
    for indicator in Indicator::ALL {
        for gender in Gender::ALL {
            let records = source
                .load_table(indicator, gender)
                .map_err(|e| GrowthError::Source(Box::new(e)))?
                .ok_or(GrowthError::MissingTable { indicator, gender })?;

            let count = table.insert_records(indicator, gender, &records)?;
            tracing::debug!("Loaded {} {} cells for {}", count, indicator, gender);
        }
    }

    tracing::info!("Reference tables loaded");
    Ok(table)
}

/// Service classifying child measurements.
///
/// Holds the reference table and rule base read-only; it is cheap to clone and
/// safe to share between threads.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    references: Arc<ReferenceTable>,
    rules: Arc<RuleBase>,
}

impl AssessmentService {
    /// Create a new assessment service.
    pub fn new(references: Arc<ReferenceTable>, rules: Arc<RuleBase>) -> Self {
        Self { references, rules }
    }

    /// Create a service using the built-in knowledge base.
    pub fn with_standard_rules(references: Arc<ReferenceTable>) -> Self {
        Self::new(references, RuleBase::shared_standard())
    }

    /// Load reference tables from `source` and use the built-in knowledge base.
    ///
    /// # Errors
    /// Returns error if the reference tables cannot be loaded.
    pub fn load<S: ReferenceSource>(source: &S) -> Result<Self, GrowthError> {
        let references = load_reference_table(source)?;
        let service = Self::with_standard_rules(Arc::new(references));

        let uncovered = service.rules.uncovered_combinations();
        if !uncovered.is_empty() {
            tracing::info!(
                "Knowledge base leaves {} band combinations without a diagnosis",
                uncovered.len()
            );
        }

        Ok(service)
    }

    #[must_use]
    pub fn references(&self) -> &ReferenceTable {
        &self.references
    }

    #[must_use]
    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }

    #[must_use]
    pub fn matcher(&self) -> ForwardChainer<'_> {
        ForwardChainer::new(&self.rules)
    }

    /// Classify one measurement.
    ///
    /// Performs the full pipeline:
    /// 1. Validate the measurement
    /// 2. Look up HAZ (by age) and WHZ (by rounded height) LMS cells
    /// 3. Compute and band both Z-scores
    /// 4. Match the band pair against the rule base and record the trace
    ///
    /// A missing reference cell aborts the attempt. No matching rule is not an
    /// error: the assessment then carries no diagnosis.
    ///
    /// # Errors
    /// Returns error if validation or a reference lookup fails.
    pub fn assess(&self, measurement: &Measurement) -> Result<GrowthAssessment, GrowthError> {
        measurement
            .validate()
            .map_err(|errors| GrowthError::Validation(errors.join("; ")))?;

        let gender = measurement.gender;
        let height_key = measurement.rounded_height_cm();

        tracing::debug!("Step 1: Looking up reference cells...");
        let haz_ref = self.references.lookup_haz(measurement.age_months, gender)?;
        let whz_ref = self.references.lookup_whz(height_key, gender)?;

        tracing::debug!("Step 2: Computing Z-scores...");
        let haz_z = zscore(measurement.height_cm, &haz_ref);
        let whz_z = zscore(measurement.weight_kg, &whz_ref);

        let facts = Facts::new(categorize_haz(haz_z), categorize_whz(whz_z));
        tracing::debug!("Step 3: Matching facts {}...", facts);

        let matcher = self.matcher();
        let result = matcher.match_facts(&facts);
        let trace = matcher.explain_trace(&facts);

        match &result {
            Some(r) => tracing::info!(
                "Assessment complete: HAZ={:.2} ({}), WHZ={:.2} ({}), rule #{}",
                haz_z,
                facts.haz,
                whz_z,
                facts.whz,
                r.rule_id
            ),
            None => tracing::warn!(
                "No rule covers {} (HAZ={:.2}, WHZ={:.2}); flag for expert review",
                facts,
                haz_z,
                whz_z
            ),
        }

        Ok(GrowthAssessment::new(haz_z, whz_z, facts.haz, facts.whz, result)
            .with_trace(trace.to_string()))
    }

    /// Rule trace for a band pair.
    #[must_use]
    pub fn explain(&self, facts: &Facts) -> Trace {
        self.matcher().explain_trace(facts)
    }

    /// Weight-for-age Z-score of a measurement.
    ///
    /// # Errors
    /// Returns error if validation or the reference lookup fails.
    pub fn weight_for_age_z(&self, measurement: &Measurement) -> Result<f64, GrowthError> {
        measurement
            .validate()
            .map_err(|errors| GrowthError::Validation(errors.join("; ")))?;

        let wfa_ref = self
            .references
            .lookup_wfa(measurement.age_months, measurement.gender)?;
        Ok(zscore(measurement.weight_kg, &wfa_ref))
    }

    /// SD -3..+3 lines of one reference table, in key order.
    ///
    /// # Errors
    /// Returns error if the table was never loaded.
    pub fn reference_curve(
        &self,
        indicator: Indicator,
        gender: Gender,
    ) -> Result<Vec<CurvePoint>, GrowthError> {
        if !self.references.is_loaded(indicator, gender) {
            return Err(GrowthError::MissingTable { indicator, gender });
        }

        Ok(self
            .references
            .cells(indicator, gender)
            .map(|(key, lms)| CurvePoint::from_lms(key, lms))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySource;
    use crate::domain::{HazCategory, ReferenceError, ReferenceRecord, WhzCategory};

    fn full_source() -> InMemorySource {
        let mut source = InMemorySource::new();
        for gender in Gender::ALL {
            source = source
                .with_table(
                    Indicator::HeightForAge,
                    gender,
                    vec![
                        ReferenceRecord::new(23.0, 1.0, 84.0, 0.04),
                        ReferenceRecord::new(24.0, 1.0, 85.0, 0.04),
                    ],
                )
                .with_table(
                    Indicator::WeightForAge,
                    gender,
                    vec![ReferenceRecord::new(24.0, 0.0, 12.0, 0.1)],
                )
                .with_table(
                    Indicator::WeightForHeight,
                    gender,
                    vec![
                        ReferenceRecord::new(84.5, 1.0, 11.8, 0.1),
                        ReferenceRecord::new(85.0, 1.0, 12.0, 0.1),
                    ],
                );
        }
        source
    }

    fn create_test_service() -> AssessmentService {
        AssessmentService::load(&full_source()).expect("Should load")
    }

    #[test]
    fn test_end_to_end_normal() {
        let service = create_test_service();
        let assessment = service
            .assess(&Measurement::new(24, Gender::Male, 85.0, 12.0))
            .expect("Should assess");

        assert_eq!(assessment.haz_z, 0.0);
        assert_eq!(assessment.whz_z, 0.0);
        assert_eq!(assessment.haz_category, HazCategory::Normal);
        assert_eq!(assessment.whz_category, WhzCategory::Normal);
        assert_eq!(assessment.rule_id, Some(25));
        assert_eq!(assessment.diagnosis.as_deref(), Some("Status Gizi Normal"));
        assert_eq!(assessment.recommendation.as_ref().map(Vec::len), Some(5));

        let trace = assessment.trace.expect("Should carry trace");
        assert_eq!(trace.lines().count(), 28);
        assert_eq!(trace.lines().filter(|l| l.ends_with("MATCH")).count(), 1);
        assert!(trace.contains("Rule #25 → MATCH"));
    }

    #[test]
    fn test_off_grid_height_aborts() {
        let service = create_test_service();
        let err = service
            .assess(&Measurement::new(24, Gender::Female, 78.2, 9.4))
            .expect_err("Should fail");
        assert!(matches!(
            err,
            GrowthError::Reference(ReferenceError::NotFound {
                indicator: Indicator::WeightForHeight,
                ..
            })
        ));
    }

    #[test]
    fn test_height_below_decimal_half_uses_lower_cell() {
        let service = create_test_service();
        let assessment = service
            .assess(&Measurement::new(24, Gender::Male, 85.05, 12.0))
            .expect("Should assess");
        assert_eq!(assessment.whz_z, 0.0);
        assert_eq!(assessment.rule_id, Some(25));

        let err = service
            .assess(&Measurement::new(24, Gender::Male, 85.55, 12.0))
            .expect_err("Should fail");
        assert!(matches!(
            err,
            GrowthError::Reference(ReferenceError::NotFound {
                key: crate::domain::ReferenceKey::HeightCm(h),
                ..
            }) if h == 85.5
        ));
    }

    #[test]
    fn test_wasted_child() {
        let service = create_test_service();
        // 84.96 cm rounds onto the 85.0 cell.
        // HAZ = (84.96 / 85 - 1) / 0.04 = -0.01, WHZ = (9.4 / 12 - 1) / 0.1 = -2.17
        let assessment = service
            .assess(&Measurement::new(24, Gender::Female, 84.96, 9.4))
            .expect("Should assess");
        assert_eq!(assessment.haz_z, -0.01);
        assert_eq!(assessment.whz_z, -2.17);
        assert_eq!(assessment.haz_category, HazCategory::Normal);
        assert_eq!(assessment.whz_category, WhzCategory::ModeratelyWasted);
        assert_eq!(assessment.rule_id, Some(23));
    }

    #[test]
    fn test_tall_child_has_no_diagnosis() {
        let source = full_source().with_table(
            Indicator::WeightForHeight,
            Gender::Male,
            vec![ReferenceRecord::new(92.0, 1.0, 13.5, 0.1)],
        );
        let service = AssessmentService::load(&source).expect("Should load");
        // HAZ = (92 / 85 - 1) / 0.04 = 2.06
        let assessment = service
            .assess(&Measurement::new(24, Gender::Male, 92.0, 13.5))
            .expect("Should assess");

        assert_eq!(assessment.haz_z, 2.06);
        assert_eq!(assessment.haz_category, HazCategory::Tall);
        assert_eq!(assessment.whz_category, WhzCategory::Normal);
        assert!(!assessment.is_diagnosed());
        assert!(assessment.diagnosis.is_none());
        assert!(assessment.recommendation.is_none());

        let trace = service.explain(&assessment.facts());
        assert_eq!(trace.len(), 28);
        assert_eq!(trace.matched_rule(), None);
        assert!(!assessment.trace.expect("Should carry trace").contains("MATCH"));
    }

    #[test]
    fn test_missing_age_cell_aborts() {
        let service = create_test_service();
        let err = service
            .assess(&Measurement::new(25, Gender::Male, 85.0, 12.0))
            .expect_err("Should fail");
        assert_eq!(
            err.to_string(),
            "HAZ reference not found for age 25 months and gender male"
        );
    }

    #[test]
    fn test_invalid_measurement_rejected_before_lookup() {
        let service = create_test_service();
        let err = service
            .assess(&Measurement::new(24, Gender::Male, 0.0, -3.0))
            .expect_err("Should fail");
        match err {
            GrowthError::Validation(msg) => {
                assert!(msg.contains("Height"));
                assert!(msg.contains("Weight"));
            }
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_weight_for_age() {
        let service = create_test_service();
        let z = service
            .weight_for_age_z(&Measurement::new(24, Gender::Female, 85.0, 12.0))
            .expect("Should compute");
        assert_eq!(z, 0.0);

        assert!(service
            .weight_for_age_z(&Measurement::new(36, Gender::Female, 85.0, 12.0))
            .is_err());
    }

    #[test]
    fn test_reference_curve() {
        let service = create_test_service();
        let curve = service
            .reference_curve(Indicator::HeightForAge, Gender::Male)
            .expect("Should build");
        assert_eq!(curve.len(), 2);
        assert_eq!(curve[0].key, 23.0);
        assert_eq!(curve[1].median(), 85.0);
    }

    #[test]
    fn test_load_requires_every_table() {
        let source = InMemorySource::new().with_table(
            Indicator::HeightForAge,
            Gender::Male,
            vec![ReferenceRecord::new(24.0, 1.0, 85.0, 0.04)],
        );
        let err = AssessmentService::load(&source).expect_err("Should fail");
        assert!(matches!(
            err,
            GrowthError::MissingTable {
                indicator: Indicator::HeightForAge,
                gender: Gender::Female,
            }
        ));
    }

    #[test]
    fn test_services_share_one_standard_rule_base() {
        let first = create_test_service();
        let second = create_test_service();
        assert!(Arc::ptr_eq(&first.rules, &second.rules));
        assert!(std::ptr::eq(first.rules(), RuleBase::standard()));
    }

    #[test]
    fn test_service_is_shareable_across_threads() {
        let service = create_test_service();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let service = service.clone();
                std::thread::spawn(move || {
                    service
                        .assess(&Measurement::new(24, Gender::Male, 85.0, 12.0))
                        .map(|a| a.rule_id)
                })
            })
            .collect();

        for handle in handles {
            let rule_id = handle.join().expect("Thread should finish").expect("Should assess");
            assert_eq!(rule_id, Some(25));
        }
    }
}
