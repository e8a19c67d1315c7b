//! Growth assessment output record.

use serde::{Deserialize, Serialize};

use super::category::{HazCategory, WhzCategory};
use super::chaining::DiagnosisResult;
use super::rules::Facts;

/// Classification of one measurement, handed to UI and persistence
/// collaborators.
///
/// `diagnosis`, `recommendation` and `rule_id` are all `None` when no rule
/// covers the band pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthAssessment {
    /// Height-for-age Z-score (2 decimals)
    pub haz_z: f64,

    /// Weight-for-height Z-score (2 decimals)
    pub whz_z: f64,

    pub haz_category: HazCategory,

    pub whz_category: WhzCategory,

    pub diagnosis: Option<String>,

    pub recommendation: Option<Vec<String>>,

    pub rule_id: Option<u32>,

    /// Rule evaluation trace, one `Rule #<id> → MATCH|skip` line per rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,

    pub assessed_at: chrono::DateTime<chrono::Utc>,
}

impl GrowthAssessment {
    #[must_use]
    pub fn new(
        haz_z: f64,
        whz_z: f64,
        haz_category: HazCategory,
        whz_category: WhzCategory,
        result: Option<DiagnosisResult>,
    ) -> Self {
        let (diagnosis, recommendation, rule_id) = match result {
            Some(r) => (Some(r.diagnosis), Some(r.recommendation), Some(r.rule_id)),
            None => (None, None, None),
        };

        Self {
            haz_z,
            whz_z,
            haz_category,
            whz_category,
            diagnosis,
            recommendation,
            rule_id,
            trace: None,
            assessed_at: chrono::Utc::now(),
        }
    }

    /// Attach the text rendering of a rule trace.
    #[must_use]
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    #[must_use]
    pub fn facts(&self) -> Facts {
        Facts::new(self.haz_category, self.whz_category)
    }

    /// Whether a rule fired.
    #[must_use]
    pub fn is_diagnosed(&self) -> bool {
        self.rule_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_assessment_serializes_nulls() {
        let assessment =
            GrowthAssessment::new(2.5, 0.0, HazCategory::Tall, WhzCategory::Normal, None);
        assert!(!assessment.is_diagnosed());

        let json = serde_json::to_value(&assessment).expect("Should serialize");
        assert_eq!(json["hazCategory"], "Tinggi Lebih");
        assert!(json["diagnosis"].is_null());
        assert!(json["recommendation"].is_null());
        assert!(json["ruleId"].is_null());
        assert!(json.get("trace").is_none());
    }

    #[test]
    fn test_matched_assessment_carries_result() {
        let result = DiagnosisResult {
            diagnosis: "Status Gizi Normal".to_string(),
            recommendation: vec!["Pertahankan pola makan seimbang.".to_string()],
            rule_id: 25,
        };
        let assessment =
            GrowthAssessment::new(0.0, 0.0, HazCategory::Normal, WhzCategory::Normal, Some(result))
                .with_trace("Rule #25 → MATCH");

        assert!(assessment.is_diagnosed());
        assert_eq!(assessment.facts(), Facts::new(HazCategory::Normal, WhzCategory::Normal));

        let json = serde_json::to_value(&assessment).expect("Should serialize");
        assert_eq!(json["ruleId"], 25);
        assert_eq!(json["whzZ"], 0.0);
        assert_eq!(json["trace"], "Rule #25 → MATCH");
    }
}
