//! Clinical bands for height-for-age and weight-for-height Z-scores.
//!
//! Lower bounds are inclusive unless noted on the variant. A Z-score of
//! exactly -2.00 is never placed in the more severe band.

use serde::{Deserialize, Serialize};

/// Height-for-age (HAZ) band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HazCategory {
    /// z < -3
    #[serde(rename = "Stunting Berat")]
    SeverelyStunted,
    /// -3 <= z < -2
    #[serde(rename = "Stunting Sedang")]
    ModeratelyStunted,
    /// -2 <= z < -1
    #[serde(rename = "Risiko Stunting")]
    StuntingRisk,
    /// -1 <= z <= 2
    #[serde(rename = "Normal")]
    Normal,
    /// z > 2
    #[serde(rename = "Tinggi Lebih")]
    Tall,
}

impl HazCategory {
    /// Every band, most severe first.
    pub const ALL: [Self; 5] = [
        Self::SeverelyStunted,
        Self::ModeratelyStunted,
        Self::StuntingRisk,
        Self::Normal,
        Self::Tall,
    ];

    /// Band for a HAZ Z-score. Total over all `f64`; NaN lands in `Tall`.
    #[must_use]
    pub fn from_z(z: f64) -> Self {
        if z < -3.0 {
            Self::SeverelyStunted
        } else if z < -2.0 {
            Self::ModeratelyStunted
        } else if z < -1.0 {
            Self::StuntingRisk
        } else if z <= 2.0 {
            Self::Normal
        } else {
            Self::Tall
        }
    }

    /// Clinical label as used in the knowledge base.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SeverelyStunted => "Stunting Berat",
            Self::ModeratelyStunted => "Stunting Sedang",
            Self::StuntingRisk => "Risiko Stunting",
            Self::Normal => "Normal",
            Self::Tall => "Tinggi Lebih",
        }
    }
}

impl std::fmt::Display for HazCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Weight-for-height (WHZ) band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WhzCategory {
    /// z < -3
    #[serde(rename = "Gizi Buruk Akut (Kurus Berat)")]
    SeverelyWasted,
    /// -3 <= z < -2
    #[serde(rename = "Gizi Buruk (Kurus Sedang)")]
    ModeratelyWasted,
    /// -2 <= z < -1
    #[serde(rename = "Risiko Kurus")]
    WastingRisk,
    /// -1 <= z <= 1
    #[serde(rename = "Normal")]
    Normal,
    /// 1 < z <= 2
    #[serde(rename = "Risiko Berat Badan Lebih")]
    OverweightRisk,
    /// 2 < z <= 3
    #[serde(rename = "Berat Badan Lebih")]
    Overweight,
    /// z > 3
    #[serde(rename = "Obesitas")]
    Obese,
}

impl WhzCategory {
    /// Every band, most wasted first.
    pub const ALL: [Self; 7] = [
        Self::SeverelyWasted,
        Self::ModeratelyWasted,
        Self::WastingRisk,
        Self::Normal,
        Self::OverweightRisk,
        Self::Overweight,
        Self::Obese,
    ];

    /// Band for a WHZ Z-score. Total over all `f64`; NaN lands in `Obese`.
    #[must_use]
    pub fn from_z(z: f64) -> Self {
        if z < -3.0 {
            Self::SeverelyWasted
        } else if z < -2.0 {
            Self::ModeratelyWasted
        } else if z < -1.0 {
            Self::WastingRisk
        } else if z <= 1.0 {
            Self::Normal
        } else if z <= 2.0 {
            Self::OverweightRisk
        } else if z <= 3.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Clinical label as used in the knowledge base.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SeverelyWasted => "Gizi Buruk Akut (Kurus Berat)",
            Self::ModeratelyWasted => "Gizi Buruk (Kurus Sedang)",
            Self::WastingRisk => "Risiko Kurus",
            Self::Normal => "Normal",
            Self::OverweightRisk => "Risiko Berat Badan Lebih",
            Self::Overweight => "Berat Badan Lebih",
            Self::Obese => "Obesitas",
        }
    }
}

impl std::fmt::Display for WhzCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorize a height-for-age Z-score.
#[must_use]
pub fn categorize_haz(z: f64) -> HazCategory {
    HazCategory::from_z(z)
}

/// Categorize a weight-for-height Z-score.
#[must_use]
pub fn categorize_whz(z: f64) -> WhzCategory {
    WhzCategory::from_z(z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haz_boundaries() {
        assert_eq!(categorize_haz(-3.01), HazCategory::SeverelyStunted);
        assert_eq!(categorize_haz(-3.0), HazCategory::ModeratelyStunted);
        assert_eq!(categorize_haz(-2.01), HazCategory::ModeratelyStunted);
        assert_eq!(categorize_haz(-2.0), HazCategory::StuntingRisk);
        assert_eq!(categorize_haz(-1.01), HazCategory::StuntingRisk);
        assert_eq!(categorize_haz(-1.0), HazCategory::Normal);
        assert_eq!(categorize_haz(2.0), HazCategory::Normal);
        assert_eq!(categorize_haz(2.01), HazCategory::Tall);
    }

    #[test]
    fn test_whz_boundaries() {
        assert_eq!(categorize_whz(-3.01), WhzCategory::SeverelyWasted);
        assert_eq!(categorize_whz(-3.0), WhzCategory::ModeratelyWasted);
        assert_eq!(categorize_whz(-2.0), WhzCategory::WastingRisk);
        assert_eq!(categorize_whz(-1.0), WhzCategory::Normal);
        assert_eq!(categorize_whz(1.0), WhzCategory::Normal);
        assert_eq!(categorize_whz(1.01), WhzCategory::OverweightRisk);
        assert_eq!(categorize_whz(2.0), WhzCategory::OverweightRisk);
        assert_eq!(categorize_whz(2.01), WhzCategory::Overweight);
        assert_eq!(categorize_whz(3.0), WhzCategory::Overweight);
        assert_eq!(categorize_whz(3.01), WhzCategory::Obese);
    }

    #[test]
    fn test_categorizers_are_total() {
        for z in [f64::NEG_INFINITY, -1e9, 0.0, 1e9, f64::INFINITY] {
            let _ = categorize_haz(z);
            let _ = categorize_whz(z);
        }
        assert_eq!(categorize_haz(f64::NEG_INFINITY), HazCategory::SeverelyStunted);
        assert_eq!(categorize_whz(f64::INFINITY), WhzCategory::Obese);
        assert_eq!(categorize_haz(f64::NAN), HazCategory::Tall);
        assert_eq!(categorize_whz(f64::NAN), WhzCategory::Obese);
    }

    #[test]
    fn test_bands_are_monotonic() {
        let mut z = -5.0;
        let mut last_haz = HazCategory::SeverelyStunted;
        let mut last_whz = WhzCategory::SeverelyWasted;
        while z <= 5.0 {
            let haz = categorize_haz(z);
            let whz = categorize_whz(z);
            assert!(haz >= last_haz, "HAZ band went backwards at z={z}");
            assert!(whz >= last_whz, "WHZ band went backwards at z={z}");
            last_haz = haz;
            last_whz = whz;
            z += 0.01;
        }
    }

    #[test]
    fn test_labels_match_serde() {
        for haz in HazCategory::ALL {
            let json = serde_json::to_string(&haz).expect("Should serialize");
            assert_eq!(json, format!("\"{}\"", haz.label()));
        }
        for whz in WhzCategory::ALL {
            let json = serde_json::to_string(&whz).expect("Should serialize");
            assert_eq!(json, format!("\"{}\"", whz.label()));
            let back: WhzCategory = serde_json::from_str(&json).expect("Should parse");
            assert_eq!(back, whz);
        }
    }
}
