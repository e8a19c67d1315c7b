//! Domain layer: Core growth-classification types and logic.
//!
//! Pure Rust with no I/O. Reference tables and the rule base are built once
//! and only read afterwards.

mod assessment;
pub mod category;
pub mod chaining;
pub mod curve;
pub mod lms;
mod measurement;
pub mod reference;
pub mod rules;

pub use assessment::GrowthAssessment;
pub use category::{categorize_haz, categorize_whz, HazCategory, WhzCategory};
pub use chaining::{DiagnosisResult, ForwardChainer, Trace, TraceEntry};
pub use curve::CurvePoint;
pub use lms::{zscore, LmsParams};
pub use measurement::{Gender, Measurement, UnsupportedGender};
pub use reference::{Indicator, ReferenceError, ReferenceKey, ReferenceRecord, ReferenceTable};
pub use rules::{Facts, Rule, RuleBase, RuleBaseError};
