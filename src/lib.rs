//! # Growthguard
//!
//! WHO growth-standard classification and nutritional-status rule engine for
//! children aged 0-60 months.
//!
//! This crate provides:
//! - Exact (non-interpolated) LMS reference lookup for height-for-age,
//!   weight-for-age and weight-for-height
//! - LMS Z-scores and their clinical bands (HAZ, WHZ)
//! - A forward-chaining matcher over a 28-rule knowledge base, with an
//!   explainable per-rule trace
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types and pure logic (LMS, bands, reference tables, rules)
//! - `ports`: Trait definitions for supplying reference data
//! - `adapters`: Concrete reference sources (JSON directory, in-memory)
//! - `application`: The assessment use case

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use application::AssessmentService;
pub use domain::{
    DiagnosisResult, Facts, Gender, GrowthAssessment, HazCategory, Measurement, Trace,
    WhzCategory,
};

/// Result type for Growthguard operations
pub type Result<T> = std::result::Result<T, GrowthError>;

/// Main error type for Growthguard
#[derive(Debug, thiserror::Error)]
pub enum GrowthError {
    #[error(transparent)]
    Reference(#[from] domain::ReferenceError),

    #[error("Invalid rule base: {0}")]
    Rules(#[from] domain::RuleBaseError),

    #[error("Invalid measurement: {0}")]
    Validation(String),

    #[error(transparent)]
    UnsupportedGender(#[from] domain::UnsupportedGender),

    #[error("Reference source has no {indicator} table for {gender}")]
    MissingTable {
        indicator: domain::Indicator,
        gender: domain::Gender,
    },

    #[error("Reference source failed: {0}")]
    Source(Box<dyn std::error::Error + Send + Sync>),
}
