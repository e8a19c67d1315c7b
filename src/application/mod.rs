//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the growth assessment use case.

mod assessment;

pub use assessment::{load_reference_table, AssessmentService};
