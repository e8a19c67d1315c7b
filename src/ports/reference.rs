//! Reference source port: Trait for supplying WHO reference tables.
//!
//! This trait abstracts where the raw LMS tables come from (JSON files,
//! embedded data) from the application logic.

use crate::domain::{Gender, Indicator, ReferenceRecord};

/// Trait for loading raw reference tables at startup.
///
/// Sources are read once; the resulting `ReferenceTable` is immutable.
pub trait ReferenceSource: Send + Sync {
    /// Error type for source operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the rows of one (indicator, gender) table, in source order.
    ///
    /// # Returns
    /// `None` if the source has no such table.
    ///
    /// # Errors
    /// Returns error if the table exists but cannot be read or parsed.
    fn load_table(
        &self,
        indicator: Indicator,
        gender: Gender,
    ) -> Result<Option<Vec<ReferenceRecord>>, Self::Error>;

    /// Short description of the source, for logs.
    fn describe(&self) -> String;
}
