//! In-memory adapter: ReferenceSource backed by records held in memory.
//!
//! Used when tables are embedded in the host application, and in tests.

use std::collections::HashMap;
use std::convert::Infallible;

use crate::domain::{Gender, Indicator, ReferenceRecord};
use crate::ports::ReferenceSource;

/// Reference tables supplied directly as records.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    tables: HashMap<(Indicator, Gender), Vec<ReferenceRecord>>,
}

impl InMemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) one table.
    #[must_use]
    pub fn with_table(
        mut self,
        indicator: Indicator,
        gender: Gender,
        records: impl Into<Vec<ReferenceRecord>>,
    ) -> Self {
        self.tables.insert((indicator, gender), records.into());
        self
    }
}

impl ReferenceSource for InMemorySource {
    type Error = Infallible;

    fn load_table(
        &self,
        indicator: Indicator,
        gender: Gender,
    ) -> Result<Option<Vec<ReferenceRecord>>, Self::Error> {
        Ok(self.tables.get(&(indicator, gender)).cloned())
    }

    fn describe(&self) -> String {
        format!("memory:{} tables", self.tables.len())
    }
}
