//! JSON adapter: Implementation of ReferenceSource over a directory of
//! WHO table exports.
//!
//! Expected layout (one JSON array of `{ key, L, M, S }` rows per file):
//!
//! ```text
//! <dir>/hfa_boys.json  <dir>/hfa_girls.json
//! <dir>/wfa_boys.json  <dir>/wfa_girls.json
//! <dir>/wfh_boys.json  <dir>/wfh_girls.json
//! ```
//!
//! A missing file is reported as an absent table; the service decides whether
//! that is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Gender, Indicator, ReferenceRecord};
use crate::ports::ReferenceSource;

/// Error type for the JSON reference source.
#[derive(Debug, thiserror::Error)]
pub enum JsonSourceError {
    #[error("Reference directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reference tables stored as JSON files in one directory.
#[derive(Debug, Clone)]
pub struct JsonDirectorySource {
    dir: PathBuf,
}

impl JsonDirectorySource {
    /// Create a source reading from `dir`.
    ///
    /// # Errors
    /// Returns error if `dir` is not a directory.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, JsonSourceError> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.is_dir() {
            return Err(JsonSourceError::MissingDirectory(dir));
        }
        Ok(Self { dir })
    }

    /// File name of one table, e.g. `wfh_girls.json`.
    #[must_use]
    pub fn file_name(indicator: Indicator, gender: Gender) -> String {
        format!("{}_{}.json", indicator.table_stem(), gender.table_suffix())
    }

    #[must_use]
    pub fn table_path(&self, indicator: Indicator, gender: Gender) -> PathBuf {
        self.dir.join(Self::file_name(indicator, gender))
    }
}

impl ReferenceSource for JsonDirectorySource {
    type Error = JsonSourceError;

    fn load_table(
        &self,
        indicator: Indicator,
        gender: Gender,
    ) -> Result<Option<Vec<ReferenceRecord>>, Self::Error> {
        let path = self.table_path(indicator, gender);
        if !path.exists() {
            tracing::debug!("No {} table at {}", indicator, path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|source| JsonSourceError::Io {
            path: path.clone(),
            source,
        })?;
        let records: Vec<ReferenceRecord> = serde_json::from_str(&content)
            .map_err(|source| JsonSourceError::Parse { path: path.clone(), source })?;

        tracing::debug!("Read {} rows from {}", records.len(), path.display());
        Ok(Some(records))
    }

    fn describe(&self) -> String {
        format!("json:{}", self.dir.display())
    }
}
