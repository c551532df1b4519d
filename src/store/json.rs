use std::path::{Path, PathBuf};

use crate::models::{AnalysisRecord, CallRecord};

use super::{RecordStore, StoreError, latest_by_timestamp};

/// JSON-file-backed record store
///
/// Records are read from a JSON array file; analyses are appended to a
/// separate JSON array file, created on first insert. One process per
/// store, no locking; there is no consistency guarantee against
/// concurrent writers.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    records_path: PathBuf,
    analyses_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(records_path: impl Into<PathBuf>, analyses_path: impl Into<PathBuf>) -> Self {
        Self {
            records_path: records_path.into(),
            analyses_path: analyses_path.into(),
        }
    }

    fn read_records(&self) -> Result<Vec<CallRecord>, StoreError> {
        let content = std::fs::read_to_string(&self.records_path).map_err(|source| {
            StoreError::Io {
                path: self.records_path.clone(),
                source,
            }
        })?;

        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: self.records_path.clone(),
            source,
        })
    }

    fn read_analyses(&self) -> Result<Vec<AnalysisRecord>, StoreError> {
        if !self.analyses_path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.analyses_path).map_err(|source| {
            StoreError::Io {
                path: self.analyses_path.clone(),
                source,
            }
        })?;

        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: self.analyses_path.clone(),
            source,
        })
    }

    fn write_analyses(&self, analyses: &[AnalysisRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(analyses).map_err(|source| {
            StoreError::Malformed {
                path: self.analyses_path.clone(),
                source,
            }
        })?;

        std::fs::write(&self.analyses_path, json).map_err(|source| StoreError::Io {
            path: self.analyses_path.clone(),
            source,
        })
    }

    /// Path the analyses are written to
    pub fn analyses_path(&self) -> &Path {
        &self.analyses_path
    }
}

impl RecordStore for JsonFileStore {
    fn latest_record(&self) -> Result<Option<CallRecord>, StoreError> {
        Ok(latest_by_timestamp(self.read_records()?))
    }

    fn insert_analysis(&self, analysis: &AnalysisRecord) -> Result<(), StoreError> {
        let mut analyses = self.read_analyses()?;
        analyses.push(analysis.clone());
        self.write_analyses(&analyses)
    }
}
