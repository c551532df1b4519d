pub mod json;

pub use json::*;

use std::cell::RefCell;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::{AnalysisRecord, CallRecord};

/// Errors at the record-store boundary
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed store data in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A source/sink of call records and analysis documents
///
/// The pipeline reads exactly one record per run (the most recently
/// timestamped) and writes exactly one analysis.
pub trait RecordStore {
    /// The single most-recently-timestamped record, or `None` when the
    /// store is empty
    fn latest_record(&self) -> Result<Option<CallRecord>, StoreError>;

    /// Insert one analysis document
    fn insert_analysis(&self, analysis: &AnalysisRecord) -> Result<(), StoreError>;
}

/// Pick the most recently timestamped record from a batch.
///
/// Records without a timestamp sort earliest; ties keep the later
/// record in input order.
pub fn latest_by_timestamp(records: Vec<CallRecord>) -> Option<CallRecord> {
    use std::cmp::Ordering;

    let mut latest: Option<CallRecord> = None;
    for record in records {
        let newer = match latest.as_ref() {
            None => true,
            Some(current) => match (record.timestamp(), current.timestamp()) {
                (Some(a), Some(b)) => a.cmp_order(b) != Ordering::Less,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => true,
            },
        };
        if newer {
            latest = Some(record);
        }
    }
    latest
}

/// In-memory store, used for embedding and pipeline tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<CallRecord>,
    analyses: RefCell<Vec<AnalysisRecord>>,
}

impl MemoryStore {
    pub fn new(records: Vec<CallRecord>) -> Self {
        Self {
            records,
            analyses: RefCell::new(Vec::new()),
        }
    }

    /// Analyses inserted so far
    pub fn analyses(&self) -> Vec<AnalysisRecord> {
        self.analyses.borrow().clone()
    }
}

impl RecordStore for MemoryStore {
    fn latest_record(&self) -> Result<Option<CallRecord>, StoreError> {
        Ok(latest_by_timestamp(self.records.clone()))
    }

    fn insert_analysis(&self, analysis: &AnalysisRecord) -> Result<(), StoreError> {
        self.analyses.borrow_mut().push(analysis.clone());
        Ok(())
    }
}
