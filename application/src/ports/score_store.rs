//! Score store port
//!
//! Defines the interface to the local high-score table.

use quiz_domain::ScoreRecord;
use std::sync::Mutex;
use thiserror::Error;

/// Errors that can occur while writing the score table
#[derive(Error, Debug)]
pub enum ScoreStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Local persistence for the ordered list of score records.
///
/// Reads never fail: an absent or unparsable table is an empty list.
/// Writes fully replace the stored list.
pub trait ScoreStore: Send + Sync {
    /// Load all records in stored order
    fn load(&self) -> Vec<ScoreRecord>;

    /// Replace the stored list with `records`
    fn save(&self, records: &[ScoreRecord]) -> Result<(), ScoreStoreError>;

    /// Append one record, keeping the existing ones
    fn append(&self, record: ScoreRecord) -> Result<(), ScoreStoreError> {
        let mut records = self.load();
        records.push(record);
        self.save(&records)
    }
}

/// Score store kept in memory, for tests and throwaway sessions.
#[derive(Default)]
pub struct InMemoryScoreStore {
    records: Mutex<Vec<ScoreRecord>>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ScoreRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn load(&self) -> Vec<ScoreRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    fn save(&self, records: &[ScoreRecord]) -> Result<(), ScoreStoreError> {
        if let Ok(mut stored) = self.records.lock() {
            *stored = records.to_vec();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::Score;

    #[test]
    fn test_append_keeps_order() {
        let store = InMemoryScoreStore::new();
        store
            .append(ScoreRecord::new("1", "d1", "ada", Score::new(3)))
            .unwrap();
        store
            .append(ScoreRecord::new("2", "d2", "bob", Score::new(-1)))
            .unwrap();
        let names: Vec<_> = store.load().into_iter().map(|r| r.user_name).collect();
        assert_eq!(names, vec!["ada", "bob"]);
    }

    #[test]
    fn test_save_replaces() {
        let store =
            InMemoryScoreStore::with_records(vec![ScoreRecord::new("1", "d", "ada", Score::ZERO)]);
        store.save(&[]).unwrap();
        assert!(store.load().is_empty());
    }
}
