//! High-score table kept under a single storage key.

use super::local_store::LocalKeyValueStore;
use quiz_application::{ScoreStore, ScoreStoreError};
use quiz_domain::ScoreRecord;
use tracing::{debug, warn};

/// Storage key holding the serialized score list
pub const SCORES_KEY: &str = "quiz-scores";

/// [`ScoreStore`] adapter over a [`LocalKeyValueStore`] entry.
///
/// The entry holds a JSON array `[{id, date, userName, score}, ...]`.
pub struct LocalScoreStore {
    storage: LocalKeyValueStore,
    key: String,
}

impl LocalScoreStore {
    pub fn new(storage: LocalKeyValueStore) -> Self {
        Self::with_key(storage, SCORES_KEY)
    }

    pub fn with_key(storage: LocalKeyValueStore, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &LocalKeyValueStore {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl ScoreStore for LocalScoreStore {
    fn load(&self) -> Vec<ScoreRecord> {
        let Some(raw) = self.storage.get_item(&self.key) else {
            debug!("No scores stored under '{}'", self.key);
            return Vec::new();
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Ignoring unparsable scores under '{}': {}", self.key, e);
            Vec::new()
        })
    }

    fn save(&self, records: &[ScoreRecord]) -> Result<(), ScoreStoreError> {
        let raw = serde_json::to_string(records)?;
        self.storage.set_item(&self.key, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::Score;

    fn store_in(dir: &tempfile::TempDir) -> LocalScoreStore {
        LocalScoreStore::new(LocalKeyValueStore::new(dir.path().join("storage.json")))
    }

    #[test]
    fn test_absent_key_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).load().is_empty());
    }

    #[test]
    fn test_unparsable_value_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.storage().set_item(SCORES_KEY, "{broken").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_reads_records_written_by_other_clients() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .storage()
            .set_item(
                SCORES_KEY,
                r#"[{"id":1,"date":"1/2/2024","userName":"ada","score":9}]"#,
            )
            .unwrap();

        let records = store.load();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_name, "ada");
        assert_eq!(records[0].score, Score::new(9));
    }

    #[test]
    fn test_save_replaces_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .save(&[
                ScoreRecord::new("1", "d", "ada", Score::new(1)),
                ScoreRecord::new("2", "d", "bob", Score::new(2)),
            ])
            .unwrap();
        assert_eq!(store.load().len(), 2);

        store.save(&[]).unwrap();
        assert!(store.load().is_empty());
        assert_eq!(store.storage().get_item(SCORES_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_append_preserves_existing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .append(ScoreRecord::new("1", "d", "ada", Score::new(1)))
            .unwrap();
        store
            .append(ScoreRecord::new("2", "d", "bob", Score::new(-1)))
            .unwrap();
        let names: Vec<_> = store.load().into_iter().map(|r| r.user_name).collect();
        assert_eq!(names, vec!["ada", "bob"]);
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let kv = LocalKeyValueStore::new(dir.path().join("storage.json"));
        let default = LocalScoreStore::new(kv.clone());
        let other = LocalScoreStore::with_key(kv, "other-scores");

        other
            .save(&[ScoreRecord::new("1", "d", "ada", Score::new(1))])
            .unwrap();
        assert!(default.load().is_empty());
        assert_eq!(other.load().len(), 1);
    }
}
