//! File-backed key-value store with local-storage semantics.
//!
//! The backing file is a single JSON object mapping keys to string values.
//! A missing or corrupt file reads as an empty store. Every write replaces
//! the file through a temporary sibling and a rename.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Key-value store persisted to one JSON file
#[derive(Debug, Clone)]
pub struct LocalKeyValueStore {
    path: PathBuf,
}

impl LocalKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `$XDG_DATA_HOME/trivia-quiz/storage.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("trivia-quiz").join("storage.json"))
    }

    /// Get the path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set_item(&self, key: &str, value: &str) -> io::Result<()> {
        let mut items = self.read_all();
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    pub fn remove_item(&self, key: &str) -> io::Result<()> {
        let mut items = self.read_all();
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!("Could not read {}: {}", self.path.display(), e);
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(
                "Ignoring unparsable storage file {}: {}",
                self.path.display(),
                e
            );
            BTreeMap::new()
        })
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(items).map_err(io::Error::other)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalKeyValueStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get_item("quiz-scores"), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalKeyValueStore::new(dir.path().join("nested").join("storage.json"));
        store.set_item("a", "1").unwrap();
        store.set_item("b", "2").unwrap();
        store.set_item("a", "3").unwrap();
        assert_eq!(store.get_item("a").as_deref(), Some("3"));
        assert_eq!(store.get_item("b").as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_file_reads_empty_and_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json at all").unwrap();

        let store = LocalKeyValueStore::new(&path);
        assert_eq!(store.get_item("a"), None);

        store.set_item("a", "1").unwrap();
        assert_eq!(store.get_item("a").as_deref(), Some("1"));
    }

    #[test]
    fn test_remove_item() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalKeyValueStore::new(dir.path().join("storage.json"));
        store.set_item("a", "1").unwrap();
        store.remove_item("a").unwrap();
        assert_eq!(store.get_item("a"), None);
        // removing an absent key is fine
        store.remove_item("a").unwrap();
    }
}
