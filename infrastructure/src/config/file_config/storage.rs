//! Score storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};

/// Raw storage configuration from TOML
///
/// # Example
///
/// ```toml
/// [storage]
/// path = "~/.local/share/trivia-quiz/storage.json"
/// key = "quiz-scores"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Key-value storage file (default: platform data directory)
    pub path: Option<String>,
    /// Key holding the score list
    pub key: String,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: "quiz-scores".to_string(),
        }
    }
}
