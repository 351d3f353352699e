//! Question source configuration from TOML (`[questions]` section)

use serde::{Deserialize, Serialize};

/// Raw question source configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionsConfig {
    /// JSON question file; the bundled set is used when unset
    pub path: Option<String>,
}
