//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving structured game events (disabled when unset)
    pub game_log: Option<String>,
    /// Diagnostic log file used while the TUI owns the terminal
    pub file: Option<String>,
}
