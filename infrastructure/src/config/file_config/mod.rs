//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod game;
mod logging;
mod output;
mod questions;
mod storage;
mod tui;

pub use game::FileGameConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use questions::FileQuestionsConfig;
pub use storage::FileStorageConfig;
pub use tui::FileTuiConfig;

use quiz_application::GameConfig;
use quiz_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Scoring and player settings
    pub game: FileGameConfig,
    /// Question source
    pub questions: FileQuestionsConfig,
    /// Score persistence
    pub storage: FileStorageConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.game.incorrect_penalty < 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidValue {
                    field: "game.incorrect_penalty".to_string(),
                    value: self.game.incorrect_penalty.to_string(),
                },
                format!(
                    "game.incorrect_penalty: {} is negative, wrong answers will add points",
                    self.game.incorrect_penalty
                ),
            ));
        }

        if self.storage.key.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "storage.key".to_string(),
                },
                "storage.key: must not be empty",
            ));
        }

        if self.tui.clear_confirm_timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidValue {
                    field: "tui.clear_confirm_timeout_secs".to_string(),
                    value: "0".to_string(),
                },
                "tui.clear_confirm_timeout_secs: 0 disarms the clear control on the next tick",
            ));
        }

        if self.tui.tick_rate_ms == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidValue {
                    field: "tui.tick_rate_ms".to_string(),
                    value: "0".to_string(),
                },
                "tui.tick_rate_ms: must be greater than 0",
            ));
        }

        if let Some(path) = self.questions_path()
            && !path.exists()
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingFile {
                    field: "questions.path".to_string(),
                    path: path.display().to_string(),
                },
                format!("questions.path: {} does not exist", path.display()),
            ));
        }

        issues
    }

    /// Application-level game settings
    pub fn game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_incorrect_penalty(self.game.incorrect_penalty)
            .with_clear_confirm_timeout(Duration::from_secs(self.tui.clear_confirm_timeout_secs))
    }

    /// Interval of the TUI tick, never zero
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tui.tick_rate_ms.max(1))
    }

    pub fn questions_path(&self) -> Option<PathBuf> {
        self.questions.path.as_deref().map(expand_home)
    }

    pub fn storage_path(&self) -> Option<PathBuf> {
        self.storage.path.as_deref().map(expand_home)
    }

    pub fn game_log_path(&self) -> Option<PathBuf> {
        self.logging.game_log.as_deref().map(expand_home)
    }

    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.logging.file.as_deref().map(expand_home)
    }
}

/// Expand a leading `~/` to the home directory
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
