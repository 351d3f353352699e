//! Game configuration from TOML (`[game]` section)

use serde::{Deserialize, Serialize};

/// Raw game configuration from TOML
///
/// # Example
///
/// ```toml
/// [game]
/// incorrect_penalty = 1
/// default_user = "ada"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Points subtracted for an incorrect answer (default: 1)
    pub incorrect_penalty: i64,
    /// Player name pre-filled on the home screen
    pub default_user: Option<String>,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            incorrect_penalty: 1,
            default_user: None,
        }
    }
}
