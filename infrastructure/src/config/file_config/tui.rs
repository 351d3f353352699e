//! TUI configuration from TOML (`[tui]` section)

use serde::{Deserialize, Serialize};

/// Raw TUI configuration from TOML
///
/// # Example
///
/// ```toml
/// [tui]
/// clear_confirm_timeout_secs = 5
/// tick_rate_ms = 250
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Seconds the armed "clear high scores" control waits for confirmation
    pub clear_confirm_timeout_secs: u64,
    /// Interval of the UI tick (flash expiry, confirmation timeout)
    pub tick_rate_ms: u64,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            clear_confirm_timeout_secs: 5,
            tick_rate_ms: 250,
        }
    }
}
