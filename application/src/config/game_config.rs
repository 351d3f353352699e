//! Game parameters for the use cases.
//!
//! [`GameConfig`] groups the static parameters that control
//! [`PlayQuizUseCase`](crate::use_cases::play_quiz::PlayQuizUseCase) and
//! [`HighScoresUseCase`](crate::use_cases::high_scores::HighScoresUseCase).

use quiz_domain::ScoringRules;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Name recorded when the player leaves the name field blank
pub const ANONYMOUS_PLAYER: &str = "Anonymous";

/// Game behavior parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Points subtracted for an incorrect answer.
    pub incorrect_penalty: i64,
    /// How long the armed "clear high scores" control waits for confirmation.
    pub clear_confirm_timeout: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            incorrect_penalty: ScoringRules::DEFAULT_PENALTY,
            clear_confirm_timeout: Duration::from_secs(5),
        }
    }
}

impl GameConfig {
    // ==================== Builder Methods ====================

    pub fn with_incorrect_penalty(mut self, penalty: i64) -> Self {
        self.incorrect_penalty = penalty;
        self
    }

    pub fn with_clear_confirm_timeout(mut self, timeout: Duration) -> Self {
        self.clear_confirm_timeout = timeout;
        self
    }

    /// Scoring rules handed to the quiz reducer
    pub fn scoring_rules(&self) -> ScoringRules {
        ScoringRules::with_penalty(self.incorrect_penalty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = GameConfig::default();
        assert_eq!(config.incorrect_penalty, 1);
        assert_eq!(config.clear_confirm_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_builder_chain() {
        let config = GameConfig::default()
            .with_incorrect_penalty(2)
            .with_clear_confirm_timeout(Duration::from_secs(10));
        assert_eq!(config.scoring_rules().incorrect_penalty, 2);
        assert_eq!(config.clear_confirm_timeout, Duration::from_secs(10));
    }
}
