//! Score accumulator and scoring rules

use serde::{Deserialize, Serialize};

/// Running score of one game. May go negative.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Score(i64);

impl Score {
    pub const ZERO: Score = Score(0);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Increase by `points`
    pub fn increment(self, points: i64) -> Self {
        Self(self.0.saturating_add(points))
    }

    /// Decrease by `points`
    pub fn decrement(self, points: i64) -> Self {
        Self(self.0.saturating_sub(points))
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Score deltas applied by the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    /// Points subtracted for an incorrect attempt
    pub incorrect_penalty: i64,
}

impl ScoringRules {
    pub const DEFAULT_PENALTY: i64 = 1;

    pub fn with_penalty(incorrect_penalty: i64) -> Self {
        Self { incorrect_penalty }
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            incorrect_penalty: Self::DEFAULT_PENALTY,
        }
    }
}
