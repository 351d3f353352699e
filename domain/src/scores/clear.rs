//! Two-step "arm then confirm" control for clearing high scores
//!
//! ```text
//!          activate (scores exist)         activate
//!   Idle ──────────────────────────> Armed ──────────> Idle + Cleared
//!    ▲                                 │
//!    └──────── cancel / timeout ───────┘
//! ```

use std::time::{Duration, Instant};

/// State of the clear control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClearConfirmation {
    #[default]
    Idle,
    Armed { armed_at: Instant },
}

/// What an activation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearStep {
    /// First activation: waiting for confirmation
    Armed,
    /// Second activation: the caller must clear the store now
    Confirmed,
    /// Control is disabled (nothing to clear)
    Ignored,
}

impl ClearConfirmation {
    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed { .. })
    }

    /// Press the clear control.
    ///
    /// The idle control is disabled while there is nothing to clear; the
    /// armed control is always enabled.
    pub fn activate(&mut self, now: Instant, has_scores: bool) -> ClearStep {
        match self {
            Self::Idle if !has_scores => ClearStep::Ignored,
            Self::Idle => {
                *self = Self::Armed { armed_at: now };
                ClearStep::Armed
            }
            Self::Armed { .. } => {
                *self = Self::Idle;
                ClearStep::Confirmed
            }
        }
    }

    /// Disarm without clearing. Returns whether the control was armed.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.is_armed();
        *self = Self::Idle;
        was_armed
    }

    /// Disarm if armed for longer than `timeout`. Returns whether it disarmed.
    pub fn expire(&mut self, now: Instant, timeout: Duration) -> bool {
        match *self {
            Self::Armed { armed_at } if now.saturating_duration_since(armed_at) >= timeout => {
                *self = Self::Idle;
                true
            }
            _ => false,
        }
    }
}
