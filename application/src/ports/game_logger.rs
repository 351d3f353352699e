//! Port for structured game-event logging.
//!
//! Defines the [`GameLogger`] trait for recording a game transcript to a
//! machine-readable log. `tracing` stays responsible for diagnostics; this
//! port only sees the events a player would recognise.

use serde::Serialize;
use serde_json::Value;

/// What happened in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEventKind {
    GameStarted,
    AnswerGraded,
    QuestionAdvanced,
    GameFinished,
    ScoresCleared,
}

impl GameEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GameStarted => "game_started",
            Self::AnswerGraded => "answer_graded",
            Self::QuestionAdvanced => "question_advanced",
            Self::GameFinished => "game_finished",
            Self::ScoresCleared => "scores_cleared",
        }
    }
}

impl std::fmt::Display for GameEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transcript entry
#[derive(Debug, Clone)]
pub struct GameEvent {
    pub kind: GameEventKind,
    /// Player the event belongs to; `None` for table-wide events
    pub player: Option<String>,
    /// Event-specific fields
    pub payload: Value,
}

impl GameEvent {
    pub fn new(kind: GameEventKind, payload: Value) -> Self {
        Self {
            kind,
            player: None,
            payload,
        }
    }

    pub fn for_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }
}

/// Port for logging game events to a structured log.
///
/// `log` is synchronous and non-fallible; logging failures are ignored.
pub trait GameLogger: Send + Sync {
    fn log(&self, event: GameEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoGameLogger;

impl GameLogger for NoGameLogger {
    fn log(&self, _event: GameEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_snake_case() {
        for kind in [
            GameEventKind::GameStarted,
            GameEventKind::AnswerGraded,
            GameEventKind::QuestionAdvanced,
            GameEventKind::GameFinished,
            GameEventKind::ScoresCleared,
        ] {
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                Value::String(kind.as_str().to_string())
            );
        }
    }

    #[test]
    fn test_for_player_sets_owner() {
        let event = GameEvent::new(GameEventKind::GameFinished, serde_json::json!({"score": 3}))
            .for_player("ada");
        assert_eq!(event.player.as_deref(), Some("ada"));
        assert!(GameEvent::new(GameEventKind::ScoresCleared, Value::Null)
            .player
            .is_none());
    }
}
