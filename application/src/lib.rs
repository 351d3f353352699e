//! Application layer for trivia-quiz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ANONYMOUS_PLAYER, GameConfig};
pub use ports::{
    game_logger::{GameEvent, GameEventKind, GameLogger, NoGameLogger},
    question_source::{QuestionSource, QuestionSourceError, StaticQuestionSource},
    score_store::{InMemoryScoreStore, ScoreStore, ScoreStoreError},
};
pub use use_cases::high_scores::HighScoresUseCase;
pub use use_cases::play_quiz::{PlayQuizError, PlayQuizUseCase, QuizOutcome};
