//! Domain layer for trivia-quiz
//!
//! This crate contains the quiz rules: questions, grading, scoring,
//! progression and the high-score clear control. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Grading
//!
//! A [`CandidateAnswer`] is compared with a [`Question`]'s correct answer:
//!
//! - **Single-choice**: correct iff exactly the one correct option is selected
//! - **Multi-choice**: correct iff the selection equals the correct set
//!
//! ## Quiz reducer
//!
//! [`QuizState::reduce`] is the only way game state changes:
//! `(state, action) -> (state, outcome, redirect)`.

pub mod config;
pub mod core;
pub mod navigation;
pub mod quiz;
pub mod scores;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat};
pub use core::{
    error::DomainError,
    question::{CorrectAnswer, Question, QuestionKind},
    validation::{QuestionIssue, QuestionIssueCode, Severity},
};
pub use navigation::View;
pub use quiz::{
    CandidateAnswer, GradingResult, QuizAction, QuizEvent, QuizState, Score, ScoringRules,
    Transition, grade,
};
pub use scores::{ClearConfirmation, ClearStep, RecordId, ScoreRecord};
