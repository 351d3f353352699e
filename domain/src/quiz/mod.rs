//! Quiz play: candidate answers, grading, scoring and progression.

pub mod candidate;
pub mod grading;
pub mod score;
pub mod state;

pub use candidate::CandidateAnswer;
pub use grading::{GradingResult, grade};
pub use score::{Score, ScoringRules};
pub use state::{QuizAction, QuizEvent, QuizState, Transition};
