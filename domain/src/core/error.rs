//! Domain error types

use super::question::QuestionKind;
use thiserror::Error;

/// Domain-level errors
///
/// Returned by the quiz reducer when an action is not valid in the current
/// state. A rejected action never changes the state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No questions to play")]
    NoQuestions,

    #[error("No question is active")]
    NoActiveQuestion,

    #[error("'{0}' is not an option for this question")]
    UnknownOption(String),

    #[error("Cannot {action} an option on a {kind}-choice question")]
    ControlMismatch {
        action: &'static str,
        kind: QuestionKind,
    },

    #[error("Select an answer before submitting")]
    EmptyAnswer,

    #[error("This question has already been answered")]
    AlreadyGraded,

    #[error("Submit an answer before moving on")]
    NotGraded,
}

impl DomainError {
    /// Check if this error comes from the post-submission lock
    pub fn is_locked(&self) -> bool {
        matches!(self, DomainError::AlreadyGraded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_mismatch_display() {
        let error = DomainError::ControlMismatch {
            action: "toggle",
            kind: QuestionKind::Single,
        };
        assert_eq!(
            error.to_string(),
            "Cannot toggle an option on a single-choice question"
        );
    }

    #[test]
    fn test_is_locked_check() {
        assert!(DomainError::AlreadyGraded.is_locked());
        assert!(!DomainError::EmptyAnswer.is_locked());
        assert!(!DomainError::NotGraded.is_locked());
        assert!(!DomainError::UnknownOption("x".to_string()).is_locked());
    }
}
