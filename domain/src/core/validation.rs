//! Consistency checks for loaded questions.
//!
//! Grading never fails on a malformed question: it classifies the attempt as
//! incorrect. These checks exist so loaders can warn about questions that can
//! never be answered correctly.
//!
//! # Examples
//!
//! ```
//! use quiz_domain::Question;
//!
//! let question = Question::single("Pick B", ["A", "B", "C"], "B", 5);
//! assert!(question.validate().is_empty());
//! ```

use super::question::{CorrectAnswer, Question, QuestionKind};
use std::collections::HashSet;

/// Severity level of a question issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The question cannot be played at all.
    Error,
    /// The question can be played but may never grade as correct.
    Warning,
}

/// Identifies a specific question issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionIssueCode {
    /// Declared type does not match the correct-answer representation.
    KindMismatch { kind: QuestionKind },
    /// A correct answer is not among the answer options.
    CorrectAnswerNotAnOption { answer: String },
    /// The same option text appears more than once.
    DuplicateOption { option: String },
    /// A multi-choice question lists the same correct answer more than once.
    DuplicateCorrectAnswer { answer: String },
    /// A multi-choice question lists no correct answers.
    EmptyCorrectSet,
    /// The question has no answer options.
    NoOptions,
}

/// A detected issue in a question.
#[derive(Debug, Clone)]
pub struct QuestionIssue {
    pub severity: Severity,
    pub code: QuestionIssueCode,
    pub message: String,
}

impl QuestionIssue {
    fn warning(code: QuestionIssueCode, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message,
        }
    }
}

impl Question {
    /// Validate this question, returning all detected issues.
    pub fn validate(&self) -> Vec<QuestionIssue> {
        let mut issues = Vec::new();

        if self.answers().is_empty() {
            issues.push(QuestionIssue {
                severity: Severity::Error,
                code: QuestionIssueCode::NoOptions,
                message: format!("'{}' has no answer options", self.text()),
            });
        }

        let mut seen = HashSet::new();
        for option in self.answers() {
            if !seen.insert(option.as_str()) {
                issues.push(QuestionIssue::warning(
                    QuestionIssueCode::DuplicateOption {
                        option: option.clone(),
                    },
                    format!("'{}' lists option '{}' twice", self.text(), option),
                ));
            }
        }

        match (self.kind(), self.correct_answer()) {
            (QuestionKind::Single, CorrectAnswer::Many(_))
            | (QuestionKind::Multiple, CorrectAnswer::One(_)) => {
                issues.push(QuestionIssue::warning(
                    QuestionIssueCode::KindMismatch { kind: self.kind() },
                    format!(
                        "'{}' is a {} question but its correct answer has the wrong shape; it will always grade as incorrect",
                        self.text(),
                        self.kind()
                    ),
                ));
            }
            (QuestionKind::Multiple, CorrectAnswer::Many(answers)) if answers.is_empty() => {
                issues.push(QuestionIssue::warning(
                    QuestionIssueCode::EmptyCorrectSet,
                    format!("'{}' has no correct answers", self.text()),
                ));
            }
            (QuestionKind::Multiple, CorrectAnswer::Many(answers)) => {
                let mut seen = HashSet::new();
                for answer in answers {
                    if !seen.insert(answer.as_str()) {
                        issues.push(QuestionIssue::warning(
                            QuestionIssueCode::DuplicateCorrectAnswer {
                                answer: answer.clone(),
                            },
                            format!("'{}' lists correct answer '{}' twice", self.text(), answer),
                        ));
                    }
                }
            }
            _ => {}
        }

        for answer in self.correct_answer().options() {
            if !self.has_option(answer) {
                issues.push(QuestionIssue::warning(
                    QuestionIssueCode::CorrectAnswerNotAnOption {
                        answer: answer.to_string(),
                    },
                    format!(
                        "'{}' names '{}' as correct but it is not an option",
                        self.text(),
                        answer
                    ),
                ));
            }
        }

        issues
    }
}
