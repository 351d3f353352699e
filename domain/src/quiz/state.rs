//! Quiz state and its reducer.
//!
//! [`QuizState`] is the single source of truth for one game: the loaded
//! questions, the cursor, the player's candidate answer, the grading result
//! for the current attempt, and the running score. It only changes through
//! [`QuizState::reduce`], which consumes the state and an action and returns
//! the next state together with what happened.
//!
//! ```text
//!            Start                Submit              Advance (not last)
//!  (idle) ─────────> Pending ─────────────> Graded ───────────────────> Pending (cursor + 1)
//!                      │  ▲ Select/Toggle                │
//!                      └──┘                              │ Advance (last)
//!                                                        ▼
//!                                                 (idle, → HighScores)
//! ```

use super::candidate::CandidateAnswer;
use super::grading::{GradingResult, grade};
use super::score::{Score, ScoringRules};
use crate::core::error::DomainError;
use crate::core::question::{Question, QuestionKind};
use crate::navigation::View;

/// An action dispatched by the view layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAction {
    /// Begin a new game with the given questions; resets the score
    Start(Vec<Question>),
    /// Replace the candidate with one option (single-choice questions)
    Select(String),
    /// Add or remove one option (multi-choice questions)
    Toggle(String),
    /// Grade the candidate answer
    Submit,
    /// Move to the next question, or finish on the last one
    Advance,
}

/// What an accepted action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Started { total: usize },
    SelectionChanged,
    /// `delta` is the score change applied by this attempt
    Graded { result: GradingResult, delta: i64 },
    Advanced { cursor: usize },
    Finished { final_score: Score },
}

/// Result of reducing one action
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: QuizState,
    /// `Err` when the action was rejected; the state is then unchanged
    pub outcome: Result<QuizEvent, DomainError>,
    /// View to navigate to, if the action requires it
    pub redirect: Option<View>,
}

/// Explicit application state for one game
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizState {
    questions: Vec<Question>,
    cursor: usize,
    candidate: CandidateAnswer,
    grading: GradingResult,
    score: Score,
    rules: ScoringRules,
}

impl QuizState {
    pub fn new(rules: ScoringRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Index of the current question
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    pub fn candidate(&self) -> &CandidateAnswer {
        &self.candidate
    }

    pub fn grading(&self) -> GradingResult {
        self.grading
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn rules(&self) -> ScoringRules {
        self.rules
    }

    /// Whether a game is in progress
    pub fn is_active(&self) -> bool {
        !self.questions.is_empty()
    }

    /// Derived from the cursor and the length of the loaded question list
    pub fn is_last_question(&self) -> bool {
        self.is_active() && self.cursor == self.questions.len() - 1
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.is_active() && self.grading.is_pending() && !self.candidate.is_empty()
    }

    /// Apply `action`, returning the next state.
    ///
    /// Every check runs before any field is touched, so a rejected action
    /// hands back the state exactly as it was.
    pub fn reduce(self, action: QuizAction) -> Transition {
        let mut state = self;
        match state.apply(action) {
            Ok((event, redirect)) => Transition {
                state,
                outcome: Ok(event),
                redirect,
            },
            Err(e) => Transition {
                state,
                outcome: Err(e),
                redirect: None,
            },
        }
    }

    fn apply(&mut self, action: QuizAction) -> Result<(QuizEvent, Option<View>), DomainError> {
        match action {
            QuizAction::Start(questions) => {
                if questions.is_empty() {
                    return Err(DomainError::NoQuestions);
                }
                let total = questions.len();
                self.questions = questions;
                self.cursor = 0;
                self.candidate.clear();
                self.grading = GradingResult::Pending;
                self.score = Score::ZERO;
                Ok((QuizEvent::Started { total }, Some(View::Quiz)))
            }
            QuizAction::Select(option) => {
                self.check_choice("select", QuestionKind::Single, &option)?;
                self.candidate.select_only(option);
                Ok((QuizEvent::SelectionChanged, None))
            }
            QuizAction::Toggle(option) => {
                self.check_choice("toggle", QuestionKind::Multiple, &option)?;
                self.candidate.toggle(&option);
                Ok((QuizEvent::SelectionChanged, None))
            }
            QuizAction::Submit => {
                let question = self.current_question().ok_or(DomainError::NoActiveQuestion)?;
                if !self.grading.is_pending() {
                    return Err(DomainError::AlreadyGraded);
                }
                if self.candidate.is_empty() {
                    return Err(DomainError::EmptyAnswer);
                }

                let result = grade(question, &self.candidate);
                let value = question.value();
                let delta = if result.is_correct() {
                    self.score = self.score.increment(value);
                    value
                } else {
                    self.score = self.score.decrement(self.rules.incorrect_penalty);
                    self.rules.incorrect_penalty.saturating_neg()
                };
                self.grading = result;
                Ok((QuizEvent::Graded { result, delta }, None))
            }
            QuizAction::Advance => {
                if !self.is_active() {
                    return Err(DomainError::NoActiveQuestion);
                }
                if self.grading.is_pending() {
                    return Err(DomainError::NotGraded);
                }

                if self.is_last_question() {
                    self.candidate.clear();
                    self.questions.clear();
                    self.cursor = 0;
                    self.grading = GradingResult::Pending;
                    Ok((
                        QuizEvent::Finished {
                            final_score: self.score,
                        },
                        Some(View::HighScores),
                    ))
                } else {
                    self.grading = GradingResult::Pending;
                    self.candidate.clear();
                    self.cursor += 1;
                    Ok((
                        QuizEvent::Advanced {
                            cursor: self.cursor,
                        },
                        None,
                    ))
                }
            }
        }
    }

    fn check_choice(
        &self,
        action: &'static str,
        expected: QuestionKind,
        option: &str,
    ) -> Result<(), DomainError> {
        let question = self.current_question().ok_or(DomainError::NoActiveQuestion)?;
        if !self.grading.is_pending() {
            return Err(DomainError::AlreadyGraded);
        }
        if question.kind() != expected {
            return Err(DomainError::ControlMismatch {
                action,
                kind: question.kind(),
            });
        }
        if !question.has_option(option) {
            return Err(DomainError::UnknownOption(option.to_string()));
        }
        Ok(())
    }
}
