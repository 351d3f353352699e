//! Grading: comparing a candidate answer with a question's correct answer

use super::candidate::CandidateAnswer;
use crate::core::question::{CorrectAnswer, Question, QuestionKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome of one question attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradingResult {
    /// Not submitted yet
    #[default]
    Pending,
    Correct,
    Incorrect,
}

impl GradingResult {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Classify a candidate answer against a question.
///
/// - single-choice: correct iff the candidate is exactly `{correct_answer}`
/// - multi-choice: correct iff the candidate equals the correct set
///   (same size, every candidate is a member; order is irrelevant)
///
/// A question whose type does not match its correct-answer representation
/// always grades as [`GradingResult::Incorrect`]. This function never
/// returns `Pending`.
///
/// # Example
///
/// ```
/// use quiz_domain::{grade, CandidateAnswer, GradingResult, Question};
///
/// let question = Question::multiple("Vowels?", ["A", "B", "C"], &["A", "C"], 3);
/// let candidate: CandidateAnswer = ["C", "A"].into_iter().collect();
/// assert_eq!(grade(&question, &candidate), GradingResult::Correct);
/// ```
pub fn grade(question: &Question, candidate: &CandidateAnswer) -> GradingResult {
    let correct = match (question.kind(), question.correct_answer()) {
        (QuestionKind::Single, CorrectAnswer::One(answer)) => {
            candidate.len() == 1 && candidate.contains(answer)
        }
        (QuestionKind::Multiple, CorrectAnswer::Many(answers)) => {
            let correct_set: HashSet<&str> = answers.iter().map(String::as_str).collect();
            candidate.len() == correct_set.len()
                && candidate.iter().all(|option| correct_set.contains(option))
        }
        _ => false,
    };

    if correct {
        GradingResult::Correct
    } else {
        GradingResult::Incorrect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(options: &[&str]) -> CandidateAnswer {
        options.iter().copied().collect()
    }

    fn single() -> Question {
        Question::single("Which?", ["A", "B", "C"], "B", 5)
    }

    fn multiple() -> Question {
        Question::multiple("Which?", ["A", "B", "C"], &["A", "C"], 3)
    }

    #[test]
    fn single_exact_match_is_correct() {
        assert_eq!(grade(&single(), &candidate(&["B"])), GradingResult::Correct);
    }

    #[test]
    fn single_wrong_option_is_incorrect() {
        assert_eq!(grade(&single(), &candidate(&["A"])), GradingResult::Incorrect);
    }

    #[test]
    fn single_with_extra_option_is_incorrect() {
        assert_eq!(
            grade(&single(), &candidate(&["B", "C"])),
            GradingResult::Incorrect
        );
    }

    #[test]
    fn single_empty_candidate_is_incorrect() {
        assert_eq!(grade(&single(), &candidate(&[])), GradingResult::Incorrect);
    }

    #[test]
    fn multiple_is_order_independent() {
        assert_eq!(
            grade(&multiple(), &candidate(&["C", "A"])),
            GradingResult::Correct
        );
        assert_eq!(
            grade(&multiple(), &candidate(&["A", "C"])),
            GradingResult::Correct
        );
    }

    #[test]
    fn multiple_subset_is_incorrect() {
        assert_eq!(grade(&multiple(), &candidate(&["A"])), GradingResult::Incorrect);
    }

    #[test]
    fn multiple_superset_is_incorrect() {
        assert_eq!(
            grade(&multiple(), &candidate(&["A", "B", "C"])),
            GradingResult::Incorrect
        );
    }

    #[test]
    fn multiple_same_size_different_members_is_incorrect() {
        assert_eq!(
            grade(&multiple(), &candidate(&["A", "B"])),
            GradingResult::Incorrect
        );
    }

    #[test]
    fn multiple_with_repeated_correct_entry_compares_as_set() {
        let question = Question::multiple("Which?", ["A", "B", "C"], &["A", "A", "C"], 3);
        assert_eq!(
            grade(&question, &candidate(&["A", "C"])),
            GradingResult::Correct
        );
        assert_eq!(
            grade(&question, &candidate(&["A"])),
            GradingResult::Incorrect
        );
    }

    #[test]
    fn kind_mismatch_is_always_incorrect() {
        let single_with_array = Question::new(
            "Q",
            QuestionKind::Single,
            vec!["A".into()],
            CorrectAnswer::Many(vec!["A".into()]),
            1,
        );
        assert_eq!(
            grade(&single_with_array, &candidate(&["A"])),
            GradingResult::Incorrect
        );

        let multiple_with_string = Question::new(
            "Q",
            QuestionKind::Multiple,
            vec!["A".into()],
            CorrectAnswer::One("A".into()),
            1,
        );
        assert_eq!(
            grade(&multiple_with_string, &candidate(&["A"])),
            GradingResult::Incorrect
        );
    }

    #[test]
    fn grade_never_returns_pending() {
        for c in [candidate(&[]), candidate(&["A"]), candidate(&["A", "C"])] {
            assert!(!grade(&multiple(), &c).is_pending());
            assert!(!grade(&single(), &c).is_pending());
        }
    }
}
