//! Question value object

use serde::{Deserialize, Serialize};

/// Answer arity of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Exactly one option is correct (rendered as radio buttons)
    Single,
    /// A set of options is correct (rendered as checkboxes)
    Multiple,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Correct answer as it appears in question files.
///
/// Single-choice questions carry a plain string, multi-choice questions an
/// array. Nothing stops a file from pairing the wrong representation with a
/// question type; such questions always grade as incorrect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    One(String),
    Many(Vec<String>),
}

impl CorrectAnswer {
    /// All options named as correct, in file order
    pub fn options(&self) -> Vec<&str> {
        match self {
            Self::One(answer) => vec![answer.as_str()],
            Self::Many(answers) => answers.iter().map(String::as_str).collect(),
        }
    }

    /// Human-readable form, e.g. `"B is"` or `"A, C are"`
    pub fn describe(&self) -> String {
        match self {
            Self::One(answer) => format!("{} is", answer),
            Self::Many(answers) => format!("{} are", answers.join(", ")),
        }
    }
}

impl std::fmt::Display for CorrectAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One(answer) => write!(f, "{}", answer),
            Self::Many(answers) => write!(f, "{}", answers.join(", ")),
        }
    }
}

/// A single trivia prompt (Value Object)
///
/// Immutable once loaded. The serialized field names match the question
/// files: `question`, `type`, `answers`, `correct_answer`, `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    question: String,
    #[serde(rename = "type")]
    kind: QuestionKind,
    answers: Vec<String>,
    correct_answer: CorrectAnswer,
    value: i64,
}

impl Question {
    /// Create a question from its raw parts without checking consistency.
    ///
    /// Use [`Question::validate`](crate::core::validation) to detect
    /// mismatches between `kind` and `correct_answer`.
    pub fn new(
        question: impl Into<String>,
        kind: QuestionKind,
        answers: Vec<String>,
        correct_answer: CorrectAnswer,
        value: i64,
    ) -> Self {
        Self {
            question: question.into(),
            kind,
            answers,
            correct_answer,
            value,
        }
    }

    /// Create a single-choice question
    pub fn single<I, S>(question: impl Into<String>, answers: I, correct: &str, value: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            question,
            QuestionKind::Single,
            answers.into_iter().map(Into::into).collect(),
            CorrectAnswer::One(correct.to_string()),
            value,
        )
    }

    /// Create a multi-choice question
    pub fn multiple<I, S>(question: impl Into<String>, answers: I, correct: &[&str], value: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            question,
            QuestionKind::Multiple,
            answers.into_iter().map(Into::into).collect(),
            CorrectAnswer::Many(correct.iter().map(|s| s.to_string()).collect()),
            value,
        )
    }

    /// The prompt text
    pub fn text(&self) -> &str {
        &self.question
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Answer options in display order
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn correct_answer(&self) -> &CorrectAnswer {
        &self.correct_answer
    }

    /// Points awarded for a correct attempt
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Whether `option` is one of this question's answer options
    pub fn has_option(&self, option: &str) -> bool {
        self.answers.iter().any(|a| a == option)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_single_question() {
        let json = r#"{
            "question": "Which letter?",
            "type": "single",
            "answers": ["A", "B", "C"],
            "correct_answer": "B",
            "value": 5
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.kind(), QuestionKind::Single);
        assert_eq!(q.correct_answer(), &CorrectAnswer::One("B".into()));
        assert_eq!(q.value(), 5);
        assert_eq!(q.answers().len(), 3);
    }

    #[test]
    fn test_deserialize_multiple_question() {
        let json = r#"{
            "question": "Which vowels?",
            "type": "multiple",
            "answers": ["A", "B", "C"],
            "correct_answer": ["A", "C"],
            "value": 3
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.kind(), QuestionKind::Multiple);
        assert_eq!(
            q.correct_answer(),
            &CorrectAnswer::Many(vec!["A".into(), "C".into()])
        );
    }

    #[test]
    fn test_serialize_uses_type_field() {
        let q = Question::single("Q", ["A", "B"], "A", 1);
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["type"], "single");
        assert_eq!(value["correct_answer"], "A");
    }

    #[test]
    fn test_has_option() {
        let q = Question::single("Q", ["A", "B"], "A", 1);
        assert!(q.has_option("B"));
        assert!(!q.has_option("Z"));
    }

    #[test]
    fn test_describe_correct_answer() {
        assert_eq!(CorrectAnswer::One("B".into()).describe(), "B is");
        assert_eq!(
            CorrectAnswer::Many(vec!["A".into(), "C".into()]).describe(),
            "A, C are"
        );
    }
}
