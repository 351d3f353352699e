//! Question source port
//!
//! Supplies the ordered question list for a game.

use quiz_domain::Question;
use thiserror::Error;

/// Errors that can occur while loading questions
#[derive(Error, Debug)]
pub enum QuestionSourceError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse questions from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Provider of the ordered question list
pub trait QuestionSource: Send + Sync {
    /// Load the full question list in play order
    fn load_questions(&self) -> Result<Vec<Question>, QuestionSourceError>;

    /// Short description of where questions come from (for logs)
    fn origin(&self) -> String;
}

/// Question source over a fixed list
pub struct StaticQuestionSource {
    questions: Vec<Question>,
}

impl StaticQuestionSource {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

impl QuestionSource for StaticQuestionSource {
    fn load_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        Ok(self.questions.clone())
    }

    fn origin(&self) -> String {
        "static list".to_string()
    }
}
