//! JSON question files.

use quiz_application::{QuestionSource, QuestionSourceError};
use quiz_domain::Question;
use std::path::PathBuf;
use tracing::debug;

const BUNDLED_QUESTIONS: &str = include_str!("../../assets/questions.json");

/// Where the question list is read from
#[derive(Debug, Clone)]
enum Origin {
    File(PathBuf),
    Bundled,
}

/// [`QuestionSource`] reading a JSON array of questions.
///
/// Each element has the shape
/// `{"question", "type": "single"|"multiple", "answers", "correct_answer", "value"}`.
#[derive(Debug, Clone)]
pub struct JsonQuestionSource {
    origin: Origin,
}

impl JsonQuestionSource {
    /// Read questions from a file on every game start
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::File(path.into()),
        }
    }

    /// Use the question set compiled into the binary
    pub fn bundled() -> Self {
        Self {
            origin: Origin::Bundled,
        }
    }

    fn parse(content: &str, origin: String) -> Result<Vec<Question>, QuestionSourceError> {
        serde_json::from_str(content).map_err(|source| QuestionSourceError::Parse { origin, source })
    }
}

impl QuestionSource for JsonQuestionSource {
    fn load_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        let questions = match &self.origin {
            Origin::File(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|source| QuestionSourceError::Io {
                        path: path.display().to_string(),
                        source,
                    })?;
                Self::parse(&content, self.origin())?
            }
            Origin::Bundled => Self::parse(BUNDLED_QUESTIONS, self.origin())?,
        };
        debug!("Loaded {} questions from {}", questions.len(), self.origin());
        Ok(questions)
    }

    fn origin(&self) -> String {
        match &self.origin {
            Origin::File(path) => path.display().to_string(),
            Origin::Bundled => "bundled question set".to_string(),
        }
    }
}
