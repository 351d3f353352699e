//! Persisted score record

use crate::quiz::score::Score;
use serde::{Deserialize, Serialize};

/// Identifier of a score record.
///
/// Records written by this program carry a string id; older stores may hold
/// numeric ids, which are read back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// One completed game's final score.
///
/// Serialized with the keys `id`, `date`, `userName`, `score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub id: RecordId,
    pub date: String,
    pub user_name: String,
    pub score: Score,
}

impl ScoreRecord {
    pub fn new(
        id: impl Into<RecordId>,
        date: impl Into<String>,
        user_name: impl Into<String>,
        score: Score,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            user_name: user_name.into(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_uses_camel_case_keys() {
        let record = ScoreRecord::new("1", "2024-01-01", "ada", Score::new(7));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["userName"], "ada");
        assert_eq!(value["score"], 7);
        assert_eq!(value["id"], "1");
        assert_eq!(value["date"], "2024-01-01");
    }

    #[test]
    fn test_deserialize_numeric_id() {
        let json = r#"{"id": 1700000000000, "date": "1/1/2024", "userName": "bob", "score": -2}"#;
        let record: ScoreRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, RecordId::Number(1_700_000_000_000));
        assert_eq!(record.score, Score::new(-2));
        assert_eq!(record.user_name, "bob");
    }
}
