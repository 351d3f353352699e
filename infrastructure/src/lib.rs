//! Infrastructure layer for trivia-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod questions;
pub mod storage;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileOutputConfig, FileOutputFormat};
pub use logging::JsonlGameLogger;
pub use questions::JsonQuestionSource;
pub use storage::{LocalKeyValueStore, LocalScoreStore, SCORES_KEY};
