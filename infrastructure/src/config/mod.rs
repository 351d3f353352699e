//! Configuration file loading for trivia-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./quiz.toml` or `./.quiz.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/trivia-quiz/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGameConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
    FileQuestionsConfig, FileStorageConfig, FileTuiConfig, expand_home,
};
pub use loader::ConfigLoader;
