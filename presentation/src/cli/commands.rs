//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for `--scores`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table
    Table,
    /// JSON array of score records
    Json,
}

impl From<OutputFormat> for quiz_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => quiz_domain::OutputFormat::Table,
            OutputFormat::Json => quiz_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for trivia-quiz
#[derive(Parser, Debug)]
#[command(name = "trivia-quiz")]
#[command(author, version, about = "Terminal trivia quiz with a local high-score table")]
#[command(long_about = r#"
A trivia quiz in the terminal. Answer single- and multiple-choice questions,
earn each question's points for a correct answer and lose a point for a
wrong one. Finished games are kept in a local high-score table.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quiz.toml         Project-level config
3. ~/.config/trivia-quiz/config.toml   Global config

Example:
  trivia-quiz --user ada
  trivia-quiz --questions ./my-questions.json
  trivia-quiz --scores --output json
"#)]
pub struct Cli {
    /// Player name recorded with the score
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// JSON question file (defaults to the bundled set)
    #[arg(long, value_name = "PATH")]
    pub questions: Option<PathBuf>,

    /// Score storage file
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Print the high-score table and exit
    #[arg(long)]
    pub scores: bool,

    /// Output format for --scores
    #[arg(short, long, value_enum, requires = "scores")]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
