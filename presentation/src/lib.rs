//! Presentation layer for trivia-quiz
//!
//! This crate contains CLI definitions, the console formatter for
//! non-interactive output, and the terminal UI.

pub mod cli;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use tui::TuiApp;
