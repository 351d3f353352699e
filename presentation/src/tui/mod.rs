//! TUI (Text User Interface) module for trivia-quiz
//!
//! This module provides the terminal UI using ratatui: the home screen,
//! the question card and the high-score table.

mod app;
mod mode;
mod state;
mod widgets;

pub use app::TuiApp;
pub use mode::{Action, KeyHandler};
pub use state::{HomeControl, ScoresControl, TuiState};
pub use widgets::{
    MainLayout,
    question_card::{advance_label, feedback_text},
};
