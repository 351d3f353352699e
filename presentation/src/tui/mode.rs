//! Key mapping per view
//!
//! Each [`View`] has its own key map:
//! - Home: the player name field takes printable keys, Enter activates
//! - Quiz: option focus, select/toggle, submit, advance
//! - High scores: the two-step clear control and "Go Home"

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quiz_domain::View;
use ratatui::style::Color;

/// Indicator string for the status line
pub fn indicator(view: View) -> &'static str {
    match view {
        View::Home => "HOME",
        View::Quiz => "QUIZ",
        View::HighScores => "SCORES",
    }
}

/// Indicator color for the status line
pub fn color(view: View) -> Color {
    match view {
        View::Home => Color::Blue,
        View::Quiz => Color::Green,
        View::HighScores => Color::Magenta,
    }
}

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit application
    Quit,
    /// Type a character into the player name
    InsertChar(char),
    /// Delete the last character of the player name
    DeleteChar,
    /// Move focus to the next control or option
    FocusNext,
    /// Move focus to the previous control or option
    FocusPrev,
    /// Press the focused control (select/toggle on the quiz view)
    Activate,
    /// Select or toggle option N (zero-based)
    PickOption(usize),
    /// Grade the candidate answer
    Submit,
    /// Next question / finish game
    Advance,
    /// Press the clear control
    ClearScores,
    /// Disarm the clear control
    CancelClear,
    /// Navigate to the home view
    GoHome,
    /// No action
    None,
}

/// Key event handler - maps key events to actions based on the current view
pub struct KeyHandler;

impl KeyHandler {
    /// Handle key event in the given view
    pub fn handle(view: View, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match view {
            View::Home => Self::handle_home(key),
            View::Quiz => Self::handle_quiz(key),
            View::HighScores => Self::handle_high_scores(key),
        }
    }

    fn handle_home(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => Action::Activate,
            KeyCode::Tab | KeyCode::Down => Action::FocusNext,
            KeyCode::BackTab | KeyCode::Up => Action::FocusPrev,
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Action::InsertChar(c)
            }
            _ => Action::None,
        }
    }

    fn handle_quiz(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Action::FocusPrev,
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Action::FocusNext,
            KeyCode::Char(' ') | KeyCode::Enter => Action::Activate,
            KeyCode::Char('s') => Action::Submit,
            KeyCode::Char('n') => Action::Advance,
            KeyCode::Char(c @ '1'..='9') => Action::PickOption(c as usize - '1' as usize),
            _ => Action::None,
        }
    }

    fn handle_high_scores(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Esc => Action::CancelClear,
            KeyCode::Char('c') => Action::ClearScores,
            KeyCode::Char('h') => Action::GoHome,
            KeyCode::Char(' ') | KeyCode::Enter => Action::Activate,
            KeyCode::Char('k') | KeyCode::Up | KeyCode::Left | KeyCode::BackTab => {
                Action::FocusPrev
            }
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Right | KeyCode::Tab => {
                Action::FocusNext
            }
            _ => Action::None,
        }
    }
}
