//! TUI application state
//!
//! Everything the TUI renders that is not owned by a use case: the current
//! view, the player name being typed, focus positions and the flash line.
//! Game state lives in `PlayQuizUseCase`, the score table in
//! `HighScoresUseCase`.

use quiz_domain::View;
use std::time::{Duration, Instant};

/// Longest accepted player name
pub const MAX_NAME_LEN: usize = 32;

/// Focusable controls of the home view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HomeControl {
    #[default]
    StartGame,
    HighScores,
}

impl HomeControl {
    pub fn label(&self) -> &'static str {
        match self {
            Self::StartGame => "Start game",
            Self::HighScores => "High scores",
        }
    }

    fn toggled(self) -> Self {
        match self {
            Self::StartGame => Self::HighScores,
            Self::HighScores => Self::StartGame,
        }
    }
}

/// Focusable controls of the high-score view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoresControl {
    #[default]
    Clear,
    GoHome,
}

impl ScoresControl {
    fn toggled(self) -> Self {
        match self {
            Self::Clear => Self::GoHome,
            Self::GoHome => Self::Clear,
        }
    }
}

/// Central TUI state, owned by the TuiApp select! loop
#[derive(Debug, Default)]
pub struct TuiState {
    // -- Navigation --
    pub view: View,

    // -- Home --
    pub player_name: String,
    pub home_focus: HomeControl,

    // -- Quiz --
    pub option_focus: usize,

    // -- High scores --
    pub scores_focus: ScoresControl,

    // -- Overlay --
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(player_name: impl Into<String>) -> Self {
        let mut player_name: String = player_name.into();
        if let Some((idx, _)) = player_name.char_indices().nth(MAX_NAME_LEN) {
            player_name.truncate(idx);
        }
        Self {
            player_name,
            ..Self::default()
        }
    }

    /// Switch view and reset the focus of the destination
    pub fn navigate(&mut self, view: View) {
        self.view = view;
        match view {
            View::Home => self.home_focus = HomeControl::default(),
            View::Quiz => self.option_focus = 0,
            View::HighScores => self.scores_focus = ScoresControl::default(),
        }
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        if !c.is_control() && self.player_name.chars().count() < MAX_NAME_LEN {
            self.player_name.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        self.player_name.pop();
    }

    // -- Focus --

    /// Move focus forward; `option_count` bounds the quiz option cursor
    pub fn focus_next(&mut self, option_count: usize) {
        match self.view {
            View::Home => self.home_focus = self.home_focus.toggled(),
            View::Quiz if option_count > 0 => {
                self.option_focus = (self.option_focus + 1) % option_count;
            }
            View::Quiz => self.option_focus = 0,
            View::HighScores => self.scores_focus = self.scores_focus.toggled(),
        }
    }

    pub fn focus_prev(&mut self, option_count: usize) {
        match self.view {
            View::Home => self.home_focus = self.home_focus.toggled(),
            View::Quiz if option_count > 0 => {
                self.option_focus = (self.option_focus + option_count - 1) % option_count;
            }
            View::Quiz => self.option_focus = 0,
            View::HighScores => self.scores_focus = self.scores_focus.toggled(),
        }
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_home() {
        let state = TuiState::new("ada");
        assert_eq!(state.view, View::Home);
        assert_eq!(state.player_name, "ada");
        assert_eq!(state.home_focus, HomeControl::StartGame);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_new_truncates_long_names() {
        let state = TuiState::new("x".repeat(MAX_NAME_LEN + 10));
        assert_eq!(state.player_name.chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_name_editing() {
        let mut state = TuiState::new("");
        state.insert_char('b');
        state.insert_char('o');
        state.insert_char('\n');
        state.insert_char('b');
        assert_eq!(state.player_name, "bob");
        state.delete_char();
        assert_eq!(state.player_name, "bo");
    }

    #[test]
    fn test_name_length_limit() {
        let mut state = TuiState::new("y".repeat(MAX_NAME_LEN));
        state.insert_char('z');
        assert_eq!(state.player_name.chars().count(), MAX_NAME_LEN);
        assert!(!state.player_name.contains('z'));
    }

    #[test]
    fn test_option_focus_wraps() {
        let mut state = TuiState::new("");
        state.navigate(View::Quiz);
        state.focus_prev(3);
        assert_eq!(state.option_focus, 2);
        state.focus_next(3);
        assert_eq!(state.option_focus, 0);
        state.focus_next(3);
        assert_eq!(state.option_focus, 1);
    }

    #[test]
    fn test_navigate_resets_focus() {
        let mut state = TuiState::new("");
        state.focus_next(0);
        assert_eq!(state.home_focus, HomeControl::HighScores);

        state.navigate(View::HighScores);
        state.focus_next(0);
        assert_eq!(state.scores_focus, ScoresControl::GoHome);

        state.navigate(View::Home);
        assert_eq!(state.home_focus, HomeControl::StartGame);
        state.navigate(View::HighScores);
        assert_eq!(state.scores_focus, ScoresControl::Clear);
    }

    #[test]
    fn test_flash_message() {
        let mut state = TuiState::new("");
        state.set_flash("test");
        assert!(state.flash_message.is_some());

        // Should not expire immediately
        state.expire_flash(Duration::from_secs(5));
        assert!(state.flash_message.is_some());

        state.expire_flash(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }
}
