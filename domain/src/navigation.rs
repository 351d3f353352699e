//! Navigation destinations

/// A screen of the application. Redirects carry no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Quiz,
    HighScores,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Quiz => "Quiz",
            Self::HighScores => "High Scores",
        }
    }
}
