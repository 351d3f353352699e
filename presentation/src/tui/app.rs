//! TUI application: main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)
//!   ├─ crossterm EventStream ─> KeyHandler ─> Action ─> handle_action()
//!   │                                                     ├─ PlayQuizUseCase
//!   │                                                     └─ HighScoresUseCase
//!   └─ tick_interval ─> on_tick() (flash expiry, clear confirmation timeout)
//! ```

use super::mode::{Action, KeyHandler};
use super::state::{HomeControl, ScoresControl, TuiState};
use super::widgets::{
    MainLayout, header::HeaderWidget, high_scores::HighScoresWidget, home::HomeWidget,
    question_card::QuestionCardWidget, status_bar::StatusBarWidget,
};
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use quiz_application::{
    HighScoresUseCase, PlayQuizError, PlayQuizUseCase, QuestionSource, QuizOutcome, ScoreStore,
};
use quiz_domain::{ClearStep, QuestionKind, QuizAction, QuizEvent, View};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How long a flash message stays in the status bar
const FLASH_TTL: Duration = Duration::from_secs(5);

/// Main TUI application
pub struct TuiApp<Q: QuestionSource + 'static, S: ScoreStore + 'static> {
    play: PlayQuizUseCase<Q, S>,
    scores: HighScoresUseCase<S>,
    state: TuiState,
    tick_rate: Duration,
}

impl<Q: QuestionSource + 'static, S: ScoreStore + 'static> TuiApp<Q, S> {
    pub fn new(
        play: PlayQuizUseCase<Q, S>,
        scores: HighScoresUseCase<S>,
        player_name: impl Into<String>,
    ) -> Self {
        Self {
            play,
            scores,
            state: TuiState::new(player_name),
            tick_rate: Duration::from_millis(250),
        }
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate.max(Duration::from_millis(1));
        self
    }

    pub fn state(&self) -> &TuiState {
        &self.state
    }

    pub fn play(&self) -> &PlayQuizUseCase<Q, S> {
        &self.play
    }

    pub fn scores(&self) -> &HighScoresUseCase<S> {
        &self.scores
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.tick_rate);

        let result = loop {
            if let Err(e) = terminal.draw(|frame| self.render(frame)) {
                break Err(e);
            }

            if self.state.should_quit {
                break Ok(());
            }

            tokio::select! {
                Some(term_event) = event_stream.next() => {
                    match term_event {
                        Ok(Event::Key(key)) => self.handle_key(key),
                        Ok(_) => {}
                        Err(e) => break Err(e),
                    }
                }

                _ = tick.tick() => {
                    self.on_tick(Instant::now());
                }
            }
        };

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Map a key press through the current view's key map
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let action = KeyHandler::handle(self.state.view, key);
        self.handle_action(action, Instant::now());
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match (self.state.view, action) {
            (_, Action::None) => {}
            (_, Action::Quit) => self.state.should_quit = true,
            (_, Action::FocusNext) => {
                self.state.focus_next(self.option_count());
                self.disarm_if_unfocused();
            }
            (_, Action::FocusPrev) => {
                self.state.focus_prev(self.option_count());
                self.disarm_if_unfocused();
            }

            (View::Home, Action::InsertChar(c)) => self.state.insert_char(c),
            (View::Home, Action::DeleteChar) => self.state.delete_char(),
            (View::Home, Action::Activate) => match self.state.home_focus {
                HomeControl::StartGame => self.start_game(),
                HomeControl::HighScores => self.navigate(View::HighScores),
            },

            (View::Quiz, Action::Activate) => {
                if self.play.state().grading().is_pending() {
                    self.choose(self.state.option_focus);
                } else {
                    self.dispatch(QuizAction::Advance);
                }
            }
            (View::Quiz, Action::PickOption(index)) => {
                if index < self.option_count() {
                    self.state.option_focus = index;
                    self.choose(index);
                }
            }
            (View::Quiz, Action::Submit) => self.dispatch(QuizAction::Submit),
            (View::Quiz, Action::Advance) => self.dispatch(QuizAction::Advance),

            (View::HighScores, Action::Activate) => match self.state.scores_focus {
                ScoresControl::Clear => self.clear_scores(now),
                ScoresControl::GoHome => self.navigate(View::Home),
            },
            (View::HighScores, Action::ClearScores) => {
                self.state.scores_focus = ScoresControl::Clear;
                self.clear_scores(now);
            }
            (View::HighScores, Action::CancelClear) => {
                if self.scores.cancel_clear() {
                    self.state.set_flash("Clear cancelled");
                }
            }
            (View::HighScores, Action::GoHome) => self.navigate(View::Home),

            (view, action) => debug!("Ignoring {:?} on {:?}", action, view),
        }
    }

    /// Periodic housekeeping driven by the tick interval
    pub fn on_tick(&mut self, now: Instant) {
        self.state.expire_flash(FLASH_TTL);
        if self.scores.tick(now) {
            self.state.set_flash("Clear not confirmed");
        }
    }

    /// Render all widgets
    pub fn render(&self, frame: &mut Frame) {
        let layout = MainLayout::compute(frame.area());
        let quiz = self.play.state();

        frame.render_widget(
            HeaderWidget::new(self.state.view, self.play.player(), quiz.score()),
            layout.header,
        );

        match self.state.view {
            View::Home => frame.render_widget(HomeWidget::new(&self.state), layout.body),
            View::Quiz => frame.render_widget(
                QuestionCardWidget::new(quiz, self.state.option_focus),
                layout.body,
            ),
            View::HighScores => frame.render_widget(
                HighScoresWidget::new(
                    self.scores.records(),
                    self.scores.is_armed(),
                    self.state.scores_focus,
                ),
                layout.body,
            ),
        }

        frame.render_widget(StatusBarWidget::new(&self.state), layout.status_bar);
    }

    fn option_count(&self) -> usize {
        self.play
            .state()
            .current_question()
            .map_or(0, |question| question.answers().len())
    }

    fn navigate(&mut self, view: View) {
        if view == View::HighScores {
            self.scores.mount();
        }
        self.state.navigate(view);
    }

    fn start_game(&mut self) {
        match self.play.start(&self.state.player_name) {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(e) => {
                warn!("Could not start game: {}", e);
                self.state.set_flash(e.to_string());
            }
        }
    }

    /// Select (single-choice) or toggle (multi-choice) option `index`
    fn choose(&mut self, index: usize) {
        let Some(question) = self.play.state().current_question() else {
            return;
        };
        let Some(option) = question.answers().get(index).cloned() else {
            return;
        };
        let action = match question.kind() {
            QuestionKind::Single => QuizAction::Select(option),
            QuestionKind::Multiple => QuizAction::Toggle(option),
        };
        self.dispatch(action);
    }

    fn dispatch(&mut self, action: QuizAction) {
        match self.play.dispatch(action) {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(PlayQuizError::Rejected(e)) => self.state.set_flash(e.to_string()),
            Err(e) => {
                warn!("Quiz action failed: {}", e);
                self.state.set_flash(e.to_string());
            }
        }
    }

    fn apply_outcome(&mut self, outcome: QuizOutcome) {
        match outcome.event {
            QuizEvent::Advanced { .. } => self.state.option_focus = 0,
            QuizEvent::Finished { final_score } => match &outcome.record {
                Some(record) => self.state.set_flash(format!(
                    "Saved score {} for {}",
                    final_score, record.user_name
                )),
                None => self.state.set_flash("Could not save your score"),
            },
            _ => {}
        }
        if let Some(view) = outcome.redirect {
            self.navigate(view);
        }
    }

    /// An armed clear only stays armed while its control has focus
    fn disarm_if_unfocused(&mut self) {
        if self.state.view == View::HighScores
            && self.state.scores_focus != ScoresControl::Clear
            && self.scores.cancel_clear()
        {
            self.state.set_flash("Clear cancelled");
        }
    }

    fn clear_scores(&mut self, now: Instant) {
        match self.scores.activate_clear(now) {
            Ok(ClearStep::Armed) => {}
            Ok(ClearStep::Confirmed) => {
                self.state.scores_focus = ScoresControl::GoHome;
                self.state.set_flash("High scores cleared");
            }
            Ok(ClearStep::Ignored) => self.state.set_flash("No scores to clear"),
            Err(e) => {
                warn!("Could not clear scores: {}", e);
                self.state.set_flash(format!("Could not clear scores: {}", e));
            }
        }
    }
}
