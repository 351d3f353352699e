//! Play Quiz use case
//!
//! Owns the [`QuizState`] of the running game, feeds view-layer actions
//! through the domain reducer, and records the final score when the game
//! finishes.

use crate::config::{ANONYMOUS_PLAYER, GameConfig};
use crate::ports::game_logger::{GameEvent, GameEventKind, GameLogger, NoGameLogger};
use crate::ports::question_source::{QuestionSource, QuestionSourceError};
use crate::ports::score_store::ScoreStore;
use chrono::{DateTime, Local};
use quiz_domain::{
    DomainError, Question, QuizAction, QuizEvent, QuizState, Score, ScoreRecord, Severity,
    Transition, View,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while playing
#[derive(Error, Debug)]
pub enum PlayQuizError {
    #[error("Could not load questions: {0}")]
    Questions(#[from] QuestionSourceError),

    #[error("{0}")]
    Rejected(#[from] DomainError),
}

impl PlayQuizError {
    /// Check if the reducer refused the action (state is unchanged)
    pub fn is_rejection(&self) -> bool {
        matches!(self, PlayQuizError::Rejected(_))
    }
}

/// Result of an accepted action
#[derive(Debug, Clone)]
pub struct QuizOutcome {
    pub event: QuizEvent,
    /// View the caller should navigate to
    pub redirect: Option<View>,
    /// Record saved when the game finished; `None` if saving failed
    pub record: Option<ScoreRecord>,
}

/// Use case for playing one game at a time
pub struct PlayQuizUseCase<Q: QuestionSource + 'static, S: ScoreStore + 'static> {
    questions: Arc<Q>,
    store: Arc<S>,
    logger: Arc<dyn GameLogger>,
    state: QuizState,
    player: String,
}

impl<Q: QuestionSource + 'static, S: ScoreStore + 'static> PlayQuizUseCase<Q, S> {
    pub fn new(questions: Arc<Q>, store: Arc<S>, config: &GameConfig) -> Self {
        Self {
            questions,
            store,
            logger: Arc::new(NoGameLogger),
            state: QuizState::new(config.scoring_rules()),
            player: ANONYMOUS_PLAYER.to_string(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn GameLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Name recorded with the score of the current game
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Load questions and start a new game for `player`
    pub fn start(&mut self, player: &str) -> Result<QuizOutcome, PlayQuizError> {
        let loaded = self.questions.load_questions()?;
        let questions = Self::playable(loaded);

        let player = player.trim();
        self.player = if player.is_empty() {
            ANONYMOUS_PLAYER.to_string()
        } else {
            player.to_string()
        };

        info!(
            "Starting game for {} with {} questions from {}",
            self.player,
            questions.len(),
            self.questions.origin()
        );
        self.dispatch(QuizAction::Start(questions))
    }

    /// Feed one action through the reducer
    pub fn dispatch(&mut self, action: QuizAction) -> Result<QuizOutcome, PlayQuizError> {
        let state = std::mem::take(&mut self.state);
        let Transition {
            state,
            outcome,
            redirect,
        } = state.reduce(action);
        self.state = state;

        let event = match outcome {
            Ok(event) => event,
            Err(e) => {
                debug!("Action rejected: {}", e);
                return Err(e.into());
            }
        };
        self.log_event(&event);

        let record = match event {
            QuizEvent::Finished { final_score } => self.record_score(final_score, Local::now()),
            _ => None,
        };

        Ok(QuizOutcome {
            event,
            redirect,
            record,
        })
    }

    /// Drop questions that cannot be played, warning about suspicious ones
    fn playable(questions: Vec<Question>) -> Vec<Question> {
        questions
            .into_iter()
            .filter(|question| {
                let issues = question.validate();
                for issue in &issues {
                    warn!("Question issue: {}", issue.message);
                }
                !issues.iter().any(|i| i.severity == Severity::Error)
            })
            .collect()
    }

    fn record_score(&self, score: Score, now: DateTime<Local>) -> Option<ScoreRecord> {
        let existing = self.store.load();
        let millis = now.timestamp_millis();
        let mut id = millis.to_string();
        let mut suffix = 1;
        while existing.iter().any(|r| r.id.to_string() == id) {
            id = format!("{}-{}", millis, suffix);
            suffix += 1;
        }

        let record = ScoreRecord::new(
            id,
            now.format("%Y-%m-%d %H:%M").to_string(),
            self.player.clone(),
            score,
        );

        match self.store.append(record.clone()) {
            Ok(()) => {
                info!("Recorded score {} for {}", score, self.player);
                Some(record)
            }
            Err(e) => {
                warn!("Could not save score for {}: {}", self.player, e);
                None
            }
        }
    }

    fn log_event(&self, event: &QuizEvent) {
        let (kind, payload) = match *event {
            QuizEvent::Started { total } => {
                (GameEventKind::GameStarted, serde_json::json!({ "questions": total }))
            }
            QuizEvent::SelectionChanged => return,
            QuizEvent::Graded { result, delta } => {
                let question = self.state.current_question().map(|q| q.text().to_string());
                debug!("Graded {:?} ({:+})", result, delta);
                (
                    GameEventKind::AnswerGraded,
                    serde_json::json!({
                        "question": question,
                        "answer": self.state.candidate().as_slice(),
                        "result": result,
                        "delta": delta,
                        "score": self.state.score(),
                    }),
                )
            }
            QuizEvent::Advanced { cursor } => {
                debug!("Advanced to question {}", cursor + 1);
                (
                    GameEventKind::QuestionAdvanced,
                    serde_json::json!({ "cursor": cursor }),
                )
            }
            QuizEvent::Finished { final_score } => {
                info!("Game finished for {} with score {}", self.player, final_score);
                (
                    GameEventKind::GameFinished,
                    serde_json::json!({ "score": final_score }),
                )
            }
        };
        self.logger
            .log(GameEvent::new(kind, payload).for_player(self.player.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::question_source::StaticQuestionSource;
    use crate::ports::score_store::InMemoryScoreStore;
    use quiz_domain::{CorrectAnswer, GradingResult, QuestionKind};
    use std::sync::Mutex;

    struct RecordingLogger {
        events: Mutex<Vec<GameEvent>>,
    }

    impl GameLogger for RecordingLogger {
        fn log(&self, event: GameEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn questions() -> Vec<Question> {
        vec![
            Question::single("Pick B", ["A", "B", "C"], "B", 5),
            Question::multiple("Pick A and C", ["A", "B", "C"], &["A", "C"], 3),
        ]
    }

    fn use_case(
        questions: Vec<Question>,
    ) -> (
        PlayQuizUseCase<StaticQuestionSource, InMemoryScoreStore>,
        Arc<InMemoryScoreStore>,
    ) {
        let store = Arc::new(InMemoryScoreStore::new());
        let uc = PlayQuizUseCase::new(
            Arc::new(StaticQuestionSource::new(questions)),
            Arc::clone(&store),
            &GameConfig::default(),
        );
        (uc, store)
    }

    #[test]
    fn test_start_navigates_to_quiz() {
        let (mut uc, _) = use_case(questions());
        let outcome = uc.start("ada").unwrap();
        assert_eq!(outcome.event, QuizEvent::Started { total: 2 });
        assert_eq!(outcome.redirect, Some(View::Quiz));
        assert_eq!(uc.player(), "ada");
        assert!(uc.state().is_active());
    }

    #[test]
    fn test_blank_player_is_anonymous() {
        let (mut uc, _) = use_case(questions());
        uc.start("   ").unwrap();
        assert_eq!(uc.player(), ANONYMOUS_PLAYER);
    }

    #[test]
    fn test_start_without_questions_is_rejected() {
        let (mut uc, _) = use_case(vec![]);
        let err = uc.start("ada").unwrap_err();
        assert!(err.is_rejection());
        assert!(matches!(err, PlayQuizError::Rejected(DomainError::NoQuestions)));
    }

    #[test]
    fn test_unplayable_questions_are_dropped() {
        let broken = Question::new(
            "No options",
            QuestionKind::Single,
            vec![],
            CorrectAnswer::One("A".into()),
            1,
        );
        let (mut uc, _) = use_case(vec![broken, Question::single("Q", ["A"], "A", 1)]);
        let outcome = uc.start("ada").unwrap();
        assert_eq!(outcome.event, QuizEvent::Started { total: 1 });
    }

    #[test]
    fn test_full_game_records_score() {
        let (mut uc, store) = use_case(questions());
        uc.start("ada").unwrap();

        uc.dispatch(QuizAction::Select("B".into())).unwrap();
        let graded = uc.dispatch(QuizAction::Submit).unwrap();
        assert_eq!(
            graded.event,
            QuizEvent::Graded {
                result: GradingResult::Correct,
                delta: 5
            }
        );
        uc.dispatch(QuizAction::Advance).unwrap();

        uc.dispatch(QuizAction::Toggle("A".into())).unwrap();
        uc.dispatch(QuizAction::Submit).unwrap();
        let finished = uc.dispatch(QuizAction::Advance).unwrap();

        assert_eq!(
            finished.event,
            QuizEvent::Finished {
                final_score: Score::new(4)
            }
        );
        assert_eq!(finished.redirect, Some(View::HighScores));

        let record = finished.record.unwrap();
        assert_eq!(record.user_name, "ada");
        assert_eq!(record.score, Score::new(4));

        let stored = store.load();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], record);
    }

    #[test]
    fn test_rejected_action_keeps_state() {
        let (mut uc, _) = use_case(questions());
        uc.start("ada").unwrap();
        let before = uc.state().clone();
        let err = uc.dispatch(QuizAction::Submit).unwrap_err();
        assert!(matches!(err, PlayQuizError::Rejected(DomainError::EmptyAnswer)));
        assert_eq!(uc.state(), &before);
    }

    #[test]
    fn test_record_ids_are_unique() {
        let (uc, store) = use_case(questions());
        let now = Local::now();
        let first = uc.record_score(Score::new(1), now).unwrap();
        let second = uc.record_score(Score::new(2), now).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.load().len(), 2);
    }

    #[test]
    fn test_logger_receives_game_events() {
        let logger = Arc::new(RecordingLogger {
            events: Mutex::new(Vec::new()),
        });
        let (uc, _) = use_case(vec![Question::single("Q", ["A", "B"], "A", 2)]);
        let mut uc = uc.with_logger(logger.clone());

        uc.start("ada").unwrap();
        uc.dispatch(QuizAction::Select("B".into())).unwrap();
        uc.dispatch(QuizAction::Submit).unwrap();
        uc.dispatch(QuizAction::Advance).unwrap();

        let events = logger.events.lock().unwrap();
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                GameEventKind::GameStarted,
                GameEventKind::AnswerGraded,
                GameEventKind::GameFinished
            ]
        );
        assert!(events.iter().all(|e| e.player.as_deref() == Some("ada")));
        assert_eq!(events[1].payload["delta"], -1);
        assert_eq!(events[2].payload["score"], -1);
    }
}
