//! High Scores use case
//!
//! Loads the score table when the high-score view is mounted and drives the
//! two-step clear control.

use crate::config::GameConfig;
use crate::ports::game_logger::{GameEvent, GameEventKind, GameLogger, NoGameLogger};
use crate::ports::score_store::{ScoreStore, ScoreStoreError};
use quiz_domain::{ClearConfirmation, ClearStep, ScoreRecord};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Use case backing the high-score view
pub struct HighScoresUseCase<S: ScoreStore + 'static> {
    store: Arc<S>,
    logger: Arc<dyn GameLogger>,
    records: Vec<ScoreRecord>,
    confirmation: ClearConfirmation,
    confirm_timeout: Duration,
}

impl<S: ScoreStore + 'static> HighScoresUseCase<S> {
    pub fn new(store: Arc<S>, config: &GameConfig) -> Self {
        Self {
            store,
            logger: Arc::new(NoGameLogger),
            records: Vec::new(),
            confirmation: ClearConfirmation::default(),
            confirm_timeout: config.clear_confirm_timeout,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn GameLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Reload records from the store and disarm the clear control
    pub fn mount(&mut self) -> &[ScoreRecord] {
        self.records = self.store.load();
        self.confirmation = ClearConfirmation::Idle;
        debug!("Loaded {} score records", self.records.len());
        &self.records
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn is_armed(&self) -> bool {
        self.confirmation.is_armed()
    }

    /// Whether the idle clear control is enabled
    pub fn can_clear(&self) -> bool {
        !self.records.is_empty()
    }

    /// Press the clear control.
    ///
    /// The first press arms it; the second overwrites the store with an
    /// empty list and reloads.
    pub fn activate_clear(&mut self, now: Instant) -> Result<ClearStep, ScoreStoreError> {
        let has_scores = self.can_clear();
        let step = self.confirmation.activate(now, has_scores);
        if step == ClearStep::Confirmed {
            let cleared = self.records.len();
            self.store.save(&[])?;
            self.records = self.store.load();
            info!("Cleared {} score records", cleared);
            self.logger.log(GameEvent::new(
                GameEventKind::ScoresCleared,
                serde_json::json!({ "records": cleared }),
            ));
        }
        Ok(step)
    }

    /// Disarm without clearing
    pub fn cancel_clear(&mut self) -> bool {
        self.confirmation.cancel()
    }

    /// Disarm an armed control that has waited longer than the timeout
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self.confirmation.expire(now, self.confirm_timeout);
        if expired {
            debug!("Clear confirmation expired");
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::score_store::InMemoryScoreStore;
    use quiz_domain::Score;

    fn store_with_scores() -> Arc<InMemoryScoreStore> {
        Arc::new(InMemoryScoreStore::with_records(vec![
            ScoreRecord::new("1", "2024-01-01 10:00", "ada", Score::new(12)),
            ScoreRecord::new("2", "2024-01-02 11:00", "bob", Score::new(-3)),
        ]))
    }

    #[test]
    fn test_mount_loads_records() {
        let store = store_with_scores();
        let mut uc = HighScoresUseCase::new(store, &GameConfig::default());
        assert!(uc.records().is_empty());
        assert_eq!(uc.mount().len(), 2);
        assert!(uc.can_clear());
    }

    #[test]
    fn test_mount_with_empty_store() {
        let mut uc = HighScoresUseCase::new(
            Arc::new(InMemoryScoreStore::new()),
            &GameConfig::default(),
        );
        assert!(uc.mount().is_empty());
        assert!(!uc.can_clear());
    }

    #[test]
    fn test_single_activation_leaves_scores() {
        let store = store_with_scores();
        let mut uc = HighScoresUseCase::new(Arc::clone(&store), &GameConfig::default());
        uc.mount();

        assert_eq!(uc.activate_clear(Instant::now()).unwrap(), ClearStep::Armed);
        assert!(uc.is_armed());
        assert_eq!(store.load().len(), 2);
        assert_eq!(uc.records().len(), 2);
    }

    #[test]
    fn test_two_activations_clear_store() {
        let store = store_with_scores();
        let mut uc = HighScoresUseCase::new(Arc::clone(&store), &GameConfig::default());
        uc.mount();

        let now = Instant::now();
        uc.activate_clear(now).unwrap();
        assert_eq!(uc.activate_clear(now).unwrap(), ClearStep::Confirmed);
        assert!(store.load().is_empty());
        assert!(uc.records().is_empty());
        assert!(!uc.is_armed());
    }

    #[test]
    fn test_cancel_between_activations_keeps_scores() {
        let store = store_with_scores();
        let mut uc = HighScoresUseCase::new(Arc::clone(&store), &GameConfig::default());
        uc.mount();

        uc.activate_clear(Instant::now()).unwrap();
        assert!(uc.cancel_clear());
        assert_eq!(uc.activate_clear(Instant::now()).unwrap(), ClearStep::Armed);
        assert_eq!(store.load().len(), 2);
    }

    #[test]
    fn test_tick_expires_armed_control() {
        let store = store_with_scores();
        let config = GameConfig::default().with_clear_confirm_timeout(Duration::from_secs(2));
        let mut uc = HighScoresUseCase::new(Arc::clone(&store), &config);
        uc.mount();

        let start = Instant::now();
        uc.activate_clear(start).unwrap();
        assert!(!uc.tick(start + Duration::from_secs(1)));
        assert!(uc.tick(start + Duration::from_secs(2)));
        assert!(!uc.is_armed());
        assert_eq!(uc.activate_clear(start).unwrap(), ClearStep::Armed);
        assert_eq!(store.load().len(), 2);
    }

    #[test]
    fn test_clear_is_ignored_without_scores() {
        let mut uc = HighScoresUseCase::new(
            Arc::new(InMemoryScoreStore::new()),
            &GameConfig::default(),
        );
        uc.mount();
        assert_eq!(uc.activate_clear(Instant::now()).unwrap(), ClearStep::Ignored);
        assert!(!uc.is_armed());
    }
}
