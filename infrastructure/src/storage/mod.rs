//! Local persistence: a string key-value file and the score table stored in it.

mod local_store;
mod score_store;

pub use local_store::LocalKeyValueStore;
pub use score_store::{LocalScoreStore, SCORES_KEY};
