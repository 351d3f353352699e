//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod game_logger;
pub mod question_source;
pub mod score_store;
