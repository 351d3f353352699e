//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod high_scores;
pub mod play_quiz;
