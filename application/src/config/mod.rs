//! Application-level configuration.
//!
//! - [`GameConfig`]: scoring penalty and clear-confirmation timeout

pub mod game_config;

pub use game_config::{ANONYMOUS_PLAYER, GameConfig};
