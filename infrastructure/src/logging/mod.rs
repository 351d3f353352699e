//! Logging infrastructure: structured game-event logging.
//!
//! Provides [`JsonlGameLogger`], a JSONL file writer that implements
//! the [`GameLogger`](quiz_application::GameLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlGameLogger;
