//! High-score records and the clear-confirmation control.

pub mod clear;
pub mod record;

pub use clear::{ClearConfirmation, ClearStep};
pub use record::{RecordId, ScoreRecord};
