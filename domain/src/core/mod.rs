//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a trivia prompt and its correct answer
//! - [`validation`]: consistency checks for loaded questions
//! - [`error::DomainError`]: rejected quiz actions

pub mod error;
pub mod question;
pub mod validation;
