//! Question loading.

mod json_source;

pub use json_source::JsonQuestionSource;
