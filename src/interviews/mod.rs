// src/interviews/mod.rs
//! # Interviews Module
//!
//! The candidate's multiple-choice interview bot:
//! - `models`: interview, question and submission payloads
//! - `session`: answers, navigation and progress for one sitting
//! - `api`: question loading and submission

pub mod api;
pub mod models;
pub mod session;

#[cfg(test)]
mod tests;

pub use api::InterviewsApi;
pub use models::{Interview, InterviewStatus, Question, QuestionType};
pub use session::InterviewSession;
