// src/interviews/session.rs

use std::collections::HashMap;

use super::models::{InterviewSubmission, Question};
use crate::common::ApiError;

pub const INCOMPLETE_SUBMISSION_MESSAGE: &str = "Please answer all questions before submitting.";
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to submit interview. Please try again.";

/// Client-side state of one sitting of the interview bot.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    interview_id: String,
    questions: Vec<Question>,
    answers: HashMap<String, String>,
    current: usize,
    error: Option<String>,
    completed: bool,
}

impl InterviewSession {
    pub fn new(interview_id: impl Into<String>, questions: Vec<Question>) -> Result<Self, ApiError> {
        if questions.is_empty() {
            return Err(ApiError::InvalidInput(
                "interview has no questions".to_string(),
            ));
        }
        Ok(Self {
            interview_id: interview_id.into(),
            questions,
            answers: HashMap::new(),
            current: 0,
            error: None,
            completed: false,
        })
    }

    pub fn interview_id(&self) -> &str {
        &self.interview_id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    /// Inline message shown under the question card, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Record an answer. Questions with options only accept one of them.
    pub fn answer(&mut self, question_id: &str, answer: &str) -> Result<(), ApiError> {
        let question = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| ApiError::InvalidInput(format!("unknown question `{question_id}`")))?;

        let choices = question.choices();
        if !choices.is_empty() && !choices.iter().any(|c| c == answer) {
            return Err(ApiError::ValidationError(format!(
                "answer: `{answer}` is not one of the options"
            )));
        }

        self.answers.insert(question_id.to_string(), answer.to_string());
        self.error = None;
        Ok(())
    }

    pub fn answer_current(&mut self, answer: &str) -> Result<(), ApiError> {
        let id = self.current_question().id.clone();
        self.answer(&id, answer)
    }

    /// Advance to the next question. Returns false on the last one.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Position-based progress, `(current + 1) / total`, in percent.
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.questions.len() as f64 * 100.0
    }

    pub fn progress_percent(&self) -> u32 {
        self.progress().round() as u32
    }

    pub fn unanswered(&self) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| {
                self.answers
                    .get(&q.id)
                    .map_or(true, |a| a.trim().is_empty())
            })
            .collect()
    }

    /// Build the payload for submission, or record the inline error when
    /// anything is still unanswered.
    pub fn submission(&mut self) -> Result<InterviewSubmission, ApiError> {
        if !self.unanswered().is_empty() {
            self.error = Some(INCOMPLETE_SUBMISSION_MESSAGE.to_string());
            return Err(ApiError::ValidationError(
                INCOMPLETE_SUBMISSION_MESSAGE.to_string(),
            ));
        }
        Ok(InterviewSubmission {
            interview_id: self.interview_id.clone(),
            answers: self.answers.clone(),
        })
    }

    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
        self.error = None;
    }

    pub(crate) fn mark_failed(&mut self) {
        self.error = Some(SUBMISSION_FAILED_MESSAGE.to_string());
    }
}
