// src/interviews/models.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::candidates::models::CandidateSummary;
use crate::jobs::Job;

pub const DEFAULT_DURATION_MINUTES: u32 = 30;
pub const DEFAULT_TOTAL_QUESTIONS: u32 = 10;

// ============================================================================
// Interview Models
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            InterviewStatus::Pending => "pending",
            InterviewStatus::InProgress => "in_progress",
            InterviewStatus::Completed => "completed",
            InterviewStatus::Cancelled => "cancelled",
        })
    }
}

impl FromStr for InterviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "pending" => Ok(InterviewStatus::Pending),
            "in_progress" => Ok(InterviewStatus::InProgress),
            "completed" => Ok(InterviewStatus::Completed),
            "cancelled" => Ok(InterviewStatus::Cancelled),
            other => Err(format!("unknown interview status `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(alias = "question")]
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default = "default_points")]
    pub points: u32,
}

fn default_points() -> u32 {
    1
}

impl Question {
    pub fn multiple_choice(id: impl Into<String>, text: impl Into<String>, options: &[&str]) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind: QuestionType::MultipleChoice,
            options: options.iter().map(|o| o.to_string()).collect(),
            points: 1,
        }
    }

    pub fn with_fallback_id(mut self, index: usize) -> Self {
        if self.id.trim().is_empty() {
            self.id = format!("q{}", index + 1);
        }
        self
    }

    /// Options a candidate may pick from; true/false questions carry none on
    /// the wire.
    pub fn choices(&self) -> Vec<String> {
        match self.kind {
            QuestionType::TrueFalse if self.options.is_empty() => {
                vec!["true".to_string(), "false".to_string()]
            }
            _ => self.options.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Interview {
    #[serde(alias = "_id")]
    pub id: String,
    pub job_id: String,
    pub candidate_id: String,
    pub recruiter_id: String,
    #[serde(default)]
    pub status: InterviewStatus,
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    #[serde(default = "default_total_questions")]
    pub total_questions: u32,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub job: Option<Job>,
    #[serde(default)]
    pub candidate: Option<CandidateSummary>,
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_MINUTES
}

fn default_total_questions() -> u32 {
    DEFAULT_TOTAL_QUESTIONS
}

#[derive(Serialize, Debug, Clone)]
pub struct CreateInterview {
    pub job_id: String,
    pub candidate_id: String,
    pub recruiter_id: String,
    pub status: InterviewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
    pub duration_minutes: u32,
    pub total_questions: u32,
}

impl CreateInterview {
    pub fn new(
        job_id: impl Into<String>,
        candidate_id: impl Into<String>,
        recruiter_id: impl Into<String>,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            candidate_id: candidate_id.into(),
            recruiter_id: recruiter_id.into(),
            status: InterviewStatus::Pending,
            scheduled_at: None,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            total_questions: DEFAULT_TOTAL_QUESTIONS,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ScheduledInterview {
    #[serde(default)]
    pub message: String,
    pub interview_id: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InterviewSubmission {
    pub interview_id: String,
    pub answers: HashMap<String, String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct InterviewResult {
    #[serde(default)]
    pub interview_id: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}
