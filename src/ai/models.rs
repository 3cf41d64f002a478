// src/ai/models.rs

use serde::{Deserialize, Serialize};

use crate::interviews::models::Question;

#[derive(Serialize, Debug, Clone)]
pub struct JobDescriptionRequest {
    pub title: String,
    pub job_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneratedJobDescription {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct ResumeAnalysisRequest {
    pub resume_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ResumeAnalysis {
    #[serde(default)]
    pub summary: String,
    /// Only present when a job description was supplied.
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub raw_analysis: String,
    #[serde(default)]
    pub model_used: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct InterviewQuestionsRequest {
    pub job_id: String,
    pub num_questions: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneratedQuestions {
    #[serde(default)]
    pub questions: Vec<Question>,
}
