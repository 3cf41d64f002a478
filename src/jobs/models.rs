// src/jobs/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Job Models
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
    Draft,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            JobStatus::Open => "open",
            JobStatus::Closed => "closed",
            JobStatus::Draft => "draft",
        })
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(JobStatus::Open),
            "closed" => Ok(JobStatus::Closed),
            "draft" => Ok(JobStatus::Draft),
            other => Err(format!("unknown job status `{other}`")),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Job {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub recruiter_id: Option<String>,
    #[serde(default)]
    pub ai_generated_description: Option<String>,
    #[serde(default)]
    pub total_applications: i64,
    #[serde(default)]
    pub total_interviews: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct CreateJob {
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub status: JobStatus,
    /// Filled in by the backend from the caller's identity.
    pub recruiter_id: String,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct UpdateJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

impl UpdateJob {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.requirements.is_none()
            && self.status.is_none()
    }
}

/// Query for the job listing
#[derive(Serialize, Debug, Clone)]
pub struct JobSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recruiter_id: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for JobSearch {
    fn default() -> Self {
        Self {
            query: None,
            status: None,
            recruiter_id: None,
            page: 1,
            limit: 10,
        }
    }
}
