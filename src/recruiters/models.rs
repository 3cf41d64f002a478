// src/recruiters/models.rs

use serde::Serialize;

use crate::candidates::ApplicationStatus;
use crate::interviews::InterviewStatus;

#[derive(Serialize, Debug, Clone, Default)]
pub struct ApplicationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
}

/// Sent as query parameters.
#[derive(Serialize, Debug, Clone)]
pub struct ApplicationReview {
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct InterviewFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InterviewStatus>,
}
