// src/recruiters/api.rs

use tracing::info;

use super::models::*;
use super::validators::{InterviewScheduleValidator, ReviewValidator};
use crate::auth::models::MessageResponse;
use crate::candidates::Application;
use crate::client::ApiClient;
use crate::common::{path_segment, ApiError, Validator};
use crate::interviews::models::{CreateInterview, Interview, ScheduledInterview};
use crate::navigation::Notifier;

/// Recruiter-side review and scheduling calls.
#[derive(Clone)]
pub struct RecruitersApi {
    client: ApiClient,
}

impl RecruitersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn applications(&self, filter: &ApplicationFilter) -> Result<Vec<Application>, ApiError> {
        self.client
            .get_with_query("/recruiters/applications", filter)
            .await
    }

    pub async fn review(
        &self,
        application_id: &str,
        review: &ApplicationReview,
    ) -> Result<MessageResponse, ApiError> {
        ReviewValidator.validate(review).into_result()?;

        let path = format!(
            "/recruiters/applications/{}/review",
            path_segment(application_id)?
        );
        let response: MessageResponse = self.client.post_with_query(&path, review).await?;

        info!(application_id = %application_id, status = %review.status, "Application reviewed");
        self.client
            .notifier()
            .toast_success(&format!("Application {} successfully", review.status));
        Ok(response)
    }

    pub async fn schedule_interview(
        &self,
        application_id: &str,
        interview: &CreateInterview,
    ) -> Result<ScheduledInterview, ApiError> {
        InterviewScheduleValidator.validate(interview).into_result()?;

        let path = format!(
            "/recruiters/applications/{}/schedule-interview",
            path_segment(application_id)?
        );
        let scheduled: ScheduledInterview = self.client.post(&path, interview).await?;

        info!(
            application_id = %application_id,
            interview_id = %scheduled.interview_id,
            "Interview scheduled"
        );
        Ok(scheduled)
    }

    pub async fn interviews(&self, filter: &InterviewFilter) -> Result<Vec<Interview>, ApiError> {
        self.client
            .get_with_query("/recruiters/interviews", filter)
            .await
    }
}
