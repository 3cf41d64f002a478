// src/candidates/api.rs

use reqwest::multipart::{Form, Part};
use tracing::info;

use super::models::*;
use super::validators::{ApplicationValidator, ResumeValidator};
use crate::auth::models::MessageResponse;
use crate::client::ApiClient;
use crate::common::{path_segment, ApiError, Validator};
use crate::navigation::Notifier;

/// Candidate-side application calls.
#[derive(Clone)]
pub struct CandidatesApi {
    client: ApiClient,
}

impl CandidatesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn my_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.client.get("/candidates/applications").await
    }

    pub async fn application(&self, application_id: &str) -> Result<Application, ApiError> {
        self.client
            .get(&format!("/candidates/applications/{}", path_segment(application_id)?))
            .await
    }

    /// The cover letter travels as a query parameter.
    pub async fn apply(&self, job_id: &str, request: &ApplyRequest) -> Result<ApplyResponse, ApiError> {
        ApplicationValidator.validate(request).into_result()?;

        let response: ApplyResponse = self
            .client
            .post_with_query(
                &format!("/candidates/apply/{}", path_segment(job_id)?),
                request,
            )
            .await?;

        info!(job_id = %job_id, application_id = %response.application_id, "Application submitted");
        self.client.notifier().toast_success(if response.message.is_empty() {
            "Application submitted successfully"
        } else {
            &response.message
        });
        Ok(response)
    }

    pub async fn upload_resume(&self, resume: ResumeUpload) -> Result<MessageResponse, ApiError> {
        ResumeValidator.validate(&resume).into_result()?;

        let size = resume.bytes.len();
        let part = Part::bytes(resume.bytes)
            .file_name(resume.file_name)
            .mime_str("application/pdf")?;
        let form = Form::new().part("resume", part);

        let response: MessageResponse = self
            .client
            .post_multipart("/candidates/upload-resume", form)
            .await?;
        info!(bytes = size, "Resume uploaded");
        Ok(response)
    }
}
