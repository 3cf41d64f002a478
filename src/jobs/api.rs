// src/jobs/api.rs

use tracing::info;

use super::models::*;
use super::validators::{JobSearchValidator, JobValidator};
use crate::auth::models::MessageResponse;
use crate::client::ApiClient;
use crate::common::{path_segment, ApiError, Validator};

#[derive(Clone)]
pub struct JobsApi {
    client: ApiClient,
}

impl JobsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, search: &JobSearch) -> Result<Vec<Job>, ApiError> {
        JobSearchValidator.validate(search).into_result()?;
        self.client.get_with_query("/jobs", search).await
    }

    pub async fn get(&self, job_id: &str) -> Result<Job, ApiError> {
        self.client.get(&job_path(job_id)?).await
    }

    pub async fn create(&self, job: &CreateJob) -> Result<Job, ApiError> {
        JobValidator.validate(job).into_result()?;
        let created: Job = self.client.post("/jobs", job).await?;
        info!(job_id = %created.id, title = %created.title, "Job created");
        Ok(created)
    }

    pub async fn update(&self, job_id: &str, update: &UpdateJob) -> Result<Job, ApiError> {
        JobValidator.validate(update).into_result()?;
        self.client.put(&job_path(job_id)?, update).await
    }

    pub async fn delete(&self, job_id: &str) -> Result<MessageResponse, ApiError> {
        let response: Option<MessageResponse> = self.client.delete(&job_path(job_id)?).await?;
        info!(job_id = %job_id, "Job deleted");
        Ok(response.unwrap_or(MessageResponse {
            message: "Job deleted successfully".to_string(),
        }))
    }
}

fn job_path(job_id: &str) -> Result<String, ApiError> {
    Ok(format!("/jobs/{}", path_segment(job_id)?))
}
