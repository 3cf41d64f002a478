// src/interviews/api.rs

use tracing::{info, warn};

use super::models::InterviewResult;
use super::session::InterviewSession;
use crate::ai::AiApi;
use crate::client::ApiClient;
use crate::common::{path_segment, ApiError};

/// Drives the candidate's interview bot against the backend.
#[derive(Clone)]
pub struct InterviewsApi {
    client: ApiClient,
    ai: AiApi,
}

impl InterviewsApi {
    pub fn new(client: ApiClient) -> Self {
        let ai = AiApi::new(client.clone());
        Self { client, ai }
    }

    /// Load generated questions for `job_id` and open a session.
    pub async fn start(
        &self,
        interview_id: &str,
        job_id: &str,
        num_questions: u32,
    ) -> Result<InterviewSession, ApiError> {
        let questions = self
            .ai
            .generate_interview_questions(job_id, num_questions)
            .await?;
        let session = InterviewSession::new(interview_id, questions)?;
        info!(
            interview_id = %interview_id,
            questions = session.questions().len(),
            "Interview started"
        );
        Ok(session)
    }

    /// Submit every answer. Nothing is sent while questions remain open.
    pub async fn submit(&self, session: &mut InterviewSession) -> Result<InterviewResult, ApiError> {
        let submission = session.submission()?;
        let path = format!(
            "/candidates/interviews/{}/submit",
            path_segment(&submission.interview_id)?
        );

        match self.client.post::<InterviewResult, _>(&path, &submission).await {
            Ok(result) => {
                session.mark_completed();
                info!(interview_id = %submission.interview_id, score = ?result.score, "Interview submitted");
                Ok(result)
            }
            Err(e) => {
                warn!(interview_id = %submission.interview_id, error = %e, "Interview submission failed");
                session.mark_failed();
                Err(e)
            }
        }
    }
}
