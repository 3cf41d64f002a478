// src/ai/api.rs

use tracing::{debug, info};

use super::models::*;
use crate::client::ApiClient;
use crate::common::validation::require;
use crate::common::{ApiError, ValidationResult};
use crate::interviews::models::Question;

pub const DEFAULT_QUESTION_COUNT: u32 = 5;
pub const MAX_QUESTION_COUNT: u32 = 20;

/// AI-assisted helpers exposed by the backend.
#[derive(Clone)]
pub struct AiApi {
    client: ApiClient,
}

impl AiApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn generate_job_description(
        &self,
        request: &JobDescriptionRequest,
    ) -> Result<GeneratedJobDescription, ApiError> {
        let mut validation = ValidationResult::new();
        require(&mut validation, "title", &request.title, "Title");
        require(&mut validation, "job_type", &request.job_type, "Job type");
        validation.into_result()?;

        let generated: GeneratedJobDescription = self
            .client
            .post("/ai/generate-job-description", request)
            .await?;
        info!(title = %request.title, "Job description generated");
        Ok(generated)
    }

    pub async fn analyze_resume(
        &self,
        request: &ResumeAnalysisRequest,
    ) -> Result<ResumeAnalysis, ApiError> {
        let mut validation = ValidationResult::new();
        require(&mut validation, "resume_text", &request.resume_text, "Resume text");
        validation.into_result()?;

        let analysis: ResumeAnalysis = self.client.post("/ai/analyze-resume", request).await?;
        debug!(
            match_score = ?analysis.match_score,
            model = ?analysis.model_used,
            "Resume analysed"
        );
        Ok(analysis)
    }

    /// Questions come back with stable ids even when the generator omits them.
    pub async fn generate_interview_questions(
        &self,
        job_id: &str,
        num_questions: u32,
    ) -> Result<Vec<Question>, ApiError> {
        if num_questions == 0 || num_questions > MAX_QUESTION_COUNT {
            return Err(ApiError::ValidationError(format!(
                "num_questions: Ask for between 1 and {MAX_QUESTION_COUNT} questions"
            )));
        }

        let request = InterviewQuestionsRequest {
            job_id: job_id.to_string(),
            num_questions,
        };
        let generated: GeneratedQuestions = self
            .client
            .post("/ai/generate-interview-questions", &request)
            .await?;

        let questions: Vec<Question> = generated
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, question)| question.with_fallback_id(index))
            .collect();
        info!(job_id = %job_id, count = questions.len(), "Interview questions generated");
        Ok(questions)
    }
}
