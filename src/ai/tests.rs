//! Tests for ai module

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    use super::super::models::*;
    use super::super::*;
    use crate::common::ApiError;
    use crate::navigation::NoticeKind;
    use crate::session::Role;
    use crate::testing::Harness;

    #[tokio::test]
    async fn test_generate_job_description() {
        let h = Harness::start().await;
        h.sign_in_as("rec@example.com", Role::Recruiter).await;
        Mock::given(method("POST"))
            .and(path("/ai/generate-job-description"))
            .and(body_json(json!({ "title": "Rust Engineer", "job_type": "full-time" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "description": "Own the ingestion pipeline.",
                "requirements": "Requirements: Rust, Tokio"
            })))
            .expect(1)
            .mount(&h.server)
            .await;

        let api = AiApi::new(h.client.clone());
        let generated = api
            .generate_job_description(&JobDescriptionRequest {
                title: "Rust Engineer".to_string(),
                job_type: "full-time".to_string(),
                experience_level: None,
                skills: vec![],
            })
            .await
            .expect("generate");

        assert_eq!(generated.description, "Own the ingestion pipeline.");
        assert!(generated.requirements.contains("Tokio"));
    }

    #[tokio::test]
    async fn test_analyze_resume_requires_text() {
        let h = Harness::start().await;
        let api = AiApi::new(h.client.clone());

        let err = api
            .analyze_resume(&ResumeAnalysisRequest {
                resume_text: "  ".to_string(),
                job_description: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.message(), "resume_text: Resume text is required");
        assert!(h.notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_resume_with_job_description() {
        let h = Harness::start().await;
        h.sign_in_as("rec@example.com", Role::Recruiter).await;
        Mock::given(method("POST"))
            .and(path("/ai/analyze-resume"))
            .and(body_json(json!({
                "resume_text": "Five years of Rust",
                "job_description": "Rust engineer"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "summary": "Strong systems background",
                "match_score": 91.3,
                "raw_analysis": "...",
                "model_used": "huggingface",
                "score": 91.3
            })))
            .mount(&h.server)
            .await;

        let api = AiApi::new(h.client.clone());
        let analysis = api
            .analyze_resume(&ResumeAnalysisRequest {
                resume_text: "Five years of Rust".to_string(),
                job_description: Some("Rust engineer".to_string()),
            })
            .await
            .expect("analyze");

        assert_eq!(analysis.match_score, Some(91.3));
        assert_eq!(analysis.model_used.as_deref(), Some("huggingface"));
    }

    #[tokio::test]
    async fn test_generated_questions_get_ids() {
        let h = Harness::start().await;
        h.sign_in_as("cand@example.com", Role::Candidate).await;
        Mock::given(method("POST"))
            .and(path("/ai/generate-interview-questions"))
            .and(body_json(json!({ "job_id": "job-1", "num_questions": 2 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "questions": [
                    { "question": "What does `?` do?", "options": ["Propagates errors", "Panics"], "correct_answer": 0 },
                    { "id": "custom", "text": "Is Rust garbage collected?", "type": "true_false" }
                ]
            })))
            .mount(&h.server)
            .await;

        let api = AiApi::new(h.client.clone());
        let questions = api
            .generate_interview_questions("job-1", 2)
            .await
            .expect("questions");

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, "q1");
        assert_eq!(questions[0].text, "What does `?` do?");
        assert_eq!(questions[1].id, "custom");
        assert_eq!(questions[1].choices(), vec!["true".to_string(), "false".to_string()]);
    }

    #[tokio::test]
    async fn test_question_count_is_bounded() {
        let h = Harness::start().await;
        let api = AiApi::new(h.client.clone());

        assert!(matches!(
            api.generate_interview_questions("job-1", 0).await,
            Err(ApiError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_generation_failure_is_toasted() {
        let h = Harness::start().await;
        h.sign_in_as("rec@example.com", Role::Recruiter).await;
        Mock::given(method("POST"))
            .and(path("/ai/generate-job-description"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "detail": "An error occurred while generating the job description"
            })))
            .mount(&h.server)
            .await;

        let api = AiApi::new(h.client.clone());
        let err = api
            .generate_job_description(&JobDescriptionRequest {
                title: "Rust Engineer".to_string(),
                job_type: "contract".to_string(),
                experience_level: None,
                skills: vec![],
            })
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(
            h.notifier.messages(NoticeKind::Toast),
            vec!["An error occurred while generating the job description".to_string()]
        );
    }
}
