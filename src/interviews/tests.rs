//! Tests for interviews module

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    use super::super::session::{INCOMPLETE_SUBMISSION_MESSAGE, SUBMISSION_FAILED_MESSAGE};
    use super::super::*;
    use crate::common::ApiError;
    use crate::session::Role;
    use crate::testing::Harness;

    fn questions() -> Vec<Question> {
        vec![
            Question::multiple_choice("q1", "Which keyword declares a trait?", &["trait", "class"]),
            Question::multiple_choice("q2", "Which type owns a heap string?", &["&str", "String"]),
            Question::multiple_choice("q3", "Which macro formats text?", &["format!", "print"]),
            Question::multiple_choice("q4", "Which crate is async runtime?", &["tokio", "regex"]),
        ]
    }

    #[test]
    fn test_navigation_is_bounded() {
        let mut session = InterviewSession::new("iv-1", questions()).expect("session");

        assert!(!session.previous());
        assert_eq!(session.current_index(), 0);

        assert!(session.next());
        assert!(session.next());
        assert!(session.next());
        assert!(!session.next());
        assert_eq!(session.current_index(), 3);

        assert!(session.previous());
        assert_eq!(session.current_question().id, "q3");
    }

    #[test]
    fn test_progress_follows_position() {
        let mut session = InterviewSession::new("iv-1", questions()).expect("session");
        assert_eq!(session.progress_percent(), 25);
        session.next();
        assert_eq!(session.progress_percent(), 50);
        session.next();
        session.next();
        assert_eq!(session.progress(), 100.0);
    }

    #[test]
    fn test_answer_must_be_an_option() {
        let mut session = InterviewSession::new("iv-1", questions()).expect("session");

        let err = session.answer("q1", "struct").unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
        assert_eq!(session.answer_for("q1"), None);

        session.answer("q1", "trait").expect("valid answer");
        assert_eq!(session.answer_for("q1"), Some("trait"));

        assert!(matches!(
            session.answer("q9", "trait"),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_incomplete_submission_refused() {
        let mut session = InterviewSession::new("iv-1", questions()).expect("session");
        session.answer("q1", "trait").expect("answer");

        let err = session.submission().unwrap_err();

        assert_eq!(err.message(), INCOMPLETE_SUBMISSION_MESSAGE);
        assert_eq!(session.error(), Some(INCOMPLETE_SUBMISSION_MESSAGE));
        assert_eq!(session.unanswered().len(), 3);

        session.answer("q2", "String").expect("answer");
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_empty_question_list_rejected() {
        assert!(InterviewSession::new("iv-1", Vec::new()).is_err());
    }

    fn answer_all(session: &mut InterviewSession) {
        loop {
            let first = session.current_question().choices()[0].clone();
            session.answer_current(&first).expect("answer");
            if !session.next() {
                break;
            }
        }
    }

    #[tokio::test]
    async fn test_full_interview_flow() {
        let h = Harness::start().await;
        h.sign_in_as("cand@example.com", Role::Candidate).await;
        Mock::given(method("POST"))
            .and(path("/ai/generate-interview-questions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "questions": [
                    { "id": "a", "text": "Pick one", "options": ["x", "y"] },
                    { "id": "b", "text": "Pick another", "options": ["z", "w"] }
                ]
            })))
            .mount(&h.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/candidates/interviews/iv-7/submit"))
            .and(body_json(json!({
                "interview_id": "iv-7",
                "answers": { "a": "x", "b": "z" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "interview_id": "iv-7",
                "score": 100.0,
                "feedback": "Well done"
            })))
            .expect(1)
            .mount(&h.server)
            .await;

        let api = InterviewsApi::new(h.client.clone());
        let mut session = api.start("iv-7", "job-1", 2).await.expect("start");
        answer_all(&mut session);

        let result = api.submit(&mut session).await.expect("submit");

        assert_eq!(result.score, Some(100.0));
        assert!(session.is_completed());
    }

    #[tokio::test]
    async fn test_unanswered_interview_sends_nothing() {
        let h = Harness::start().await;
        h.sign_in_as("cand@example.com", Role::Candidate).await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&h.server)
            .await;

        let api = InterviewsApi::new(h.client.clone());
        let mut session = InterviewSession::new("iv-1", questions()).expect("session");

        let err = api.submit(&mut session).await.unwrap_err();
        assert_eq!(err.message(), INCOMPLETE_SUBMISSION_MESSAGE);
        assert!(!session.is_completed());
    }

    #[tokio::test]
    async fn test_failed_submission_sets_inline_error() {
        let h = Harness::start().await;
        h.sign_in_as("cand@example.com", Role::Candidate).await;
        Mock::given(method("POST"))
            .and(path("/candidates/interviews/iv-1/submit"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&h.server)
            .await;

        let api = InterviewsApi::new(h.client.clone());
        let mut session = InterviewSession::new("iv-1", questions()).expect("session");
        answer_all(&mut session);

        assert!(api.submit(&mut session).await.is_err());
        assert_eq!(session.error(), Some(SUBMISSION_FAILED_MESSAGE));
        assert!(!session.is_completed());
    }

    #[test]
    fn test_interview_status_wire_names() {
        assert_eq!(
            serde_json::to_value(InterviewStatus::InProgress).expect("serialize"),
            json!("in_progress")
        );
        assert_eq!("in-progress".parse::<InterviewStatus>(), Ok(InterviewStatus::InProgress));
    }
}
