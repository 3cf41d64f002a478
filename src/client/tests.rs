//! Tests for client module
//!
//! These tests verify the request/response pipeline including:
//! - Bearer attachment from session state
//! - Uniform 401 handling (session cleared, redirect to login)
//! - Error message extraction and toast reporting

#[cfg(test)]
mod tests {
    use super::super::pipeline::*;
    use crate::common::ApiError;
    use crate::navigation::notifier::NoticeKind;
    use crate::session::{Role, SESSION_STORAGE_KEY};
    use crate::testing::Harness;
    use reqwest::header::AUTHORIZATION;
    use reqwest::{Method, StatusCode};
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    // ========================================================================
    // Pure steps
    // ========================================================================

    fn blank_request() -> reqwest::Request {
        reqwest::Request::new(
            Method::GET,
            "http://localhost/jobs".parse().expect("url"),
        )
    }

    #[test]
    fn test_attach_auth_sets_bearer() {
        let mut request = blank_request();
        attach_auth(&mut request, Some("abc.def.ghi")).expect("attach");
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer abc.def.ghi"
        );
    }

    #[test]
    fn test_attach_auth_without_token_leaves_request_alone() {
        let mut request = blank_request();
        attach_auth(&mut request, None).expect("attach");
        attach_auth(&mut request, Some("")).expect("attach");
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_extract_error_message_variants() {
        assert_eq!(
            extract_error_message(br#"{"detail":"Invalid credentials"}"#),
            "Invalid credentials"
        );
        assert_eq!(
            extract_error_message(
                br#"{"detail":[{"loc":["body","email"],"msg":"field required"},{"msg":"value is not a valid email"}]}"#
            ),
            "field required; value is not a valid email"
        );
        assert_eq!(
            extract_error_message(br#"{"error":"Not enough permissions"}"#),
            "Not enough permissions"
        );
        assert_eq!(extract_error_message(b"<html>oops</html>"), "An error occurred");
        assert_eq!(extract_error_message(br#"{"detail":""}"#), "An error occurred");
        assert_eq!(extract_error_message(b""), "An error occurred");
    }

    #[test]
    fn test_interpret_response() {
        assert_eq!(
            interpret_response(StatusCode::OK, b"{}"),
            ResponseOutcome::Success
        );
        assert_eq!(
            interpret_response(StatusCode::UNAUTHORIZED, br#"{"detail":"expired"}"#),
            ResponseOutcome::Unauthorized("expired".to_string())
        );
        assert_eq!(
            interpret_response(StatusCode::FORBIDDEN, br#"{"detail":"Not enough permissions"}"#),
            ResponseOutcome::Failure {
                status: StatusCode::FORBIDDEN,
                message: "Not enough permissions".to_string()
            }
        );
    }

    #[test]
    fn test_parse_payload_empty_body() {
        let value: Value = parse_payload(b"").expect("parse");
        assert!(value.is_null());
        let unit: Option<Value> = parse_payload(b"  ").expect("parse");
        assert!(unit.is_none());
    }

    // ========================================================================
    // Client behaviour against a mock backend
    // ========================================================================

    #[tokio::test]
    async fn test_requests_carry_session_bearer() {
        let h = Harness::start_at("/candidate").await;
        let token = h.sign_in_as("cand@example.com", Role::Candidate).await;

        Mock::given(method("GET"))
            .and(path("/candidates/applications"))
            .and(header("authorization", format!("Bearer {token}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&h.server)
            .await;

        let apps: Vec<Value> = h
            .client
            .get("/candidates/applications")
            .await
            .expect("request");
        assert!(apps.is_empty());
    }

    #[tokio::test]
    async fn test_requests_without_session_are_unauthenticated() {
        let h = Harness::start().await;

        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&h.server)
            .await;

        let _: Vec<Value> = h.client.get("/jobs").await.expect("request");

        let received = h.server.received_requests().await.expect("recording");
        assert_eq!(received.len(), 1);
        assert!(received[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session_and_redirects() {
        let h = Harness::start_at("/admin/users").await;
        h.sign_in_as("admin@example.com", Role::Admin).await;

        Mock::given(method("GET"))
            .and(path("/admin/users"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({ "detail": "Could not validate credentials" })),
            )
            .mount(&h.server)
            .await;

        let err = h
            .client
            .get::<Value>("/admin/users")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Unauthorized(_)));
        assert!(!h.client.session().is_authenticated().await);
        assert!(h
            .storage
            .get_item(SESSION_STORAGE_KEY)
            .await
            .expect("get")
            .is_none());
        assert_eq!(h.navigator.history().last().map(String::as_str), Some("/login"));
        assert!(h.notifier.messages(NoticeKind::Toast).is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_on_login_view_does_not_navigate() {
        let h = Harness::start_at("/login").await;

        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&h.server)
            .await;

        let _ = h.client.get::<Value>("/jobs").await;
        let _ = h.client.get::<Value>("/jobs").await;

        assert_eq!(h.navigator.history(), vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn test_repeated_unauthorized_is_idempotent() {
        let h = Harness::start_at("/recruiter").await;
        h.sign_in_as("rec@example.com", Role::Recruiter).await;

        Mock::given(method("GET"))
            .and(path("/recruiters/interviews"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&h.server)
            .await;

        let _ = h.client.get::<Value>("/recruiters/interviews").await;
        let _ = h.client.get::<Value>("/recruiters/interviews").await;

        assert_eq!(
            h.navigator.history(),
            vec!["/recruiter".to_string(), "/login".to_string()]
        );
        assert!(!h.client.session().is_authenticated().await);
    }

    #[tokio::test]
    async fn test_server_errors_are_toasted() {
        let h = Harness::start().await;

        Mock::given(method("DELETE"))
            .and(path("/jobs/42"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({ "detail": "Not enough permissions" })),
            )
            .mount(&h.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/admin/stats"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&h.server)
            .await;

        let forbidden = h.client.delete::<Value>("/jobs/42").await.unwrap_err();
        let server = h.client.get::<Value>("/admin/stats").await.unwrap_err();

        assert!(matches!(forbidden, ApiError::Forbidden(_)));
        assert_eq!(server.status(), Some(500));
        assert_eq!(
            h.notifier.messages(NoticeKind::Toast),
            vec![
                "Not enough permissions".to_string(),
                "An error occurred".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_default_header_applies_when_session_has_no_token() {
        let h = Harness::start().await;
        h.client.set_default_token(Some("default-token")).expect("set");

        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(header("authorization", "Bearer default-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&h.server)
            .await;

        let _: Vec<Value> = h.client.get("/jobs").await.expect("request");
    }

    #[tokio::test]
    async fn test_session_token_wins_over_default_header() {
        let h = Harness::start().await;
        h.client.set_default_token(Some("stale-token")).expect("set");
        let token = h.sign_in_as("cand@example.com", Role::Candidate).await;

        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(header("authorization", format!("Bearer {token}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&h.server)
            .await;

        let _: Vec<Value> = h.client.get("/jobs").await.expect("request");
    }

    #[tokio::test]
    async fn test_network_failure_is_toasted() {
        let h = Harness::start().await;
        let unreachable = crate::common::ClientConfig::default()
            .with_api_url("http://127.0.0.1:9");
        let client = crate::client::ApiClient::new(
            &unreachable,
            h.client.session().clone(),
            h.navigator.clone(),
            h.notifier.clone(),
        )
        .expect("client");

        let err = client.get::<Value>("/jobs").await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        let toasts = h.notifier.messages(NoticeKind::Toast);
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].starts_with("Network error"));
    }

    #[tokio::test]
    async fn test_malformed_base_url_is_toasted() {
        let h = Harness::start_at("/login").await;
        let schemeless = crate::common::ClientConfig::default().with_api_url("localhost:8000/api");
        let client = crate::client::ApiClient::new(
            &schemeless,
            h.client.session().clone(),
            h.navigator.clone(),
            h.notifier.clone(),
        )
        .expect("client");
        let auth = crate::auth::AuthService::new(client, crate::common::LoginContract::OAuth2Form);

        let err = auth
            .login("test@example.com", "password123")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        assert!(err.was_toasted());
        let toasts = h.notifier.messages(NoticeKind::Toast);
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].starts_with("Network error"));
        assert!(!h.client.session().is_authenticated().await);
    }
}
