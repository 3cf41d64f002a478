//! Tests for navigation module

#[cfg(test)]
mod tests {
    use super::super::guard::evaluate;
    use super::super::routes::*;
    use super::super::*;
    use crate::session::{Role, Session, SessionUser};
    use crate::testing::{expired_token, valid_token, Harness};
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    fn session_for(role: Role) -> Session {
        Session::authenticated(
            "token".to_string(),
            SessionUser::new(format!("{role}@example.com"), role),
        )
    }

    #[test]
    fn test_required_roles_by_section() {
        assert_eq!(required_roles("/admin"), Some(&[Role::Admin][..]));
        assert_eq!(required_roles("/admin/logs"), Some(&[Role::Admin][..]));
        assert_eq!(
            required_roles("/candidate/interview/42"),
            Some(&[Role::Candidate][..])
        );
        assert_eq!(required_roles("/recruiter/post-job"), Some(&[Role::Recruiter][..]));
        assert_eq!(required_roles("/jobs"), None);
        assert_eq!(required_roles("/"), None);
        assert_eq!(required_roles("/administrator"), None);
    }

    #[test]
    fn test_evaluate_candidate_on_admin_view() {
        let decision = evaluate(&session_for(Role::Candidate), true, &[Role::Admin]);
        assert_eq!(decision, GuardDecision::RedirectTo("/candidate".to_string()));
    }

    #[test]
    fn test_evaluate_admin_on_admin_view() {
        let decision = evaluate(&session_for(Role::Admin), true, &[Role::Admin]);
        assert!(decision.is_allowed());
    }

    #[test]
    fn test_evaluate_requires_valid_credential() {
        let decision = evaluate(&session_for(Role::Admin), false, &[Role::Admin]);
        assert_eq!(decision, GuardDecision::RedirectToLogin);

        let decision = evaluate(&Session::default(), true, &[Role::Admin]);
        assert_eq!(decision, GuardDecision::RedirectToLogin);
    }

    #[test]
    fn test_memory_navigator_skips_duplicate_entries() {
        let navigator = MemoryNavigator::new();
        navigator.navigate("/jobs");
        navigator.navigate("/jobs");
        navigator.navigate(LOGIN);

        assert_eq!(navigator.current_path(), "/login");
        assert_eq!(
            navigator.history(),
            vec!["/".to_string(), "/jobs".to_string(), "/login".to_string()]
        );
    }

    #[test]
    fn test_memory_notifier_filters_by_kind() {
        let notifier = MemoryNotifier::new();
        notifier.toast_error("Network error");
        notifier.inline_error("Invalid credentials");
        notifier.toast_success("Saved");

        assert_eq!(
            notifier.messages(NoticeKind::Toast),
            vec!["Network error".to_string(), "Saved".to_string()]
        );
        assert_eq!(
            notifier.messages(NoticeKind::Inline),
            vec!["Invalid credentials".to_string()]
        );
    }

    #[tokio::test]
    async fn test_guard_redirects_candidate_away_from_admin() {
        let h = Harness::start().await;
        h.sign_in_as("cand@example.com", Role::Candidate).await;
        let guard = RouteGuard::new(h.auth.clone());

        let decision = guard.enter(ADMIN_DASHBOARD).await.expect("enter");

        assert_eq!(decision, GuardDecision::RedirectTo("/candidate".to_string()));
        assert_eq!(h.navigator.current_path(), "/candidate");
        assert!(h.client.session().is_authenticated().await);
    }

    #[tokio::test]
    async fn test_guard_admits_admin() {
        let h = Harness::start().await;
        h.sign_in_as("admin@example.com", Role::Admin).await;
        let guard = RouteGuard::new(h.auth.clone());

        guard.require(ADMIN_LOGS).await.expect("admitted");
        assert_eq!(h.navigator.current_path(), ADMIN_LOGS);
    }

    #[tokio::test]
    async fn test_guard_sends_anonymous_user_to_login() {
        let h = Harness::start().await;
        let guard = RouteGuard::new(h.auth.clone());

        let err = guard.require(RECRUITER_DASHBOARD).await.unwrap_err();

        assert_eq!(err.message(), "Access denied, redirected to /login");
        assert_eq!(h.navigator.current_path(), LOGIN);
    }

    #[tokio::test]
    async fn test_guard_logs_out_expired_session() {
        let h = Harness::start().await;
        h.client
            .session()
            .establish(
                expired_token("admin@example.com", Role::Admin),
                SessionUser::new("admin@example.com", Role::Admin),
            )
            .await
            .expect("establish");
        let guard = RouteGuard::new(h.auth.clone());

        let decision = guard.enter(ADMIN_DASHBOARD).await.expect("enter");

        assert_eq!(decision, GuardDecision::RedirectToLogin);
        assert!(!h.client.session().is_authenticated().await);
    }

    #[tokio::test]
    async fn test_public_views_need_no_session() {
        let h = Harness::start().await;
        let guard = RouteGuard::new(h.auth.clone());

        assert!(guard.enter(JOBS).await.expect("enter").is_allowed());
        assert_eq!(h.navigator.current_path(), JOBS);
    }

    #[tokio::test]
    async fn test_login_then_open_candidate_applications() {
        let h = Harness::start_at(LOGIN).await;
        let token = valid_token("cand@example.com", Role::Candidate);

        Mock::given(method("POST"))
            .and(path("/auth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": token,
                "token_type": "bearer"
            })))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/candidates/applications"))
            .and(header("authorization", format!("Bearer {token}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&h.server)
            .await;

        h.auth
            .login("cand@example.com", "password123")
            .await
            .expect("login");
        let guard = RouteGuard::new(h.auth.clone());

        guard
            .require(CANDIDATE_APPLICATIONS)
            .await
            .expect("admitted");
        assert_eq!(h.navigator.current_path(), CANDIDATE_APPLICATIONS);

        let applications: Vec<Value> = h
            .client
            .get("/candidates/applications")
            .await
            .expect("applications");
        assert!(applications.is_empty());
    }
}
