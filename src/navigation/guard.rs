//! Role-based route guard
//!
//! A protected view opens only for an authenticated session whose
//! credential is still valid and whose role is allowed there. Otherwise the
//! user is sent to the login view, or to their own dashboard when signed in
//! with the wrong role.

use tracing::{debug, info};

use super::routes::{home_for, required_roles, LOGIN};
use crate::auth::AuthService;
use crate::common::ApiError;
use crate::session::{Role, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectTo(String),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    /// Where the user ends up.
    pub fn destination<'a>(&'a self, requested: &'a str) -> &'a str {
        match self {
            GuardDecision::Allow => requested,
            GuardDecision::RedirectToLogin => LOGIN,
            GuardDecision::RedirectTo(path) => path,
        }
    }
}

/// Decide access from session state alone. `credential_valid` is the result
/// of the expiry check.
pub fn evaluate(session: &Session, credential_valid: bool, allowed: &[Role]) -> GuardDecision {
    if !session.is_authenticated || !credential_valid {
        return GuardDecision::RedirectToLogin;
    }

    match session.role() {
        Some(role) if allowed.is_empty() || allowed.contains(&role) => GuardDecision::Allow,
        role => GuardDecision::RedirectTo(home_for(role)),
    }
}

#[derive(Clone)]
pub struct RouteGuard {
    auth: AuthService,
}

impl RouteGuard {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }

    /// Open `path` if permitted, navigating to wherever the user may go.
    pub async fn enter(&self, path: &str) -> Result<GuardDecision, ApiError> {
        let decision = match required_roles(path) {
            None => GuardDecision::Allow,
            Some(allowed) => self.authorize(allowed).await?,
        };

        let destination = decision.destination(path).to_string();
        if !decision.is_allowed() {
            info!(requested = %path, redirect = %destination, "Access to view denied");
        } else {
            debug!(path = %path, "Access to view granted");
        }
        self.auth.client().navigator().navigate(&destination);

        Ok(decision)
    }

    /// Like [`enter`](Self::enter) but fails with `AccessDenied` on redirect.
    pub async fn require(&self, path: &str) -> Result<(), ApiError> {
        match self.enter(path).await? {
            GuardDecision::Allow => Ok(()),
            other => Err(ApiError::AccessDenied(other.destination(path).to_string())),
        }
    }

    /// Check the session against an explicit role set.
    pub async fn authorize(&self, allowed: &[Role]) -> Result<GuardDecision, ApiError> {
        let credential_valid = self.auth.check_auth().await?;
        let session = self.auth.session().snapshot().await;
        Ok(evaluate(&session, credential_valid, allowed))
    }
}
