// src/auth/service.rs
//! Session lifecycle operations: login, register, logout, expiry check and
//! password/profile management.

use tracing::{debug, info, warn};

use super::models::*;
use super::token::{decode_claims, is_expired, now_timestamp, user_from_claims, validate_token};
use super::validators::*;
use crate::client::ApiClient;
use crate::common::{safe_email_log, safe_token_log, ApiError, LoginContract, Validator};
use crate::session::{Session, SessionStore, SessionUser};

/// Token endpoint, relative to the API base.
pub const LOGIN_PATH: &str = "/auth/token";
pub const REGISTER_PATH: &str = "/auth/register";
pub const RESET_PASSWORD_PATH: &str = "/auth/reset-password";
pub const UPDATE_PASSWORD_PATH: &str = "/auth/update-password";
pub const PROFILE_PATH: &str = "/auth/profile";

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
    contract: LoginContract,
}

impl AuthService {
    pub fn new(client: ApiClient, contract: LoginContract) -> Self {
        Self { client, contract }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn session(&self) -> &SessionStore {
        self.client.session()
    }

    // ========================================================================
    // LOGIN / REGISTER
    // ========================================================================

    /// Exchange credentials for a session. On failure the reason is shown
    /// inline and no session exists afterwards.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let result = self.try_login(email, password).await;
        if let Err(e) = &result {
            warn!(email = %safe_email_log(email), error = %e, "Login failed");
            self.report_inline(e);
        }
        result
    }

    async fn try_login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        LoginValidator
            .validate(&Credentials { email, password })
            .into_result()?;

        let response: TokenResponse = match self.contract {
            LoginContract::OAuth2Form => {
                self.client
                    .post_form(
                        LOGIN_PATH,
                        &PasswordForm {
                            username: email,
                            password,
                        },
                    )
                    .await?
            }
            LoginContract::Json => {
                self.client
                    .post(LOGIN_PATH, &LoginRequest { email, password })
                    .await?
            }
        };

        self.establish(response.access_token, response.user).await
    }

    /// Create an account and sign in with it.
    pub async fn register(&self, request: RegisterRequest) -> Result<Session, ApiError> {
        let result = self.try_register(&request).await;
        if let Err(e) = &result {
            warn!(email = %safe_email_log(&request.email), error = %e, "Registration failed");
            self.report_inline(e);
        }
        result
    }

    async fn try_register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        RegistrationValidator.validate(request).into_result()?;

        let response: RegisterResponse = self.client.post(REGISTER_PATH, request).await?;

        match response.access_token {
            Some(token) => {
                let user = response.user.or_else(|| {
                    Some(SessionUser {
                        email: response.email.clone().unwrap_or_else(|| request.email.clone()),
                        role: response.role.unwrap_or(request.role),
                        id: response.id.clone(),
                        full_name: response.full_name.clone(),
                    })
                });
                self.establish(token, user).await
            }
            None => {
                debug!("Registration returned no token; signing in with the new credentials");
                self.try_login(&request.email, &request.password).await?;
                self.session()
                    .update_user(|user| {
                        if user.id.is_none() {
                            user.id = response.id.clone();
                        }
                        if user.full_name.is_none() {
                            user.full_name = response
                                .full_name
                                .clone()
                                .or_else(|| Some(request.full_name.clone()));
                        }
                    })
                    .await?;
                Ok(self.session().snapshot().await)
            }
        }
    }

    async fn establish(
        &self,
        token: String,
        user: Option<SessionUser>,
    ) -> Result<Session, ApiError> {
        let claims = validate_token(&token, now_timestamp())?;
        let user = match user {
            Some(user) => user,
            None => user_from_claims(&claims)?,
        };

        debug!(token = %safe_token_log(&token), "Credential accepted");
        let session = self.session().establish(token.clone(), user).await?;
        self.client.set_default_token(Some(&token))?;
        Ok(session)
    }

    // ========================================================================
    // LOGOUT / EXPIRY
    // ========================================================================

    /// Sign out. The default header and in-memory session are dropped even
    /// when the persisted record cannot be removed.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.set_default_token(None)?;
        self.session().clear().await?;
        info!("Logged out");
        Ok(())
    }

    async fn force_logout(&self) {
        if let Err(e) = self.logout().await {
            warn!(error = %e, "Session record could not be removed");
        }
    }

    /// Whether the stored credential is still usable. An expired or
    /// undecodable credential logs the user out.
    pub async fn check_auth(&self) -> Result<bool, ApiError> {
        let Some(token) = self.session().token().await else {
            return Ok(false);
        };

        match decode_claims(&token) {
            Ok(claims) if !is_expired(&claims, now_timestamp()) => {
                self.client.set_default_token(Some(&token))?;
                Ok(true)
            }
            Ok(claims) => {
                warn!(exp = claims.exp, "Session token expired; logging out");
                self.force_logout().await;
                Ok(false)
            }
            Err(e) => {
                warn!(error = %e, "Session token unreadable; logging out");
                self.force_logout().await;
                Ok(false)
            }
        }
    }

    // ========================================================================
    // PASSWORD AND PROFILE
    // ========================================================================

    pub async fn reset_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let request = PasswordResetRequest {
            email: email.to_string(),
        };
        let result = async {
            PasswordResetValidator.validate(&request).into_result()?;
            self.client.post(RESET_PASSWORD_PATH, &request).await
        }
        .await;
        self.finish(result, "Password reset email sent")
    }

    pub async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let request = PasswordUpdateRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        let result = async {
            PasswordUpdateValidator.validate(&request).into_result()?;
            self.client.put(UPDATE_PASSWORD_PATH, &request).await
        }
        .await;
        self.finish(result, "Password updated successfully")
    }

    /// Send profile changes and merge what the backend echoes back into the
    /// stored user.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Option<SessionUser>, ApiError> {
        let result = async {
            ProfileUpdateValidator.validate(&update).into_result()?;
            let echoed: Option<ProfileResponse> = self.client.put(PROFILE_PATH, &update).await?;
            let echoed = echoed.unwrap_or_default();

            self.session()
                .update_user(|user| {
                    if let Some(name) = echoed.full_name.or(update.full_name.clone()) {
                        user.full_name = Some(name);
                    }
                    if let Some(email) = echoed.email.or(update.email.clone()) {
                        user.email = email;
                    }
                    if echoed.id.is_some() {
                        user.id = echoed.id;
                    }
                })
                .await
        }
        .await;

        if let Err(e) = &result {
            self.report_inline(e);
        }
        result
    }

    fn finish(
        &self,
        result: Result<MessageResponse, ApiError>,
        fallback: &str,
    ) -> Result<MessageResponse, ApiError> {
        match result {
            Ok(mut response) => {
                if response.message.is_empty() {
                    response.message = fallback.to_string();
                }
                self.client.notifier().toast_success(&response.message);
                Ok(response)
            }
            Err(e) => {
                self.report_inline(&e);
                Err(e)
            }
        }
    }

    /// Show a form error next to the form unless the client already toasted it.
    fn report_inline(&self, error: &ApiError) {
        if !error.was_toasted() {
            self.client.notifier().inline_error(&error.message());
        }
    }
}
