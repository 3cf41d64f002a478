//! Authentication data models

use serde::{Deserialize, Serialize};

use crate::session::{Role, SessionUser};

/// JWT claims structure issued by the backend
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Claims {
    /// User email.
    pub sub: String,
    #[serde(default)]
    pub role: Option<Role>,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// OAuth2 password-grant form body
#[derive(Serialize, Debug)]
pub struct PasswordForm<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// JSON login body
#[derive(Serialize, Debug)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Token endpoint response
#[derive(Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Serialize, Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

/// Registration may answer with a token (and user) or with the created
/// profile only.
#[derive(Deserialize, Debug, Clone)]
pub struct RegisterResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Serialize, Debug, Clone)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct PasswordUpdateRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Fields the profile endpoint may echo back
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProfileResponse {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// Plain `{"message": ...}` acknowledgement
#[derive(Deserialize, Debug, Clone)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
