//! Request/response steps applied around every API call
//!
//! Each step is a plain function so the client composes them explicitly:
//! build → attach auth → send → interpret response.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Request, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::common::error::DEFAULT_ERROR_MESSAGE;
use crate::common::ApiError;

/// `Bearer <token>` header value.
pub fn bearer_value(token: &str) -> Result<HeaderValue, ApiError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Copy client-wide default headers onto a request without overriding any
/// header the request already carries.
pub fn apply_default_headers(request: &mut Request, defaults: &HeaderMap) {
    for (name, value) in defaults {
        if !request.headers().contains_key(name) {
            request.headers_mut().insert(name.clone(), value.clone());
        }
    }
}

/// Attach the session credential, if any. Without a token the request goes
/// out unauthenticated unless a default header already authorizes it.
pub fn attach_auth(request: &mut Request, token: Option<&str>) -> Result<(), ApiError> {
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        request
            .headers_mut()
            .insert(AUTHORIZATION, bearer_value(token)?);
    }
    Ok(())
}

/// What a response means for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    Success,
    /// 401; the session must be dropped.
    Unauthorized(String),
    Failure { status: StatusCode, message: String },
}

pub fn interpret_response(status: StatusCode, body: &[u8]) -> ResponseOutcome {
    if status.is_success() {
        return ResponseOutcome::Success;
    }

    let message = extract_error_message(body);
    if status == StatusCode::UNAUTHORIZED {
        ResponseOutcome::Unauthorized(message)
    } else {
        ResponseOutcome::Failure { status, message }
    }
}

/// Pull a readable reason out of an error body.
///
/// Understands `{"detail": "..."}`, validation lists of the form
/// `{"detail": [{"msg": "..."}]}`, and `{"error"|"message": "..."}`.
pub fn extract_error_message(body: &[u8]) -> String {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return DEFAULT_ERROR_MESSAGE.to_string();
    };

    let message = match value.get("detail") {
        Some(Value::String(detail)) => Some(detail.clone()),
        Some(Value::Array(items)) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
    .or_else(|| {
        ["error", "message"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str))
            .map(str::to_string)
    });

    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
}

/// Deserialize a successful payload; an empty body reads as JSON `null`.
pub fn parse_payload<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(body)?)
}
