// Error handling types for the API client

use reqwest::StatusCode;

use super::validation::ValidationResult;

/// Fallback shown when the backend gives no readable reason.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Client error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Access denied, redirected to {0}")]
    AccessDenied(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// Map a non-success HTTP status and its extracted message to a variant.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
            StatusCode::FORBIDDEN => ApiError::Forbidden(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::BadRequest(message)
            }
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            other => ApiError::Status {
                status: other.as_u16(),
                message,
            },
        }
    }

    /// Human-readable message suitable for a toast or an inline form error.
    pub fn message(&self) -> String {
        match self {
            ApiError::ValidationError(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::InvalidToken(msg)
            | ApiError::InvalidInput(msg) => msg.clone(),
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::BadRequest(_) => Some(400),
            ApiError::NotFound(_) => Some(404),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the client already surfaced this error as a transient toast.
    ///
    /// Every failed response except 401 is toasted by the response handler,
    /// as are transport failures. Callers showing inline errors use this to
    /// avoid reporting the same failure twice.
    pub fn was_toasted(&self) -> bool {
        matches!(
            self,
            ApiError::Forbidden(_)
                | ApiError::BadRequest(_)
                | ApiError::NotFound(_)
                | ApiError::Status { .. }
                | ApiError::Network(_)
        )
    }
}

/// Helper function to convert ValidationResult to ApiError
impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid {
            ApiError::InvalidInput(
                "Validation result was valid but converted to error".to_string(),
            )
        } else {
            let error_messages: Vec<String> = result
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect();
            ApiError::ValidationError(error_messages.join(", "))
        }
    }
}
