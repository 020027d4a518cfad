//! Error types for the client crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `ApiError`: A failed API call, normalized once at the HTTP boundary
//! - `FormError`: A form that failed its presence checks
//!
//! The backend reports failures inconsistently: sometimes a bare string,
//! sometimes `{"message": ...}`, sometimes nothing. [`ApiError::from_response`]
//! folds all of these into one `kind` + `message` pair.

use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;

/// Classification of an API failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The stored token was expired; the call never left the client.
    TokenExpired,
    /// The backend answered 401. The session has been torn down.
    Unauthorized,
    /// The backend answered 403.
    Forbidden,
    /// The backend answered 404.
    NotFound,
    /// Any other 4xx: validation or workflow rejection.
    Rejected,
    /// A 5xx answer.
    Server,
    /// The request could not be sent or the response not read.
    Network,
    /// A success response whose body did not match the expected shape.
    Decode,
}

impl ApiErrorKind {
    fn default_message(&self) -> &'static str {
        match self {
            Self::TokenExpired => "Your session has expired. Please log in again.",
            Self::Unauthorized => "You are not logged in.",
            Self::Forbidden => "You do not have permission to do that.",
            Self::NotFound => "The requested record was not found.",
            Self::Rejected => "The request was rejected.",
            Self::Server => "The server encountered an error. Please try again.",
            Self::Network => "Server not responding.",
            Self::Decode => "The server sent an unexpected response.",
        }
    }
}

/// A failed API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ApiErrorKind,
    status: Option<u16>,
    message: String,
}

impl ApiError {
    /// Creates an error with an explicit message.
    #[must_use]
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            message: message.into(),
        }
    }

    /// The call was rejected locally because the stored token expired.
    #[must_use]
    pub fn token_expired() -> Self {
        Self::new(
            ApiErrorKind::TokenExpired,
            ApiErrorKind::TokenExpired.default_message(),
        )
    }

    /// The request could not be sent or its response not read.
    #[must_use]
    pub fn network(reason: impl fmt::Display) -> Self {
        tracing::debug!(%reason, "network failure");
        Self::new(ApiErrorKind::Network, ApiErrorKind::Network.default_message())
    }

    /// A success body did not deserialize.
    #[must_use]
    pub fn decode(reason: impl fmt::Display) -> Self {
        tracing::debug!(%reason, "undecodable response body");
        Self::new(ApiErrorKind::Decode, ApiErrorKind::Decode.default_message())
    }

    /// Normalizes a non-success response.
    #[must_use]
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let kind = match status {
            StatusCode::UNAUTHORIZED => ApiErrorKind::Unauthorized,
            StatusCode::FORBIDDEN => ApiErrorKind::Forbidden,
            StatusCode::NOT_FOUND => ApiErrorKind::NotFound,
            s if s.is_server_error() => ApiErrorKind::Server,
            _ => ApiErrorKind::Rejected,
        };
        let message =
            extract_message(body).unwrap_or_else(|| kind.default_message().to_string());

        Self {
            kind,
            status: Some(status.as_u16()),
            message,
        }
    }

    /// Returns the failure class.
    #[must_use]
    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// Returns the HTTP status, when the backend answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Pulls a human-readable message out of an error body.
fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(message)) => non_empty(message),
        Ok(Value::Object(fields)) => fields
            .get("message")
            .and_then(Value::as_str)
            .and_then(|message| non_empty(message.to_string())),
        Ok(_) => None,
        // Error pages are not messages.
        Err(_) if body.starts_with('<') => None,
        Err(_) => Some(body.to_string()),
    }
}

fn non_empty(message: String) -> Option<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A form that failed its presence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    message: &'static str,
}

impl FormError {
    pub(crate) const fn new(message: &'static str) -> Self {
        Self { message }
    }

    /// Returns the inline message to show next to the form.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for FormError {}
