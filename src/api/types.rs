//! AuthAPI wire types and errors.
//!
//! Field names follow the backend's JSON (`userId`, `message`, `error`).

use serde::{Deserialize, Serialize};

/// Marker the backend puts in `message` when a login is accepted.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by [`super::AuthApi`] calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The request never produced a response (connect, timeout, body read).
    #[error("API request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("API response error: status {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body did not have the expected shape.
    #[error("API response parse failed: {0}")]
    Parse(String),
}

impl ApiError {
    /// The message a caller should act on: the backend's `error` field when
    /// it sent one, otherwise this error's own text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Extract the `error` field from a JSON error body, if there is one.
pub(crate) fn error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.error)
}

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

// =============================================================================
// RESPONSES
// =============================================================================

/// `POST /auth/signup` success body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub user_id: String,
}

/// `POST /auth/login` body. A 200 response is only a successful login when
/// `message` is exactly [`LOGIN_SUCCESS_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl LoginResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.message.as_deref() == Some(LOGIN_SUCCESS_MESSAGE)
    }
}

/// `GET /auth/user/{userId}` success body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserResponse {
    pub name: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
