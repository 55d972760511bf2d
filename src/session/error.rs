//! Session errors.
//!
//! Every collaborator failure is logged where it happens and collapsed into
//! one of these. Only login keeps the backend's message, because the
//! account-status reasons are carried in it.

/// Backend message for a suspended account.
pub const ACCOUNT_SUSPENDED: &str = "Account is suspended";
/// Backend message for a blocked account.
pub const ACCOUNT_BLOCKED: &str = "Account is blocked";
/// Message used when the backend accepted the call but not the login.
pub const LOGIN_FAILED: &str = "Login failed";

/// Why a login was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailureReason {
    Suspended,
    Blocked,
    Other,
}

impl LoginFailureReason {
    /// Match a failure message against the known account-status messages.
    /// Exact, case-sensitive comparison.
    #[must_use]
    pub fn classify(message: &str) -> Self {
        match message {
            ACCOUNT_SUSPENDED => Self::Suspended,
            ACCOUNT_BLOCKED => Self::Blocked,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LoginFailure {
    pub reason: LoginFailureReason,
    pub message: String,
}

impl LoginFailure {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self { reason: LoginFailureReason::classify(&message), message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Signup failed. Please try again.")]
    SignupFailed,

    #[error(transparent)]
    LoginFailed(#[from] LoginFailure),

    #[error("Logout failed. Please try again.")]
    LogoutFailed,

    #[error("Failed to fetch user name.")]
    FetchUserFailed,
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
