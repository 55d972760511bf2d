//! AuthAPI — the backend collaborator that verifies credentials and owns
//! the server side of the session.
//!
//! DESIGN
//! ======
//! `AuthApi` is the seam between session logic and transport. The
//! controller only sees typed responses and [`ApiError`]; `HttpAuthApi`
//! is the production implementation and tests script their own.

pub mod http;
pub mod types;

pub use http::HttpAuthApi;
pub use types::{ApiError, LoginResponse, SignupResponse, UserResponse};

/// The four backend operations the session layer depends on.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/signup`.
    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<SignupResponse, ApiError>;

    /// `POST /auth/login`. A transport-level success may still carry a
    /// failed login; see [`LoginResponse::is_success`].
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// `POST /auth/logout`.
    async fn logout(&self) -> Result<(), ApiError>;

    /// `GET /auth/user/{user_id}`.
    async fn user(&self, user_id: &str) -> Result<UserResponse, ApiError>;
}
