//! reqwest-backed AuthAPI client.
//!
//! The client keeps a cookie store so the backend's session cookie is sent
//! back on every later request, the same as a browser with credentials
//! included.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::AuthApi;
use super::types::{ApiError, LoginRequest, LoginResponse, SignupRequest, SignupResponse, UserResponse, error_message};
use crate::config::{SessionConfig, SessionTimeouts};

pub struct HttpAuthApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    /// Build a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeouts: SessionTimeouts) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    /// Build a client from parsed session config.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the HTTP client cannot be built.
    pub fn from_config(config: &SessionConfig) -> Result<Self, ApiError> {
        Self::new(&config.api_base_url, config.timeouts)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> Result<T, ApiError> {
        let text = self.send(self.http.post(self.url(path)).json(body)).await?;
        parse_body(&text)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), message: error_message(&text) });
        }
        Ok(text)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `{base}/auth/user/{user_id}` with the id as one encoded path segment.
    fn user_url(&self, user_id: &str) -> Result<reqwest::Url, ApiError> {
        let mut url = reqwest::Url::parse(&self.url("/auth/user")).map_err(|e| ApiError::Request(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Request(format!("base URL cannot carry a path: {}", self.base_url)))?
            .push(user_id);
        Ok(url)
    }
}

fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}

#[async_trait::async_trait]
impl AuthApi for HttpAuthApi {
    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<SignupResponse, ApiError> {
        self.post_json("/auth/signup", &SignupRequest { name, email, password })
            .await
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post_json("/auth/login", &LoginRequest { email, password })
            .await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.send(self.http.post(self.url("/auth/logout")))
            .await
            .map(|_| ())
    }

    async fn user(&self, user_id: &str) -> Result<UserResponse, ApiError> {
        let text = self.send(self.http.get(self.user_url(user_id)?)).await?;
        parse_body(&text)
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
