//! Session controller — signup, login, logout and restore against AuthAPI.
//!
//! CONCURRENCY
//! ===========
//! Operations are not coordinated with each other. If two mutating calls
//! overlap, whichever finishes last decides both the published user and
//! the stored token. Storage locks are held for a single read or write,
//! never across an AuthAPI call.

use tokio::sync::watch;

use super::error::{LOGIN_FAILED, LoginFailure, SessionError};
use super::{RestoreOutcome, User};
use crate::api::AuthApi;
use crate::api::types::LOGIN_SUCCESS_MESSAGE;
use crate::storage::SessionStorage;

pub struct SessionController<A, S> {
    api: A,
    storage: S,
    storage_key: String,
    user: watch::Sender<Option<User>>,
}

impl<A: AuthApi, S: SessionStorage> SessionController<A, S> {
    /// Build a controller with no user loaded. Call [`Self::restore`] to pick
    /// up a stored session.
    pub fn new(api: A, storage: S, storage_key: impl Into<String>) -> Self {
        let (user, _) = watch::channel(None);
        Self { api, storage, storage_key: storage_key.into(), user }
    }

    /// Build a controller and immediately restore any stored session.
    pub async fn start(api: A, storage: S, storage_key: impl Into<String>) -> (Self, RestoreOutcome) {
        let controller = Self::new(api, storage, storage_key);
        let outcome = controller.restore().await;
        (controller, outcome)
    }

    /// Snapshot of the current user.
    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    /// Receiver that is marked changed every time the current user changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.user.subscribe()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Resolve the stored token into a user. Any failure leaves the user
    /// absent and is not surfaced as an error.
    pub async fn restore(&self) -> RestoreOutcome {
        let token = match self.storage.get_item(&self.storage_key) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "session token read failed");
                self.publish(None);
                return RestoreOutcome::Invalidated;
            }
        };

        let Some(user_id) = token else {
            self.publish(None);
            return RestoreOutcome::NoSession;
        };

        match self.fetch_user_name(&user_id).await {
            Ok(name) => {
                let user = User { name, email: None, user_id };
                tracing::info!(user_id = %user.user_id, "session restored");
                self.publish(Some(user.clone()));
                RestoreOutcome::Restored(user)
            }
            Err(_) => {
                tracing::info!(%user_id, "stored session could not be resolved");
                self.publish(None);
                RestoreOutcome::Invalidated
            }
        }
    }

    /// Create an account and start a session for it. Returns the new user id.
    ///
    /// # Errors
    ///
    /// [`SessionError::SignupFailed`] on any failure; nothing is persisted
    /// or published in that case.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<String, SessionError> {
        let response = self.api.signup(name, email, password).await.map_err(|e| {
            tracing::error!(error = %e.message(), "signup failed");
            SessionError::SignupFailed
        })?;

        self.storage
            .set_item(&self.storage_key, &response.user_id)
            .map_err(|e| {
                tracing::error!(error = %e, "signup token persist failed");
                SessionError::SignupFailed
            })?;

        self.publish(Some(User {
            name: name.to_owned(),
            email: Some(email.to_owned()),
            user_id: response.user_id.clone(),
        }));
        tracing::info!(user_id = %response.user_id, "signed up");
        Ok(response.user_id)
    }

    /// Log in and load the user's display name. Returns the backend's
    /// success marker.
    ///
    /// # Errors
    ///
    /// [`SessionError::LoginFailed`] carrying the backend's error message
    /// (or `"Login failed"` when the call succeeded without the marker),
    /// classified by account status.
    pub async fn login(&self, email: &str, password: &str) -> Result<&'static str, SessionError> {
        match self.try_login(email, password).await {
            Ok(()) => Ok(LOGIN_SUCCESS_MESSAGE),
            Err(message) => {
                let failure = LoginFailure::new(message);
                tracing::error!(reason = ?failure.reason, error = %failure.message, "login failed");
                Err(failure.into())
            }
        }
    }

    async fn try_login(&self, email: &str, password: &str) -> Result<(), String> {
        let response = self
            .api
            .login(email, password)
            .await
            .map_err(|e| e.message())?;
        if !response.is_success() {
            return Err(LOGIN_FAILED.to_owned());
        }
        let user_id = response.user_id.ok_or_else(|| LOGIN_FAILED.to_owned())?;

        self.storage
            .set_item(&self.storage_key, &user_id)
            .map_err(|e| e.to_string())?;
        let name = self
            .fetch_user_name(&user_id)
            .await
            .map_err(|e| e.to_string())?;

        tracing::info!(%user_id, "logged in");
        self.publish(Some(User { name, email: Some(email.to_owned()), user_id }));
        Ok(())
    }

    /// End the server session, then drop the stored token and the user.
    ///
    /// # Errors
    ///
    /// [`SessionError::LogoutFailed`]. If the backend call failed, local
    /// state is left as it was. If only the token removal failed, the server
    /// session is already gone, so the user is cleared anyway and the stale
    /// token stays in storage.
    pub async fn logout(&self) -> Result<(), SessionError> {
        self.api.logout().await.map_err(|e| {
            tracing::error!(error = %e.message(), "logout failed");
            SessionError::LogoutFailed
        })?;

        let removed = self.storage.remove_item(&self.storage_key);
        self.publish(None);
        removed.map_err(|e| {
            tracing::error!(error = %e, "session token removal failed");
            SessionError::LogoutFailed
        })?;

        tracing::info!("logged out");
        Ok(())
    }

    /// Look up a user's display name. Never touches the current user.
    ///
    /// # Errors
    ///
    /// [`SessionError::FetchUserFailed`] on any lookup failure.
    pub async fn fetch_user_name(&self, user_id: &str) -> Result<String, SessionError> {
        self.api
            .user(user_id)
            .await
            .map(|user| user.name)
            .map_err(|e| {
                tracing::error!(error = %e.message(), %user_id, "fetch user name failed");
                SessionError::FetchUserFailed
            })
    }

    /// Replace the current user, notifying observers only on a real change.
    fn publish(&self, next: Option<User>) {
        self.user.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
