//! Client-side session state.
//!
//! DESIGN
//! ======
//! The session is two-state: a user is present or absent. `SessionController`
//! is the only writer of both the in-memory user and the persisted token,
//! and publishes the user through a watch channel so any number of views
//! can observe it.

pub mod controller;
pub mod error;

pub use controller::SessionController;
pub use error::{LoginFailure, LoginFailureReason, SessionError};

/// The logged-in user. `email` is only known after signup or login in this
/// process; a restored session carries the id and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: Option<String>,
    pub user_id: String,
}

/// What happened when the controller tried to pick up a stored session.
///
/// The observable user is absent for both `NoSession` and `Invalidated`;
/// the distinction is only reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// No token was stored.
    NoSession,
    /// The stored token resolved to a user.
    Restored(User),
    /// A token was stored but could not be read or resolved.
    Invalidated,
}
