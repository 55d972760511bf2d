//! # storefront-session
//!
//! Client-side session state for the storefront: who is logged in, the
//! signup/login/logout calls against the auth backend, and the session
//! token kept in scoped storage between runs.
//!
//! The pieces are wired explicitly at the application root:
//!
//! - [`api::HttpAuthApi`] talks to the backend.
//! - [`storage::SessionStorage`] holds the token for one scope.
//! - [`session::SessionController`] owns the current user and publishes it.
//! - [`notify`] turns failures into user-facing notices.

pub mod api;
pub mod config;
pub mod notify;
pub mod session;
pub mod storage;

pub use api::{AuthApi, HttpAuthApi};
pub use config::SessionConfig;
pub use session::{RestoreOutcome, SessionController, SessionError, User};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
