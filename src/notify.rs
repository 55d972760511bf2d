//! User-facing notices for session failures.
//!
//! The controller only returns typed errors; deciding whether and how to
//! tell the user is up to the presentation layer, which calls [`report`]
//! with whatever [`Notifier`] fits its surface.

use crate::session::{LoginFailureReason, SessionError};

pub const SUSPENDED_NOTICE: &str = "Your account is suspended due to unusual activity.";
pub const BLOCKED_NOTICE: &str = "Your account has been terminated.";
pub const LOGIN_ERROR_NOTICE: &str = "Login error. Please try again.";

/// The text to show the user for a session failure.
#[must_use]
pub fn notice_for(error: &SessionError) -> &'static str {
    match error {
        SessionError::LoginFailed(failure) => match failure.reason {
            LoginFailureReason::Suspended => SUSPENDED_NOTICE,
            LoginFailureReason::Blocked => BLOCKED_NOTICE,
            LoginFailureReason::Other => LOGIN_ERROR_NOTICE,
        },
        SessionError::SignupFailed => "Signup failed. Please try again.",
        SessionError::LogoutFailed => "Logout failed. Please try again.",
        SessionError::FetchUserFailed => "Failed to fetch user name.",
    }
}

pub trait Notifier {
    fn notify(&self, notice: &str);
}

/// Prints notices to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notice: &str) {
        eprintln!("{notice}");
    }
}

/// Show the notice for `error` through `notifier`.
pub fn report(notifier: &impl Notifier, error: &SessionError) {
    notifier.notify(notice_for(error));
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
