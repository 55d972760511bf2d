use super::*;
use crate::session::LoginFailure;
use std::cell::RefCell;

#[derive(Default)]
struct RecordingNotifier {
    seen: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &str) {
        self.seen.borrow_mut().push(notice.to_owned());
    }
}

fn login_error(message: &str) -> SessionError {
    SessionError::LoginFailed(LoginFailure::new(message))
}

// =============================================================================
// notice_for — login reasons
// =============================================================================

#[test]
fn suspended_login_gets_suspended_notice() {
    assert_eq!(notice_for(&login_error("Account is suspended")), SUSPENDED_NOTICE);
}

#[test]
fn blocked_login_gets_blocked_notice() {
    assert_eq!(notice_for(&login_error("Account is blocked")), BLOCKED_NOTICE);
}

#[test]
fn any_other_login_failure_gets_generic_notice() {
    for message in ["Invalid credentials", "Login failed", "Failed to fetch user name.", ""] {
        assert_eq!(notice_for(&login_error(message)), LOGIN_ERROR_NOTICE, "message {message:?}");
    }
}

// =============================================================================
// notice_for — other operations
// =============================================================================

#[test]
fn non_login_errors_reuse_their_display_text() {
    for err in [SessionError::SignupFailed, SessionError::LogoutFailed, SessionError::FetchUserFailed] {
        assert_eq!(notice_for(&err), err.to_string());
    }
}

// =============================================================================
// report
// =============================================================================

#[test]
fn report_sends_one_notice() {
    let notifier = RecordingNotifier::default();
    report(&notifier, &login_error("Account is blocked"));
    report(&notifier, &SessionError::LogoutFailed);
    assert_eq!(
        *notifier.seen.borrow(),
        vec![BLOCKED_NOTICE.to_owned(), "Logout failed. Please try again.".to_owned()]
    );
}
