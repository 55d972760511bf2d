use super::*;

// =============================================================================
// ApiError::message
// =============================================================================

#[test]
fn message_prefers_backend_error_field() {
    let err = ApiError::Status { status: 403, message: Some("Account is blocked".into()) };
    assert_eq!(err.message(), "Account is blocked");
}

#[test]
fn message_falls_back_to_display_text() {
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(err.message(), "API response error: status 500");

    let err = ApiError::Request("connection refused".into());
    assert_eq!(err.message(), "API request failed: connection refused");
}

// =============================================================================
// error_message
// =============================================================================

#[test]
fn error_message_reads_error_field() {
    assert_eq!(error_message(r#"{"error":"Invalid credentials"}"#).as_deref(), Some("Invalid credentials"));
}

#[test]
fn error_message_none_for_non_json_or_missing_field() {
    assert_eq!(error_message("Bad Gateway"), None);
    assert_eq!(error_message(r#"{"message":"nope"}"#), None);
    assert_eq!(error_message(""), None);
}

// =============================================================================
// LoginResponse
// =============================================================================

#[test]
fn login_response_requires_exact_marker() {
    let ok: LoginResponse = serde_json::from_str(r#"{"message":"Login successful","userId":"u-1"}"#).unwrap();
    assert!(ok.is_success());
    assert_eq!(ok.user_id.as_deref(), Some("u-1"));

    let lower: LoginResponse = serde_json::from_str(r#"{"message":"login successful","userId":"u-1"}"#).unwrap();
    assert!(!lower.is_success());

    let empty: LoginResponse = serde_json::from_str("{}").unwrap();
    assert!(!empty.is_success());
    assert!(empty.user_id.is_none());
}

#[test]
fn signup_request_serializes_backend_field_names() {
    let body = serde_json::to_value(SignupRequest { name: "Ada", email: "ada@example.com", password: "pw" }).unwrap();
    assert_eq!(body, serde_json::json!({ "name": "Ada", "email": "ada@example.com", "password": "pw" }));
}

#[test]
fn signup_response_reads_camel_case_user_id() {
    let resp: SignupResponse = serde_json::from_str(r#"{"userId":"abc"}"#).unwrap();
    assert_eq!(resp.user_id, "abc");
}
