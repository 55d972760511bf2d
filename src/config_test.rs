use super::*;
use std::sync::Mutex;

// Every test here touches the same process-wide variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers must hold `ENV_LOCK`.
unsafe fn clear_session_env() {
    unsafe {
        std::env::remove_var("SESSION_API_BASE_URL");
        std::env::remove_var("SESSION_STORAGE_KEY");
        std::env::remove_var("SESSION_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("SESSION_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_session_env() };

    let cfg = SessionConfig::from_env().unwrap();
    assert_eq!(cfg, SessionConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.storage_key, "userId");
    assert_eq!(
        cfg.timeouts,
        SessionTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_session_env();
        std::env::set_var("SESSION_API_BASE_URL", "http://localhost:8080/");
        std::env::set_var("SESSION_STORAGE_KEY", "shopUser");
        std::env::set_var("SESSION_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("SESSION_CONNECT_TIMEOUT_SECS", " 7 ");
    }

    let cfg = SessionConfig::from_env().unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:8080");
    assert_eq!(cfg.storage_key, "shopUser");
    assert_eq!(cfg.timeouts, SessionTimeouts { request_secs: 42, connect_secs: 7 });

    unsafe { clear_session_env() };
}

#[test]
fn from_env_bad_timeouts_fall_back_to_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_session_env();
        std::env::set_var("SESSION_REQUEST_TIMEOUT_SECS", "soon");
        std::env::set_var("SESSION_CONNECT_TIMEOUT_SECS", "-1");
    }

    let cfg = SessionConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts, SessionTimeouts::default());

    unsafe { clear_session_env() };
}

#[test]
fn from_env_empty_base_url_errors() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_session_env();
        std::env::set_var("SESSION_API_BASE_URL", "/");
    }

    let err = SessionConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("SESSION_API_BASE_URL"));

    unsafe { clear_session_env() };
}

#[test]
fn from_env_blank_storage_key_errors() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_session_env();
        std::env::set_var("SESSION_STORAGE_KEY", "  ");
    }

    let err = SessionConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("SESSION_STORAGE_KEY"));

    unsafe { clear_session_env() };
}
