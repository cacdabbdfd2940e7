use super::*;

#[test]
fn endpoint_joins_without_double_slashes() {
    assert_eq!(endpoint("/api", "login"), "/api/login");
    assert_eq!(endpoint("/api/", "/login"), "/api/login");
    assert_eq!(endpoint("https://example.com/v1", "todos"), "https://example.com/v1/todos");
}

#[test]
fn todo_paths_embed_id() {
    assert_eq!(todo_path("t-1"), "todos/t-1");
    assert_eq!(todo_mark_path("t-1"), "todos/t-1/mark");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn error_message_from_body_reads_message() {
    assert_eq!(error_message_from_body(r#"{"message":"Invalid credentials"}"#).as_deref(), Some("Invalid credentials"));
}

#[test]
fn error_message_from_body_ignores_blank_or_garbage() {
    assert_eq!(error_message_from_body(r#"{"message":"   "}"#), None);
    assert_eq!(error_message_from_body(r#"{"errors":[]}"#), None);
    assert_eq!(error_message_from_body("<html>bad gateway</html>"), None);
}

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Status { status: 400, message: Some("Email already exists".to_owned()) };
    assert_eq!(err.user_message("Registration failed"), "Email already exists");
}

#[test]
fn user_message_falls_back() {
    let status = ApiError::Status { status: 500, message: None };
    assert_eq!(status.user_message("Login failed"), "Login failed");
    assert_eq!(ApiError::Network("offline".to_owned()).user_message("Login failed"), "Login failed");
    assert_eq!(ApiError::Unavailable.user_message("x"), "x");
}

#[test]
fn unauthorized_statuses_are_detected() {
    assert!(ApiError::Status { status: 401, message: None }.is_unauthorized());
    assert!(ApiError::Status { status: 403, message: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 500, message: None }.is_unauthorized());
    assert!(!ApiError::Decode("x".to_owned()).is_unauthorized());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_build_calls_are_unavailable() {
    let result = block_on_ready(verify("abc"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Drive a future that never suspends (the non-hydrate stubs).
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should complete immediately"),
    }
}
