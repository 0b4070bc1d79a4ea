use super::*;

#[derive(Debug, thiserror::Error)]
#[error("widget exploded")]
struct Exploded;

impl ErrorCode for Exploded {
    fn error_code(&self) -> &'static str {
        "E_EXPLODED"
    }
}

#[test]
fn retryable_defaults_to_false() {
    assert!(!Exploded.retryable());
}

#[test]
fn new_copies_code_and_status() {
    let err = ApiError::new(StatusCode::CONFLICT, &Exploded);
    assert_eq!(err.status(), StatusCode::CONFLICT);
    assert_eq!(err.code(), "E_EXPLODED");
}

#[test]
fn bad_request_uses_400() {
    let err = ApiError::bad_request("E_BAD", "nope");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.code(), "E_BAD");
}

#[test]
fn into_response_keeps_status() {
    let response = ApiError::new(StatusCode::NOT_FOUND, &Exploded).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
