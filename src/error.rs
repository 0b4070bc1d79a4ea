//! Error codes and the JSON error body returned by HTTP handlers.
//!
//! DESIGN
//! ======
//! Domain errors implement [`ErrorCode`] so every failure carries a stable,
//! grepable code. Route handlers turn them into [`ApiError`], which renders
//! as `{"error": "<code>", "message": "<display>"}` with the chosen status.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Grepable error code and retryable flag for structured error bodies.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// HTTP-facing error: status plus a structured body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    /// Wrap a domain error with the status the route assigns to it.
    pub fn new<E: ErrorCode>(status: StatusCode, err: &E) -> Self {
        Self { status, code: err.error_code(), message: err.to_string() }
    }

    #[must_use]
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, code, message: message.into() }
    }

    #[cfg(test)]
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.code, "message": self.message });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
