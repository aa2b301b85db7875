//! Centralized error-to-response conversion.
//!
//! # Responsibilities
//! - Define the request-scoped error type ([`ApiError`])
//! - Map any error raised in a handler to the uniform JSON contract
//! - Gate diagnostic backtrace exposure behind an explicit opt-in
//!
//! # Design Decisions
//! - Handlers return `Result<_, ApiError>`; the `IntoResponse` impl is the
//!   single dispatcher, so every failure path converges on one format
//! - Status defaults to 500 and message to "Server Error" when the failure
//!   site supplies neither
//! - Backtraces are only serialized when trace exposure was installed at
//!   startup (`DEBUG_ERRORS`); unclassified detail goes to the log instead

use std::backtrace::Backtrace;
use std::sync::OnceLock;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Handler result shorthand.
pub type ApiResult<T> = Result<T, ApiError>;

/// Message used when the failure site supplies none.
const DEFAULT_MESSAGE: &str = "Server Error";

static EXPOSE_TRACES: OnceLock<bool> = OnceLock::new();

/// Install whether error responses carry a diagnostic backtrace.
///
/// Called once at startup from the `DEBUG_ERRORS` setting. Traces stay off
/// until installed.
pub fn expose_traces(enabled: bool) {
    let _ = EXPOSE_TRACES.set(enabled);
}

fn traces_exposed() -> bool {
    EXPOSE_TRACES.get().copied().unwrap_or(false)
}

/// Request-scoped application error.
///
/// Carries the HTTP status and message surfaced to the caller. Created at
/// the point of failure and consumed exactly once by the dispatcher.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
    trace: Option<String>,
}

impl ApiError {
    /// Error with an explicit status and message, surfaced verbatim.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            trace: capture_trace(),
        }
    }

    /// Error with an explicit message and the default 500 status.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Error with an explicit status and the default message.
    pub fn from_status(status: StatusCode) -> Self {
        Self::new(status, DEFAULT_MESSAGE)
    }

    /// Unclassified failure: detail is logged, the caller sees a generic 500.
    pub fn unclassified(source: impl std::fmt::Display) -> Self {
        tracing::error!(error = %source, "unclassified error");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, DEFAULT_MESSAGE)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn capture_trace() -> Option<String> {
    traces_exposed().then(|| Backtrace::force_capture().to_string())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "success": false,
            "error": self.message,
        });
        if let Some(trace) = self.trace {
            body["stack"] = json!(trace);
        }
        (self.status, Json(body)).into_response()
    }
}
