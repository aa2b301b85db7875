//! Fixed-response handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Fixed success/failure envelope for the health and 404 responses.
#[derive(Serialize)]
pub struct StatusMessage {
    pub success: bool,
    pub message: &'static str,
}

/// `GET /health`: unconditional liveness response.
pub async fn health() -> Json<StatusMessage> {
    Json(StatusMessage {
        success: true,
        message: "Server is running! 🚀",
    })
}

/// Catch-all for any path or method no route matched.
pub async fn not_found() -> (StatusCode, Json<StatusMessage>) {
    (
        StatusCode::NOT_FOUND,
        Json(StatusMessage {
            success: false,
            message: "Route not found",
        }),
    )
}
