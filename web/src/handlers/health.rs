//! Health check endpoint.

use axum::http::StatusCode;

/// Liveness check.
///
/// Does not check the database.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
