//! HTTP adapter for webinar seat management.
//!
//! Thin Axum shell around `webinar-core`: it parses requests, resolves the
//! caller, runs `ChangeSeats` and maps `WebinarError` to HTTP responses.
//!
//! # Request Flow
//!
//! 1. **Correlation ID** read or generated by middleware
//! 2. **Caller** resolved from `X-User-Id`
//! 3. **Seat count** parsed from `{"seats": "30"}` or `{"seats": 30}`
//! 4. **Use case** executed against the injected repository
//! 5. **Result** mapped to `200 {"message": "Seats updated"}` or an error body
//!
//! # Example
//!
//! ```ignore
//! use webinar_web::{AppState, build_router};
//!
//! let app = build_router(AppState::new(repository));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::AppError;
pub use extractors::{CorrelationId, CurrentUser, USER_ID_HEADER};
pub use middleware::{CORRELATION_ID_HEADER, correlation_id_layer, trace_layer};
pub use router::build_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
