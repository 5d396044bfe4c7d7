//! Custom Axum extractors.
//!
//! - `CorrelationId`: the request's correlation ID
//! - `CurrentUser`: the caller, identified by the `X-User-Id` header
//!
//! # Examples
//!
//! ```ignore
//! async fn handler(
//!     correlation_id: CorrelationId,
//!     CurrentUser(user): CurrentUser,
//! ) -> Result<Json<Response>, AppError> {
//!     tracing::info!(correlation_id = %correlation_id.0, user_id = %user.id(), "Processing request");
//!     Ok(Json(response))
//! }
//! ```

use crate::error::AppError;
use crate::middleware::CORRELATION_ID_HEADER;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use uuid::Uuid;
use webinar_core::User;

/// Header carrying the authenticated caller's id.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Correlation ID for request tracing.
///
/// Prefers the ID stored by the correlation middleware, then the
/// `X-Correlation-ID` header, and finally generates a new UUID v4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for CorrelationId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Self>()
            .copied()
            .unwrap_or_else(|| Self::from_headers(&parts.headers)))
    }
}

impl CorrelationId {
    /// Read `X-Correlation-ID`, generating a fresh ID when it is missing or
    /// not a UUID.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let id = headers
            .get(CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s.trim()).ok())
            .unwrap_or_else(Uuid::new_v4);
        Self(id)
    }
}

/// The calling user.
///
/// Authentication happens upstream; this only reads the resolved id. A
/// missing or blank header is rejected with 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::unauthorized("Missing user identity"))?;

        Ok(Self(User::with_id(user_id)))
    }
}
