//! Route table.

use crate::handlers::{change_seats, health_check};
use crate::middleware::{correlation_id_layer, trace_layer};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use webinar_core::{OrganizerPolicy, WebinarRepository};

/// Build the application router.
///
/// ```text
/// GET  /health
/// POST /webinars/:id/seats
/// ```
///
/// Every response, including rejections, carries `X-Correlation-ID`.
#[must_use]
pub fn build_router<R, P>(state: AppState<R, P>) -> Router
where
    R: WebinarRepository + 'static,
    P: OrganizerPolicy + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/webinars/:id/seats", post(change_seats::<R, P>))
        .with_state(state)
        .layer(trace_layer())
        .layer(correlation_id_layer())
}
