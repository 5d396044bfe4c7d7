//! Prometheus metrics for the webinar server.
//!
//! # Exported Metrics
//!
//! - `webinar_seat_changes_total{outcome}` - Seat change requests by outcome
//! - `webinar_repository_queries_total{operation}` - Repository queries by operation

use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use thiserror::Error;

/// Errors from metrics setup.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Exporter could not be installed.
    #[error("Failed to install Prometheus exporter: {0}")]
    Install(String),
}

/// Install the Prometheus recorder and its HTTP listener on `addr`.
///
/// Must run inside a Tokio runtime.
///
/// # Errors
///
/// Returns [`MetricsError::Install`] if a recorder is already installed or
/// the listener cannot be set up.
pub fn install_exporter(addr: SocketAddr) -> Result<(), MetricsError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| MetricsError::Install(e.to_string()))?;

    register_metrics();
    tracing::info!(%addr, "Prometheus exporter listening");
    Ok(())
}

/// Register descriptions for every metric the service emits.
pub fn register_metrics() {
    describe_counter!(
        "webinar_seat_changes_total",
        "Seat change requests by outcome (updated, not_found, not_organizer, too_many_seats, reduce_seats, invalid_request, error)"
    );
    describe_counter!(
        "webinar_repository_queries_total",
        "PostgreSQL repository queries by operation (find_by_id, update, insert)"
    );
}
