//! Middleware for request tracking and observability.
//!
//! - **Correlation IDs**: read from `X-Correlation-ID` or generated, stored in
//!   request extensions, echoed on every response
//! - **Request logging**: `tower-http` trace layer for status and latency
//!
//! # Example
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/health", get(health_check))
//!     .layer(trace_layer())
//!     .layer(correlation_id_layer());
//! ```

use crate::extractors::CorrelationId;
use axum::{extract::Request, http::HeaderValue, response::Response};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Instrument, Level};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Header name for correlation ID.
pub const CORRELATION_ID_HEADER: &str = "X-Correlation-ID";

/// Correlation tracking for every request.
///
/// Resolves a [`CorrelationId`] from the request header, stores it in the
/// request extensions for [`CorrelationId`] extraction, runs the inner
/// service inside an `http_request` span and echoes the ID on the response.
#[must_use]
pub const fn correlation_id_layer() -> CorrelationIdLayer {
    CorrelationIdLayer
}

/// Layer for [`CorrelationIdService`].
#[derive(Clone, Copy, Debug)]
pub struct CorrelationIdLayer;

impl<S> Layer<S> for CorrelationIdLayer {
    type Service = CorrelationIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorrelationIdService { inner }
    }
}

/// Service installed by [`CorrelationIdLayer`].
#[derive(Clone, Debug)]
pub struct CorrelationIdService<S> {
    inner: S,
}

impl<S> Service<Request> for CorrelationIdService<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Response, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let correlation_id = CorrelationId::from_headers(req.headers());
        req.extensions_mut().insert(correlation_id);

        let span = tracing::info_span!(
            "http_request",
            correlation_id = %correlation_id.0,
            method = %req.method(),
            path = %req.uri().path(),
        );
        let response = self.inner.call(req).instrument(span);

        Box::pin(async move {
            let mut response = response.await?;
            echo_correlation_id(&mut response, correlation_id);
            Ok(response)
        })
    }
}

fn echo_correlation_id(response: &mut Response, correlation_id: CorrelationId) {
    if let Ok(value) = HeaderValue::try_from(correlation_id.0.to_string()) {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }
}

/// HTTP trace layer logging each request and its response status.
pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// Request/response logging at `INFO`.
#[must_use]
pub fn trace_layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}
