//! Seat change outcomes are counted per label.
//!
//! Each test installs a thread-local debugging recorder and drives the router
//! on a current-thread runtime so every counter lands in that recorder.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use metrics_util::CompositeKey;
use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};
use std::collections::HashMap;
use tower::ServiceExt;
use webinar_testing::InMemoryWebinarRepository;
use webinar_testing::fixtures::sample_webinar;
use webinar_web::{AppState, build_router};

const COUNTER: &str = "webinar_seat_changes_total";

fn app() -> Router {
    let repository = InMemoryWebinarRepository::with_webinars([sample_webinar()]);
    build_router(AppState::new(repository))
}

async fn post_seats(app: &Router, user: &str, body: &str) -> StatusCode {
    let request = Request::builder()
        .method("POST")
        .uri("/webinars/webinar-id/seats")
        .header("content-type", "application/json")
        .header("x-user-id", user)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap().status()
}

/// Run `requests` against a fresh router with a local recorder installed.
fn recorded<F, Fut>(requests: F) -> Snapshotter
where
    F: FnOnce(Router) -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    metrics::with_local_recorder(&recorder, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to build runtime")
            .block_on(requests(app()));
    });
    snapshotter
}

/// `webinar_seat_changes_total` values keyed by `outcome` label.
fn outcome_counts(snapshotter: &Snapshotter) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    for (key, _, _, value) in snapshotter.snapshot().into_vec() {
        if let (Some(outcome), DebugValue::Counter(count)) = (outcome_label(&key), value) {
            *counts.entry(outcome).or_default() += count;
        }
    }
    counts
}

fn outcome_label(key: &CompositeKey) -> Option<String> {
    let key = key.key();
    if key.name() != COUNTER {
        return None;
    }
    key.labels()
        .find(|label| label.key() == "outcome")
        .map(|label| label.value().to_string())
}

#[test]
fn test_outcomes_are_counted_per_label() {
    let snapshotter = recorded(|app| async move {
        assert_eq!(post_seats(&app, "alice-id", r#"{"seats": "200"}"#).await, StatusCode::OK);
        assert_eq!(post_seats(&app, "alice-id", r#"{"seats": 300}"#).await, StatusCode::OK);
        assert_eq!(
            post_seats(&app, "bob-id", r#"{"seats": "400"}"#).await,
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            post_seats(&app, "alice-id", r#"{"seats": "lots"}"#).await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(post_seats(&app, "alice-id", "not json").await, StatusCode::BAD_REQUEST);
    });

    let counts = outcome_counts(&snapshotter);
    assert_eq!(counts.get("updated"), Some(&2));
    assert_eq!(counts.get("not_organizer"), Some(&1));
    assert_eq!(counts.get("invalid_request"), Some(&2));
    assert_eq!(counts.get("not_found"), None);
}

#[test]
fn test_seat_rule_outcomes_are_counted() {
    let snapshotter = recorded(|app| async move {
        post_seats(&app, "alice-id", r#"{"seats": "50"}"#).await;
        post_seats(&app, "alice-id", r#"{"seats": "1500"}"#).await;
        post_seats(&app, "alice-id", r#"{"seats": "100000000000000000000"}"#).await;
    });

    let counts = outcome_counts(&snapshotter);
    assert_eq!(counts.get("reduce_seats"), Some(&1));
    assert_eq!(counts.get("too_many_seats"), Some(&2));
    assert_eq!(counts.get("updated"), None);
}

#[test]
fn test_missing_identity_is_not_counted() {
    let snapshotter = recorded(|app| async move {
        let request = Request::builder()
            .method("POST")
            .uri("/webinars/webinar-id/seats")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"seats": "200"}"#))
            .unwrap();
        let status = app.oneshot(request).await.unwrap().status();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    });

    assert!(outcome_counts(&snapshotter).is_empty());
}
