//! Wiring for the webinar seat management server.
//!
//! The binary in `main.rs` loads [`Config`], installs tracing and the
//! Prometheus exporter, connects the `PostgreSQL` pool, runs migrations and
//! serves the `webinar-web` router until a shutdown signal arrives.

pub mod config;
pub mod metrics;

pub use config::{Config, ConfigError};
