//! `PostgreSQL` storage for webinars.
//!
//! This crate provides the durable implementation of the `WebinarRepository`
//! trait from `webinar-core`. It uses sqlx runtime queries and ships its
//! schema as embedded migrations:
//!
//! - One row per webinar, keyed by id
//! - Seat bounds and date ordering mirrored as table constraints
//! - Full-row `UPDATE` (last write wins)
//!
//! # Example
//!
//! ```ignore
//! use webinar_postgres::PostgresWebinarRepository;
//! use webinar_core::ChangeSeats;
//!
//! async fn example(pool: sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let repository = PostgresWebinarRepository::new(pool);
//!     repository.migrate().await?;
//!     let use_case = ChangeSeats::new(repository);
//!     Ok(())
//! }
//! ```

pub mod webinars;

pub use webinars::PostgresWebinarRepository;
