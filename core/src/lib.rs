//! # Webinar Core
//!
//! Domain types and the seat-change use case for webinars.
//!
//! ## Core Concepts
//!
//! - **Webinar**: validated entity whose seat count lives in `1..=1000`
//! - **User**: identity compared against a webinar's organizer
//! - **`WebinarRepository`**: storage abstraction, injected into use cases
//! - **`OrganizerPolicy`**: who may manage a webinar
//! - **`ChangeSeats`**: lookup → authorize → validate → persist
//!
//! ## Example
//!
//! ```ignore
//! use webinar_core::{ChangeSeats, ChangeSeatsCommand, User, WebinarId};
//!
//! let use_case = ChangeSeats::new(repository);
//! use_case
//!     .execute(ChangeSeatsCommand {
//!         user: User::with_id("alice-id"),
//!         webinar_id: WebinarId::new("webinar-id"),
//!         seats: 200,
//!     })
//!     .await?;
//! ```

pub mod change_seats;
pub mod error;
pub mod policy;
pub mod repository;
pub mod user;
pub mod webinar;

// Re-export commonly used types
pub use chrono::{DateTime, Utc};

pub use change_seats::{ChangeSeats, ChangeSeatsCommand};
pub use error::{Result, WebinarError};
pub use policy::{IsOrganizer, OrganizerPolicy};
pub use repository::WebinarRepository;
pub use user::{User, UserId};
pub use webinar::{MAX_SEATS, MIN_SEATS, Webinar, WebinarId, WebinarProps};
