//! Webinar entity.
//!
//! A webinar is built once from a [`WebinarProps`] bag and validated on
//! construction. After that its seat count is the only thing that moves, and
//! only upwards, through [`Webinar::update_seats`].

use crate::error::{Result, WebinarError};
use crate::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest seat count a webinar may have.
pub const MIN_SEATS: u32 = 1;

/// Largest seat count a webinar may have.
pub const MAX_SEATS: u32 = 1000;

/// Unique identifier for a webinar.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebinarId(String);

impl WebinarId {
    /// Create a `WebinarId` from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WebinarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WebinarId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WebinarId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Raw webinar properties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebinarProps {
    /// Webinar identifier
    pub id: WebinarId,
    /// Owning user
    pub organizer_id: UserId,
    /// Display title, never empty
    pub title: String,
    /// When the session starts
    pub start_date: DateTime<Utc>,
    /// When the session ends, strictly after `start_date`
    pub end_date: DateTime<Utc>,
    /// Capacity, within [`MIN_SEATS`]..=[`MAX_SEATS`]
    pub seats: u32,
}

/// A validated webinar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Webinar {
    props: WebinarProps,
}

impl Webinar {
    /// Build a webinar, enforcing its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`WebinarError::InvalidWebinar`] if:
    /// - the title is blank
    /// - `end_date` is not after `start_date`
    /// - `seats` is outside `MIN_SEATS..=MAX_SEATS`
    pub fn new(props: WebinarProps) -> Result<Self> {
        if props.title.trim().is_empty() {
            return Err(invalid("title must not be empty"));
        }

        if props.end_date <= props.start_date {
            return Err(invalid("end date must be after start date"));
        }

        if !(MIN_SEATS..=MAX_SEATS).contains(&props.seats) {
            return Err(invalid(format!(
                "seats must be between {MIN_SEATS} and {MAX_SEATS}, got {}",
                props.seats
            )));
        }

        Ok(Self { props })
    }

    /// Read-only view of the properties.
    #[must_use]
    pub const fn props(&self) -> &WebinarProps {
        &self.props
    }

    /// Consume the webinar and return its properties.
    #[must_use]
    pub fn into_props(self) -> WebinarProps {
        self.props
    }

    /// Webinar id.
    #[must_use]
    pub const fn id(&self) -> &WebinarId {
        &self.props.id
    }

    /// Id of the organizing user.
    #[must_use]
    pub const fn organizer_id(&self) -> &UserId {
        &self.props.organizer_id
    }

    /// Current seat count.
    #[must_use]
    pub const fn seats(&self) -> u32 {
        self.props.seats
    }

    /// Change the seat count.
    ///
    /// Setting the current value again is accepted and changes nothing.
    ///
    /// # Errors
    ///
    /// - [`WebinarError::TooManySeats`] if `seats > MAX_SEATS`
    /// - [`WebinarError::ReduceSeats`] if `seats` is below the current count
    ///
    /// The webinar is left untouched on error.
    pub fn update_seats(&mut self, seats: u32) -> Result<()> {
        if seats > MAX_SEATS {
            return Err(WebinarError::TooManySeats);
        }

        if seats < self.props.seats {
            return Err(WebinarError::ReduceSeats);
        }

        self.props.seats = seats;
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> WebinarError {
    WebinarError::InvalidWebinar {
        reason: reason.into(),
    }
}
