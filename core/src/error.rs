//! Error types for webinar operations.

use thiserror::Error;

/// Result type alias for webinar operations.
pub type Result<T> = std::result::Result<T, WebinarError>;

/// Failure taxonomy for the webinar core.
///
/// The first four variants are the seat-change rejections callers branch on.
/// They carry no payload. `InvalidWebinar` guards entity construction and
/// `Storage` is the unclassified channel for repository failures, which the
/// core passes through untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebinarError {
    // ═══════════════════════════════════════════════════════════
    // Not Found
    // ═══════════════════════════════════════════════════════════

    /// No webinar exists with the requested id.
    #[error("Webinar not found")]
    NotFound,

    // ═══════════════════════════════════════════════════════════
    // Authorization
    // ═══════════════════════════════════════════════════════════

    /// The caller is not the organizer of the webinar.
    #[error("User is not allowed to update this webinar")]
    NotOrganizer,

    // ═══════════════════════════════════════════════════════════
    // Seat Validation
    // ═══════════════════════════════════════════════════════════

    /// The requested seat count exceeds the upper bound.
    #[error("Webinar must have at most 1000 seats")]
    TooManySeats,

    /// The requested seat count is lower than the current one.
    #[error("You cannot reduce the number of seats")]
    ReduceSeats,

    // ═══════════════════════════════════════════════════════════
    // Construction / Storage
    // ═══════════════════════════════════════════════════════════

    /// Webinar properties violate an entity invariant.
    #[error("Invalid webinar: {reason}")]
    InvalidWebinar {
        /// Which invariant was violated
        reason: String,
    },

    /// The underlying store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WebinarError {
    /// Returns `true` if the requested seat count was rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// # use webinar_core::WebinarError;
    /// assert!(WebinarError::ReduceSeats.is_validation_error());
    /// assert!(!WebinarError::NotFound.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::TooManySeats | Self::ReduceSeats)
    }

    /// Returns `true` if the error is a permanent rejection of the caller's input.
    ///
    /// Everything else is an unclassified failure of the surrounding system.
    ///
    /// # Examples
    ///
    /// ```
    /// # use webinar_core::WebinarError;
    /// assert!(WebinarError::NotOrganizer.is_rejection());
    /// assert!(!WebinarError::Storage("connection reset".into()).is_rejection());
    /// ```
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::NotFound | Self::NotOrganizer | Self::TooManySeats | Self::ReduceSeats
        )
    }
}
