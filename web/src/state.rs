//! Application state for Axum handlers.

use std::sync::Arc;
use webinar_core::{ChangeSeats, IsOrganizer, OrganizerPolicy, WebinarRepository};

/// Application state shared across all HTTP handlers.
///
/// Generic over the repository and policy so the same router runs against
/// `PostgreSQL` in production and in-memory storage in tests.
pub struct AppState<R, P = IsOrganizer> {
    /// Seat-change use case.
    pub change_seats: Arc<ChangeSeats<R, P>>,
}

// Manual impl: cloning the Arc must not require `R: Clone`.
impl<R, P> Clone for AppState<R, P> {
    fn clone(&self) -> Self {
        Self {
            change_seats: Arc::clone(&self.change_seats),
        }
    }
}

impl<R: WebinarRepository> AppState<R> {
    /// State using the default organizer policy.
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self::from_use_case(ChangeSeats::new(repository))
    }
}

impl<R, P> AppState<R, P>
where
    R: WebinarRepository,
    P: OrganizerPolicy,
{
    /// Wrap an already configured use case.
    #[must_use]
    pub fn from_use_case(change_seats: ChangeSeats<R, P>) -> Self {
        Self {
            change_seats: Arc::new(change_seats),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webinar_testing::InMemoryWebinarRepository;

    #[test]
    fn test_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState<InMemoryWebinarRepository>>();
    }

    #[test]
    fn test_clones_share_use_case() {
        let state = AppState::new(InMemoryWebinarRepository::new());
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.change_seats, &clone.change_seats));
    }
}
