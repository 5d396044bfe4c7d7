//! # Webinar Testing
//!
//! Testing utilities for the webinar core.
//!
//! This crate provides:
//! - In-memory implementations of `WebinarRepository`
//! - Fixtures matching the canonical alice/bob scenarios
//! - A Given-When-Then harness for `ChangeSeats`
//! - proptest strategies for seat counts
//!
//! ## Example
//!
//! ```ignore
//! use webinar_testing::{InMemoryWebinarRepository, fixtures};
//! use webinar_core::ChangeSeats;
//!
//! #[tokio::test]
//! async fn test_change_seats() {
//!     let repository = InMemoryWebinarRepository::with_webinars([fixtures::sample_webinar()]);
//!     let use_case = ChangeSeats::new(repository.clone());
//!
//!     use_case.execute(fixtures::command(fixtures::alice(), 200)).await.unwrap();
//!
//!     helpers::assert_seats(&repository, fixtures::WEBINAR_ID, 200);
//! }
//! ```

pub mod scenario;
pub mod webinar_mocks;

/// Canonical test data.
///
/// Alice organizes `webinar-id` (100 seats, 2024-01-01 00:00 to 01:00 UTC),
/// Bob is any other user.
#[allow(clippy::expect_used)] // Fixture dates are constants
pub mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};
    use webinar_core::{ChangeSeatsCommand, User, Webinar, WebinarId, WebinarProps};

    /// Id of the sample webinar.
    pub const WEBINAR_ID: &str = "webinar-id";

    /// Alice, organizer of the sample webinar.
    #[must_use]
    pub fn alice() -> User {
        User::new("alice-id", "alice@example.com", "secure-password")
    }

    /// Bob, not the organizer of anything.
    #[must_use]
    pub fn bob() -> User {
        User::new("bob-id", "bob@example.com", "secure-password")
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0)
            .single()
            .expect("fixture date is unambiguous")
    }

    /// Properties of the sample webinar.
    #[must_use]
    pub fn sample_props() -> WebinarProps {
        WebinarProps {
            id: WebinarId::new(WEBINAR_ID),
            organizer_id: alice().id().clone(),
            title: "Webinar title".to_string(),
            start_date: at(0),
            end_date: at(1),
            seats: 100,
        }
    }

    /// The sample webinar: organized by alice, 100 seats.
    #[must_use]
    pub fn sample_webinar() -> Webinar {
        Webinar::new(sample_props()).expect("fixture webinar is valid")
    }

    /// The sample webinar with another seat count.
    ///
    /// # Panics
    ///
    /// Panics if `seats` is outside `1..=1000`.
    #[must_use]
    pub fn webinar_with_seats(seats: u32) -> Webinar {
        Webinar::new(WebinarProps {
            seats,
            ..sample_props()
        })
        .expect("seat count within bounds")
    }

    /// A command from `user` targeting the sample webinar.
    #[must_use]
    pub fn command(user: User, seats: u32) -> ChangeSeatsCommand {
        ChangeSeatsCommand {
            user,
            webinar_id: WebinarId::new(WEBINAR_ID),
            seats,
        }
    }
}

/// Test helpers and utilities.
pub mod helpers {
    use crate::webinar_mocks::InMemoryWebinarRepository;
    use std::io;
    use std::sync::{Arc, Mutex, PoisonError};
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::util::SubscriberInitExt;
    use webinar_core::WebinarId;

    /// Install a test-friendly tracing subscriber.
    ///
    /// Safe to call from every test; only the first call installs.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn,webinar_core=debug".into()),
            )
            .with_test_writer()
            .try_init();
    }

    /// Run `f` under a thread-local subscriber and return its result with
    /// every event logged at `WARN` or above.
    ///
    /// Use with `tokio_test::block_on` so async work stays on this thread.
    pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result = {
            let _guard = subscriber.set_default();
            f()
        };
        (result, buffer.contents())
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Assert the stored seat count of a webinar.
    ///
    /// # Panics
    ///
    /// Panics if the webinar is missing or its seat count differs.
    #[allow(clippy::panic)]
    pub fn assert_seats(repository: &InMemoryWebinarRepository, id: &str, expected: u32) {
        let Some(webinar) = repository.find_by_id_sync(&WebinarId::new(id)) else {
            panic!("webinar {id} not found in repository");
        };
        assert_eq!(
            webinar.seats(),
            expected,
            "unexpected seat count for webinar {id}"
        );
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;
    use webinar_core::{MAX_SEATS, MIN_SEATS};

    /// Any valid seat count.
    pub fn valid_seats() -> impl Strategy<Value = u32> {
        MIN_SEATS..=MAX_SEATS
    }

    /// Any seat count above the maximum.
    pub fn excessive_seats() -> impl Strategy<Value = u32> {
        (MAX_SEATS + 1)..=u32::MAX
    }

    /// A `(current, requested)` pair where `requested >= current`, both valid.
    pub fn increase() -> impl Strategy<Value = (u32, u32)> {
        valid_seats().prop_flat_map(|current| (Just(current), current..=MAX_SEATS))
    }

    /// A `(current, requested)` pair where `requested < current`.
    pub fn decrease() -> impl Strategy<Value = (u32, u32)> {
        (MIN_SEATS + 1..=MAX_SEATS).prop_flat_map(|current| (Just(current), 0..current))
    }

    /// Any user id other than alice's.
    pub fn other_user_id() -> impl Strategy<Value = String> {
        "[a-z]{1,12}-id".prop_filter("must not be the organizer", |id| id != "alice-id")
    }
}

// Re-export commonly used items
pub use scenario::SeatChangeTest;
pub use webinar_mocks::{FailOn, FailingWebinarRepository, InMemoryWebinarRepository};
