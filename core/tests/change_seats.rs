//! Feature: change seats.
//!
//! Runs `ChangeSeats` against the in-memory repository and checks both the
//! returned outcome and what ended up in storage.

#![allow(clippy::unwrap_used)] // Test code uses unwrap for clear failure messages
#![allow(clippy::expect_used)]

use proptest::prelude::*;
use webinar_core::{
    ChangeSeats, ChangeSeatsCommand, OrganizerPolicy, User, Webinar, WebinarError, WebinarId,
};
use webinar_testing::fixtures::{self, WEBINAR_ID, alice, bob, command, sample_webinar};
use webinar_testing::helpers::{assert_seats, init_tracing};
use webinar_testing::properties;
use webinar_testing::{FailOn, FailingWebinarRepository, InMemoryWebinarRepository, SeatChangeTest};

fn setup() -> (InMemoryWebinarRepository, ChangeSeats<InMemoryWebinarRepository>) {
    init_tracing();
    let repository = InMemoryWebinarRepository::with_webinars([sample_webinar()]);
    let use_case = ChangeSeats::new(repository.clone());
    (repository, use_case)
}

// ═══════════════════════════════════════════════════════════════════════
// Scenarios
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_organizer_increases_seats() {
    let (repository, use_case) = setup();

    use_case.execute(command(alice(), 200)).await.unwrap();

    assert_seats(&repository, WEBINAR_ID, 200);
    assert_eq!(repository.write_count(), 1);
}

#[tokio::test]
async fn test_webinar_does_not_exist() {
    let (repository, use_case) = setup();

    let result = use_case
        .execute(ChangeSeatsCommand {
            user: alice(),
            webinar_id: WebinarId::new("unknown-webinar"),
            seats: 200,
        })
        .await;

    assert_eq!(result, Err(WebinarError::NotFound));
    assert_seats(&repository, WEBINAR_ID, 100);
    assert_eq!(repository.write_count(), 0);
}

#[tokio::test]
async fn test_update_the_webinar_of_someone_else() {
    let (repository, use_case) = setup();

    let result = use_case.execute(command(bob(), 200)).await;

    assert_eq!(result, Err(WebinarError::NotOrganizer));
    assert_seats(&repository, WEBINAR_ID, 100);
    assert_eq!(repository.write_count(), 0);
}

#[tokio::test]
async fn test_change_seats_to_an_inferior_number() {
    let (repository, use_case) = setup();

    let result = use_case.execute(command(alice(), 50)).await;

    assert_eq!(result, Err(WebinarError::ReduceSeats));
    assert_seats(&repository, WEBINAR_ID, 100);
    assert_eq!(repository.write_count(), 0);
}

#[tokio::test]
async fn test_change_seats_to_more_than_1000() {
    let (repository, use_case) = setup();

    let result = use_case.execute(command(alice(), 1500)).await;

    assert_eq!(result, Err(WebinarError::TooManySeats));
    assert_seats(&repository, WEBINAR_ID, 100);
    assert_eq!(repository.write_count(), 0);
}

#[tokio::test]
async fn test_non_organizer_checked_before_seat_rules() {
    // Bob asking for an invalid count still gets the authorization error.
    let (repository, use_case) = setup();

    let result = use_case.execute(command(bob(), 1500)).await;

    assert_eq!(result, Err(WebinarError::NotOrganizer));
    assert_eq!(repository.write_count(), 0);
}

#[tokio::test]
async fn test_same_payload_twice_is_idempotent() {
    let (repository, use_case) = setup();

    use_case.execute(command(alice(), 100)).await.unwrap();
    let first = repository.find_by_id_sync(&WEBINAR_ID.into());
    use_case.execute(command(alice(), 100)).await.unwrap();
    let second = repository.find_by_id_sync(&WEBINAR_ID.into());

    assert_eq!(first, second);
    assert_seats(&repository, WEBINAR_ID, 100);
}

#[tokio::test]
async fn test_given_when_then_harness() {
    SeatChangeTest::new()
        .given_webinar(sample_webinar())
        .when(command(alice(), 1000))
        .then_outcome(|result| assert!(result.is_ok()))
        .then_repository(|repository| {
            assert_seats(repository, WEBINAR_ID, 1000);
            assert_eq!(repository.write_count(), 1);
        })
        .run()
        .await;
}

// ═══════════════════════════════════════════════════════════════════════
// Storage failures
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_read_failure_passes_through() {
    let repository = FailingWebinarRepository::new(
        InMemoryWebinarRepository::with_webinars([sample_webinar()]),
        FailOn::Read,
    );
    let use_case = ChangeSeats::new(repository);

    let result = use_case.execute(command(alice(), 200)).await;

    assert_eq!(
        result,
        Err(WebinarError::Storage(FailingWebinarRepository::FAILURE.to_string()))
    );
}

#[tokio::test]
async fn test_write_failure_passes_through_and_keeps_state() {
    let inner = InMemoryWebinarRepository::with_webinars([sample_webinar()]);
    let use_case = ChangeSeats::new(FailingWebinarRepository::new(inner.clone(), FailOn::Write));

    let result = use_case.execute(command(alice(), 200)).await;

    assert!(matches!(result, Err(WebinarError::Storage(_))));
    assert_seats(&inner, WEBINAR_ID, 100);
}

// ═══════════════════════════════════════════════════════════════════════
// Custom policy
// ═══════════════════════════════════════════════════════════════════════

/// Organizer or any listed co-host.
struct CoHosts(Vec<String>);

impl OrganizerPolicy for CoHosts {
    fn can_manage(&self, user: &User, webinar: &Webinar) -> bool {
        user.id() == webinar.organizer_id() || self.0.iter().any(|id| id == user.id().as_str())
    }
}

#[tokio::test]
async fn test_custom_policy_lets_co_host_change_seats() {
    let repository = InMemoryWebinarRepository::with_webinars([sample_webinar()]);
    let use_case =
        ChangeSeats::with_policy(repository.clone(), CoHosts(vec!["bob-id".to_string()]));

    use_case.execute(command(bob(), 300)).await.unwrap();

    assert_seats(&repository, WEBINAR_ID, 300);
}

#[tokio::test]
async fn test_custom_policy_still_applies_seat_rules() {
    let repository = InMemoryWebinarRepository::with_webinars([sample_webinar()]);
    let use_case =
        ChangeSeats::with_policy(repository.clone(), CoHosts(vec!["bob-id".to_string()]));

    let result = use_case.execute(command(bob(), 10)).await;

    assert_eq!(result, Err(WebinarError::ReduceSeats));
    assert_seats(&repository, WEBINAR_ID, 100);
}

// ═══════════════════════════════════════════════════════════════════════
// Properties
// ═══════════════════════════════════════════════════════════════════════

fn run_for(current: u32, user: User, seats: u32) -> (Result<(), WebinarError>, InMemoryWebinarRepository) {
    let repository =
        InMemoryWebinarRepository::with_webinars([fixtures::webinar_with_seats(current)]);
    let use_case = ChangeSeats::new(repository.clone());
    let result = tokio_test::block_on(use_case.execute(command(user, seats)));
    (result, repository)
}

proptest! {
    #[test]
    fn prop_organizer_increase_is_persisted((current, requested) in properties::increase()) {
        let (result, repository) = run_for(current, alice(), requested);

        prop_assert_eq!(result, Ok(()));
        let stored = repository.find_by_id_sync(&WEBINAR_ID.into()).unwrap();
        prop_assert_eq!(stored.seats(), requested);
        prop_assert_eq!(repository.write_count(), 1);
    }

    #[test]
    fn prop_excessive_seats_rejected(
        current in properties::valid_seats(),
        requested in properties::excessive_seats(),
    ) {
        let (result, repository) = run_for(current, alice(), requested);

        prop_assert_eq!(result, Err(WebinarError::TooManySeats));
        let stored = repository.find_by_id_sync(&WEBINAR_ID.into()).unwrap();
        prop_assert_eq!(stored.seats(), current);
        prop_assert_eq!(repository.write_count(), 0);
    }

    #[test]
    fn prop_reduction_rejected((current, requested) in properties::decrease()) {
        let (result, repository) = run_for(current, alice(), requested);

        prop_assert_eq!(result, Err(WebinarError::ReduceSeats));
        let stored = repository.find_by_id_sync(&WEBINAR_ID.into()).unwrap();
        prop_assert_eq!(stored.seats(), current);
        prop_assert_eq!(repository.write_count(), 0);
    }

    #[test]
    fn prop_non_organizer_rejected_for_any_count(
        user_id in properties::other_user_id(),
        requested in any::<u32>(),
    ) {
        let intruder = User::with_id(user_id.as_str());
        let (result, repository) = run_for(100, intruder, requested);

        prop_assert_eq!(result, Err(WebinarError::NotOrganizer));
        let stored = repository.find_by_id_sync(&WEBINAR_ID.into()).unwrap();
        prop_assert_eq!(stored.seats(), 100);
        prop_assert_eq!(repository.write_count(), 0);
    }

    #[test]
    fn prop_unknown_webinar_not_found(webinar_id in "[a-z]{1,16}", requested in any::<u32>()) {
        let repository = InMemoryWebinarRepository::with_webinars([sample_webinar()]);
        let use_case = ChangeSeats::new(repository.clone());

        let result = tokio_test::block_on(use_case.execute(ChangeSeatsCommand {
            user: alice(),
            webinar_id: WebinarId::new(webinar_id),
            seats: requested,
        }));

        prop_assert_eq!(result, Err(WebinarError::NotFound));
        prop_assert_eq!(repository.write_count(), 0);
    }
}
