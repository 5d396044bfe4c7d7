//! Given-When-Then harness for the `ChangeSeats` use case.

#![allow(clippy::module_name_repetitions)] // SeatChangeTest is the natural name

use crate::webinar_mocks::InMemoryWebinarRepository;
use webinar_core::{ChangeSeats, ChangeSeatsCommand, Result, Webinar};

/// Type alias for outcome assertion functions
type OutcomeAssertion = Box<dyn FnOnce(&Result<()>)>;

/// Type alias for repository assertion functions
type RepositoryAssertion = Box<dyn FnOnce(&InMemoryWebinarRepository)>;

/// Fluent API for testing seat changes against an in-memory repository.
///
/// # Example
///
/// ```ignore
/// use webinar_testing::{SeatChangeTest, fixtures};
///
/// SeatChangeTest::new()
///     .given_webinar(fixtures::sample_webinar())
///     .when(fixtures::command(fixtures::alice(), 200))
///     .then_outcome(|result| assert!(result.is_ok()))
///     .then_repository(|repo| assert_eq!(repo.write_count(), 1))
///     .run()
///     .await;
/// ```
#[derive(Default)]
pub struct SeatChangeTest {
    webinars: Vec<Webinar>,
    command: Option<ChangeSeatsCommand>,
    outcome_assertions: Vec<OutcomeAssertion>,
    repository_assertions: Vec<RepositoryAssertion>,
}

impl SeatChangeTest {
    /// Create an empty scenario.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with a webinar.
    #[must_use]
    pub fn given_webinar(mut self, webinar: Webinar) -> Self {
        self.webinars.push(webinar);
        self
    }

    /// Set the command to execute.
    #[must_use]
    pub fn when(mut self, command: ChangeSeatsCommand) -> Self {
        self.command = Some(command);
        self
    }

    /// Add an assertion on the result of `execute`.
    #[must_use]
    pub fn then_outcome<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&Result<()>) + 'static,
    {
        self.outcome_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion on the repository after `execute`.
    #[must_use]
    pub fn then_repository<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&InMemoryWebinarRepository) + 'static,
    {
        self.repository_assertions.push(Box::new(assertion));
        self
    }

    /// Run the scenario and all assertions.
    ///
    /// # Panics
    ///
    /// Panics if no command was set or if any assertion fails.
    #[allow(clippy::panic)] // Test harness reports misuse by panicking
    pub async fn run(self) {
        let Some(command) = self.command else {
            panic!("SeatChangeTest requires a command, call .when(...)");
        };

        let repository = InMemoryWebinarRepository::with_webinars(self.webinars);
        let use_case = ChangeSeats::new(repository.clone());

        let result = use_case.execute(command).await;

        for assertion in self.outcome_assertions {
            assertion(&result);
        }
        for assertion in self.repository_assertions {
            assertion(&repository);
        }
    }
}
