//! The `ChangeSeats` use case.
//!
//! ```text
//! find_by_id ──► policy.can_manage ──► update_seats ──► update
//!     │                 │                   │
//!  NotFound        NotOrganizer     TooManySeats / ReduceSeats
//! ```
//!
//! Every rejection happens before the single write, so a failed call leaves
//! storage exactly as it was.

use crate::error::{Result, WebinarError};
use crate::policy::{IsOrganizer, OrganizerPolicy};
use crate::repository::WebinarRepository;
use crate::user::User;
use crate::webinar::WebinarId;

/// Input to [`ChangeSeats::execute`].
#[derive(Clone, Debug)]
pub struct ChangeSeatsCommand {
    /// User asking for the change
    pub user: User,
    /// Webinar to change
    pub webinar_id: WebinarId,
    /// Requested seat count
    pub seats: u32,
}

/// Changes the seat count of a webinar on behalf of its organizer.
///
/// # Example
///
/// ```ignore
/// let use_case = ChangeSeats::new(repository);
///
/// use_case
///     .execute(ChangeSeatsCommand {
///         user: alice,
///         webinar_id: WebinarId::new("webinar-id"),
///         seats: 200,
///     })
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct ChangeSeats<R, P = IsOrganizer> {
    repository: R,
    policy: P,
}

impl<R: WebinarRepository> ChangeSeats<R> {
    /// Create the use case with the organizer-only policy.
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self {
            repository,
            policy: IsOrganizer,
        }
    }
}

impl<R, P> ChangeSeats<R, P>
where
    R: WebinarRepository,
    P: OrganizerPolicy,
{
    /// Create the use case with a custom authorization policy.
    #[must_use]
    pub const fn with_policy(repository: R, policy: P) -> Self {
        Self { repository, policy }
    }

    /// The repository this use case reads from and writes to.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Change the seat count.
    ///
    /// # Errors
    ///
    /// - [`WebinarError::NotFound`] if no webinar has `webinar_id`
    /// - [`WebinarError::NotOrganizer`] if the policy denies `user`
    /// - [`WebinarError::TooManySeats`] / [`WebinarError::ReduceSeats`] if the
    ///   webinar rejects the new count
    /// - any repository error, unchanged
    #[tracing::instrument(
        skip(self, command),
        fields(
            webinar_id = %command.webinar_id,
            user_id = %command.user.id(),
            seats = command.seats,
        )
    )]
    pub async fn execute(&self, command: ChangeSeatsCommand) -> Result<()> {
        let ChangeSeatsCommand {
            user,
            webinar_id,
            seats,
        } = command;

        let Some(mut webinar) = self.repository.find_by_id(&webinar_id).await? else {
            tracing::warn!(error = %WebinarError::NotFound, "Seat change rejected");
            return Err(WebinarError::NotFound);
        };

        if !self.policy.can_manage(&user, &webinar) {
            tracing::warn!(
                error = %WebinarError::NotOrganizer,
                organizer_id = %webinar.organizer_id(),
                "Seat change rejected"
            );
            return Err(WebinarError::NotOrganizer);
        }

        let previous = webinar.seats();
        webinar.update_seats(seats).inspect_err(|err| {
            tracing::warn!(error = %err, previous, "Seat change rejected");
        })?;

        self.repository.update(&webinar).await?;

        tracing::info!(previous, current = webinar.seats(), "Webinar seats updated");
        Ok(())
    }
}
