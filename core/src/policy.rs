//! Authorization policies for managing a webinar.

use crate::user::User;
use crate::webinar::Webinar;

/// Decides whether a user may manage a webinar.
///
/// [`ChangeSeats`](crate::ChangeSeats) only asks this question; swapping the
/// policy (roles, delegation) leaves its control flow untouched.
pub trait OrganizerPolicy: Send + Sync {
    /// Returns `true` if `user` may change `webinar`.
    fn can_manage(&self, user: &User, webinar: &Webinar) -> bool;
}

/// Only the organizer may manage their webinar.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsOrganizer;

impl OrganizerPolicy for IsOrganizer {
    fn can_manage(&self, user: &User, webinar: &Webinar) -> bool {
        user.id() == webinar.organizer_id()
    }
}
