//! Webinar repository trait.

use crate::error::Result;
use crate::webinar::{Webinar, WebinarId};
use std::future::Future;

/// Webinar repository.
///
/// This trait abstracts over webinar storage. The in-memory implementation
/// lives in `webinar-testing`, the durable one in `webinar-postgres`.
///
/// Both operations may suspend on I/O. Callers issue one at a time.
pub trait WebinarRepository: Send + Sync {
    /// Get a webinar by id.
    ///
    /// # Returns
    ///
    /// An owned snapshot, or `None` if no webinar has this id.
    ///
    /// # Errors
    ///
    /// Returns [`WebinarError::Storage`](crate::WebinarError::Storage) if the
    /// store cannot be read.
    fn find_by_id(
        &self,
        id: &WebinarId,
    ) -> impl Future<Output = Result<Option<Webinar>>> + Send;

    /// Persist the full state of a webinar, keyed by its id.
    ///
    /// Writing the same webinar twice leaves the store as after the first write.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The store cannot be written → `WebinarError::Storage`
    /// - The webinar no longer exists → `WebinarError::NotFound`
    fn update(
        &self,
        webinar: &Webinar,
    ) -> impl Future<Output = Result<()>> + Send;
}
