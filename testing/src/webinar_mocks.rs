//! In-memory webinar repositories.
//!
//! - [`InMemoryWebinarRepository`]: `HashMap`-backed storage with sync helpers
//!   for assertions and a write counter
//! - [`FailingWebinarRepository`]: wraps the in-memory store and fails reads
//!   or writes on demand, to exercise storage error paths

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use webinar_core::{Result, Webinar, WebinarError, WebinarId, WebinarRepository};

/// In-memory webinar repository for fast, deterministic testing.
///
/// Clones share the same storage, so a test can hand one clone to a use case
/// and keep another for assertions.
///
/// # Example
///
/// ```
/// use webinar_testing::InMemoryWebinarRepository;
/// use webinar_testing::fixtures::sample_webinar;
///
/// let repository = InMemoryWebinarRepository::with_webinars([sample_webinar()]);
/// let stored = repository.find_by_id_sync(&"webinar-id".into());
/// assert_eq!(stored.map(|w| w.seats()), Some(100));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryWebinarRepository {
    webinars: Arc<RwLock<HashMap<WebinarId, Webinar>>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryWebinarRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with `webinars`.
    ///
    /// Seeding does not count as a write.
    #[must_use]
    pub fn with_webinars(webinars: impl IntoIterator<Item = Webinar>) -> Self {
        let repository = Self::new();
        for webinar in webinars {
            repository.insert(webinar);
        }
        repository
    }

    /// Insert or replace a webinar without counting a write.
    pub fn insert(&self, webinar: Webinar) {
        self.webinars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(webinar.id().clone(), webinar);
    }

    /// Synchronous lookup for test assertions.
    #[must_use]
    pub fn find_by_id_sync(&self, id: &WebinarId) -> Option<Webinar> {
        self.webinars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Number of successful `update` calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of stored webinars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.webinars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WebinarRepository for InMemoryWebinarRepository {
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>> {
        Ok(self
            .webinars
            .read()
            .map_err(|_| WebinarError::Storage("webinar store lock poisoned".to_string()))?
            .get(id)
            .cloned())
    }

    async fn update(&self, webinar: &Webinar) -> Result<()> {
        let mut webinars = self
            .webinars
            .write()
            .map_err(|_| WebinarError::Storage("webinar store lock poisoned".to_string()))?;

        let Some(stored) = webinars.get_mut(webinar.id()) else {
            return Err(WebinarError::NotFound);
        };
        *stored = webinar.clone();
        drop(webinars);

        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Which repository operation should fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    /// `find_by_id` fails
    Read,
    /// `update` fails
    Write,
}

/// Repository that simulates a storage outage.
///
/// Reads and writes that are not configured to fail go to the wrapped
/// in-memory store.
#[derive(Clone, Debug)]
pub struct FailingWebinarRepository {
    inner: InMemoryWebinarRepository,
    fail_on: FailOn,
}

impl FailingWebinarRepository {
    /// Message carried by every simulated failure.
    pub const FAILURE: &'static str = "simulated storage outage";

    /// Wrap `inner`, failing on `fail_on`.
    #[must_use]
    pub const fn new(inner: InMemoryWebinarRepository, fail_on: FailOn) -> Self {
        Self { inner, fail_on }
    }

    /// The wrapped store, for assertions.
    #[must_use]
    pub const fn inner(&self) -> &InMemoryWebinarRepository {
        &self.inner
    }
}

impl WebinarRepository for FailingWebinarRepository {
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>> {
        if self.fail_on == FailOn::Read {
            return Err(WebinarError::Storage(Self::FAILURE.to_string()));
        }
        self.inner.find_by_id(id).await
    }

    async fn update(&self, webinar: &Webinar) -> Result<()> {
        if self.fail_on == FailOn::Write {
            return Err(WebinarError::Storage(Self::FAILURE.to_string()));
        }
        self.inner.update(webinar).await
    }
}
