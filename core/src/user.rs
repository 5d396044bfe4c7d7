//! User identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a user.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a `UserId` from any string-like value.
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

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A user as seen by the webinar core.
///
/// Only `id` takes part in authorization. `email` and `password` are carried
/// as opaque values and never validated here.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: String,
    password: String,
}

impl User {
    /// Create a user from its properties.
    #[must_use]
    pub fn new(id: impl Into<UserId>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Create a user known only by its id.
    ///
    /// Used at transport boundaries where an upstream authenticator has
    /// already asserted the identity and no credentials are available.
    #[must_use]
    pub fn with_id(id: impl Into<UserId>) -> Self {
        Self::new(id, String::new(), String::new())
    }

    /// The user's id.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// The user's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The user's password, as provided.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Password stays out of logs.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
