//! User data model.
//!
//! [`User`] is the read model returned by queries; [`UserDraft`] carries the
//! validated name/email pair written by create and update.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::EmailAddress;

/// Storage-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Persisted user record.
///
/// Fields are returned exactly as stored; format checks apply on write only.
///
/// # Examples
/// ```
/// use users_api::domain::{User, UserId};
///
/// let user = User::new(UserId::new(1), "Alice", "alice@example.com");
/// let json = serde_json::to_value(&user).expect("serialise user");
/// assert_eq!(json["id"], 1);
/// assert_eq!(json["email"], "alice@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Build a user from stored components.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Storage-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Name as stored.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email as stored.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Name and email for a create or full-replace update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    email: EmailAddress,
}

impl UserDraft {
    /// Build a draft from a name and an already validated email.
    pub fn new(name: impl Into<String>, email: EmailAddress) -> Self {
        Self {
            name: name.into(),
            email,
        }
    }

    /// Requested name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Requested email.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}
