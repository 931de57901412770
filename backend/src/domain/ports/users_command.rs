//! Driving port for user mutations.
//!
//! Inbound adapters call this port after request validation; implementations
//! decide how persistence outcomes map onto the domain error taxonomy.

use async_trait::async_trait;

use crate::domain::{Error, UserDraft, UserId};

/// Domain use-case port for creating, replacing and removing users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user.
    async fn create(&self, draft: &UserDraft) -> Result<(), Error>;

    /// Replace name and email of an existing user.
    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<(), Error>;

    /// Remove an existing user.
    async fn delete(&self, id: UserId) -> Result<(), Error>;
}
