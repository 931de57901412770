//! Port abstraction for user persistence adapters and their errors.
//!
//! Each method maps to exactly one SQL statement. Adapters acquire a store
//! connection per call and release it before returning, whatever the
//! outcome.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Store connection could not be established.
        Connection => "user repository connection failed: {message}",
        /// The statement violated the unique email constraint.
        DuplicateEmail => "user email already stored: {message}",
        /// Query or mutation failed during execution.
        Query => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every stored user in storage iteration order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new user, letting storage assign the identifier.
    async fn insert(&self, draft: &UserDraft) -> Result<(), UserPersistenceError>;

    /// Replace name and email of the matching row; returns affected rows.
    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<usize, UserPersistenceError>;

    /// Delete the matching row; returns affected rows.
    async fn delete(&self, id: UserId) -> Result<usize, UserPersistenceError>;
}
