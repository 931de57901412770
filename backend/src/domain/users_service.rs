//! Users domain service.
//!
//! Implements the [`UsersCommand`] and [`UsersQuery`] driving ports on top of
//! a [`UserRepository`]. This is the one place where persistence outcomes
//! (unique violations, zero affected rows, unreachable store, anything else)
//! are translated into the domain error taxonomy, so every handler reports
//! them identically.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserDraft, UserId};

/// Message returned when an email collides with an existing user.
pub const EMAIL_ALREADY_EXISTS: &str = "Email already exists";
/// Message returned when the target user does not exist.
pub const USER_NOT_FOUND: &str = "User not found";
/// Message returned when no store connection could be acquired.
pub const DATABASE_CONNECTION_FAILED: &str = "Database connection failed";

/// Users service implementing the driving ports.
#[derive(Clone)]
pub struct UsersService<R> {
    repository: Arc<R>,
}

impl<R> UsersService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            warn!(%message, "user store unavailable");
            Error::service_unavailable(DATABASE_CONNECTION_FAILED)
        }
        UserPersistenceError::DuplicateEmail { .. } => Error::conflict(EMAIL_ALREADY_EXISTS),
        UserPersistenceError::Query { message } => {
            error!(%message, "user store query failed");
            Error::internal(format!("user store query failed: {message}"))
        }
    }
}

fn require_affected(rows: usize) -> Result<(), Error> {
    if rows == 0 {
        Err(Error::not_found(USER_NOT_FOUND))
    } else {
        Ok(())
    }
}

#[async_trait]
impl<R> UsersCommand for UsersService<R>
where
    R: UserRepository,
{
    async fn create(&self, draft: &UserDraft) -> Result<(), Error> {
        self.repository
            .insert(draft)
            .await
            .map_err(map_persistence_error)
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<(), Error> {
        // SQLite only checks the unique index for matched rows, so a missing
        // id yields zero rows rather than a conflict.
        let rows = self
            .repository
            .update(id, draft)
            .await
            .map_err(map_persistence_error)?;
        require_affected(rows)
    }

    async fn delete(&self, id: UserId) -> Result<(), Error> {
        let rows = self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        require_affected(rows)
    }
}

#[async_trait]
impl<R> UsersQuery for UsersService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository.list().await.map_err(map_persistence_error)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }
}

#[cfg(test)]
#[path = "users_service_tests.rs"]
mod tests;
