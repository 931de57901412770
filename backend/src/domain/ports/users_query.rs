//! Driving port for user-facing queries.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every stored user.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return a single user or a not-found error.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}
