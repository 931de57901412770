//! SQLite-backed `UserRepository` implementation using Diesel ORM.
//!
//! Every method opens its own connection, issues a single statement and lets
//! the connection drop on return.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

use super::connection::SqliteConnector;
use super::diesel_error_mapping::{map_connection_error, map_diesel_error};
use super::models::{NewUserRow, UserChangeset, UserRow};
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Debug, Clone)]
pub struct DieselUserRepository {
    connector: SqliteConnector,
}

impl DieselUserRepository {
    /// Create a repository that opens connections through `connector`.
    pub fn new(connector: SqliteConnector) -> Self {
        Self { connector }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self
            .connector
            .connect()
            .await
            .map_err(map_connection_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self
            .connector
            .connect()
            .await
            .map_err(map_connection_error)?;

        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, draft: &UserDraft) -> Result<(), UserPersistenceError> {
        let mut conn = self
            .connector
            .connect()
            .await
            .map_err(map_connection_error)?;

        diesel::insert_into(users::table)
            .values(NewUserRow::from(draft))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<usize, UserPersistenceError> {
        let mut conn = self
            .connector
            .connect()
            .await
            .map_err(map_connection_error)?;

        diesel::update(users::table.find(id.get()))
            .set(UserChangeset::from(draft))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: UserId) -> Result<usize, UserPersistenceError> {
        let mut conn = self
            .connector
            .connect()
            .await
            .map_err(map_connection_error)?;

        diesel::delete(users::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
