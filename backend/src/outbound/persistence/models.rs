//! Internal Diesel row structs for the users table.
//!
//! These types are implementation details of the persistence layer and never
//! leave it; the repository converts them into domain [`User`] values.
//!
//! [`User`]: crate::domain::User

use diesel::prelude::*;

use super::schema::users;
use crate::domain::{User, UserDraft, UserId};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::new(UserId::new(row.id), row.name, row.email)
    }
}

/// Insertable struct for creating user records; `id` is store-assigned.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Changeset replacing both mutable columns of an existing record.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a UserDraft> for NewUserRow<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: draft.name(),
            email: draft.email().as_ref(),
        }
    }
}

impl<'a> From<&'a UserDraft> for UserChangeset<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: draft.name(),
            email: draft.email().as_ref(),
        }
    }
}
