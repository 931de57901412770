//! Diesel error translation for the user repository.

use tracing::debug;

use super::connection::ConnectionError;
use crate::domain::ports::UserPersistenceError;

/// Map a connection failure onto the port's connection variant.
pub(super) fn map_connection_error(error: ConnectionError) -> UserPersistenceError {
    let ConnectionError::Open {
        database_url,
        message,
    } = error;
    UserPersistenceError::connection(format!("{database_url}: {message}"))
}

/// Map Diesel errors onto the user persistence port.
///
/// Unique violations become [`UserPersistenceError::DuplicateEmail`] since
/// `email` is the only unique column besides the primary key.
pub(super) fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            UserPersistenceError::duplicate_email(info.message())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(_, info) => UserPersistenceError::query(info.message()),
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        other => UserPersistenceError::query(other.to_string()),
    }
}
