//! Idempotent creation of the users table.

use diesel_async::RunQueryDsl;
use tracing::info;

use super::connection::{ConnectionError, SqliteConnector};

/// DDL for the users table. Safe to run against an initialised store.
pub const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE
)";

/// Errors raised while initialising the schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaInitError {
    /// No connection could be opened.
    #[error(transparent)]
    Connection(#[from] ConnectionError),
    /// The DDL statement failed.
    #[error("failed to create users table: {0}")]
    Statement(#[from] diesel::result::Error),
}

/// Create the users table when it does not exist yet.
///
/// Existing rows are left untouched, so calling this repeatedly is harmless.
///
/// # Errors
///
/// Returns [`SchemaInitError`] when the store cannot be opened or the DDL
/// is rejected.
pub async fn ensure_schema(connector: &SqliteConnector) -> Result<(), SchemaInitError> {
    let mut conn = connector.connect().await?;
    diesel::sql_query(CREATE_USERS_TABLE)
        .execute(&mut conn)
        .await?;
    info!(database_url = connector.database_url(), "users table ensured");
    Ok(())
}
