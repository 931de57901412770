//! Per-request SQLite connection acquisition.
//!
//! Connections are not pooled. Every repository call opens a fresh
//! connection through [`SqliteConnector::connect`] and drops it before
//! returning; dropping the wrapper closes the underlying SQLite handle, so
//! release happens on every exit path including early error returns.
//!
//! Every connection waits up to [`BUSY_TIMEOUT_MS`] for a competing writer's
//! lock instead of failing at once with `SQLITE_BUSY`.
//!
//! Diesel's SQLite connection is synchronous. `diesel-async`'s
//! [`SyncConnectionWrapper`] runs it on Tokio's blocking pool so handlers
//! never block the executor.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::SqliteConnection;
use diesel_async::{AsyncConnection, SimpleAsyncConnection};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use tracing::warn;

use crate::domain::ports::StoreProbe;
use crate::domain::{DATABASE_CONNECTION_FAILED, Error};

/// How long a connection waits on a locked database before giving up.
pub const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Async-capable SQLite connection handed to repository adapters.
pub type StoreConnection = SyncConnectionWrapper<SqliteConnection>;

/// Errors that can occur while acquiring a store connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    /// SQLite refused to open or configure the database.
    #[error("failed to open database at {database_url}: {message}")]
    Open {
        database_url: String,
        message: String,
    },
}

/// Opens SQLite connections for a configured database location.
///
/// # Example
///
/// ```ignore
/// let connector = SqliteConnector::new("users.db");
/// let mut conn = connector.connect().await?;
/// // Use conn for a single Diesel statement; it closes on drop.
/// ```
#[derive(Debug, Clone)]
pub struct SqliteConnector {
    database_url: Arc<str>,
}

impl SqliteConnector {
    /// Create a connector for a SQLite file path or `file:` URL.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: Arc::from(database_url.into()),
        }
    }

    /// Database location this connector opens.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Open a new connection.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::Open`] when the file cannot be opened or
    /// created (missing directory, permissions, lock failures).
    pub async fn connect(&self) -> Result<StoreConnection, ConnectionError> {
        let mut conn = StoreConnection::establish(&self.database_url)
            .await
            .map_err(|err| self.open_error(&err))?;
        conn.batch_execute(&format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};"))
            .await
            .map_err(|err| self.open_error(&err))?;
        Ok(conn)
    }

    fn open_error(&self, err: &dyn fmt::Display) -> ConnectionError {
        ConnectionError::Open {
            database_url: self.database_url.to_string(),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl StoreProbe for SqliteConnector {
    async fn check(&self) -> Result<(), Error> {
        self.connect().await.map(drop).map_err(|err| {
            warn!(error = %err, "readiness probe could not reach the store");
            Error::service_unavailable(DATABASE_CONNECTION_FAILED)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn connect_creates_missing_database_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("fresh.db");
        let connector = SqliteConnector::new(path.to_string_lossy());

        connector.connect().await.expect("connection opens");
        assert!(path.exists());
    }

    #[derive(diesel::QueryableByName)]
    struct BusyTimeout {
        #[diesel(sql_type = diesel::sql_types::Integer)]
        timeout: i32,
    }

    #[rstest]
    #[tokio::test]
    async fn connect_sets_busy_timeout() {
        use diesel_async::RunQueryDsl;

        let dir = tempfile::tempdir().expect("temp dir");
        let connector = SqliteConnector::new(dir.path().join("busy.db").to_string_lossy());
        let mut conn = connector.connect().await.expect("connection opens");

        let row: BusyTimeout = diesel::sql_query("PRAGMA busy_timeout")
            .get_result(&mut conn)
            .await
            .expect("read pragma");
        assert_eq!(i64::from(row.timeout), i64::from(BUSY_TIMEOUT_MS));
    }

    #[rstest]
    #[tokio::test]
    async fn connect_reports_unreachable_location() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing-dir").join("users.db");
        let connector = SqliteConnector::new(path.to_string_lossy());

        let err = connector.connect().await.err().expect("directory is missing");
        let ConnectionError::Open { database_url, .. } = err;
        assert_eq!(database_url, path.to_string_lossy());
    }

    #[rstest]
    #[tokio::test]
    async fn probe_maps_failures_to_service_unavailable() {
        let connector = SqliteConnector::new("/nonexistent-dir/for-probe/users.db");
        let err = connector.check().await.expect_err("probe fails");
        assert_eq!(err.message(), DATABASE_CONNECTION_FAILED);
    }
}
