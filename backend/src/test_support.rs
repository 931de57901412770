//! Test utilities shared by unit and integration tests.
//!
//! Compiled only with the `test-support` feature, which the crate's own
//! dev-dependency entry enables.

use std::io;
use std::sync::Arc;

use tempfile::TempDir;

use crate::domain::UsersService;
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DieselUserRepository, SchemaInitError, SqliteConnector, ensure_schema,
};

/// Errors raised while preparing a throwaway database.
#[derive(Debug, thiserror::Error)]
pub enum TestDatabaseError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[from] io::Error),
    #[error(transparent)]
    Schema(#[from] SchemaInitError),
}

/// SQLite database in a temporary directory, removed on drop.
///
/// # Examples
///
/// ```no_run
/// use users_api::test_support::TestDatabase;
///
/// # async fn run() -> Result<(), users_api::test_support::TestDatabaseError> {
/// let db = TestDatabase::initialised().await?;
/// let _state = db.http_state();
/// # Ok(())
/// # }
/// ```
pub struct TestDatabase {
    _dir: TempDir,
    connector: SqliteConnector,
}

impl TestDatabase {
    /// Create an empty database file location without a schema.
    ///
    /// # Errors
    ///
    /// Returns [`TestDatabaseError::TempDir`] when the directory cannot be
    /// created.
    pub fn empty() -> Result<Self, TestDatabaseError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("users.db");
        let connector = SqliteConnector::new(path.to_string_lossy());
        Ok(Self {
            _dir: dir,
            connector,
        })
    }

    /// Create a database with the users table in place.
    ///
    /// # Errors
    ///
    /// Returns [`TestDatabaseError`] when the directory or schema cannot be
    /// created.
    pub async fn initialised() -> Result<Self, TestDatabaseError> {
        let db = Self::empty()?;
        ensure_schema(&db.connector).await?;
        Ok(db)
    }

    /// Connector pointing at this database.
    pub fn connector(&self) -> SqliteConnector {
        self.connector.clone()
    }

    /// Diesel repository over this database.
    pub fn repository(&self) -> DieselUserRepository {
        DieselUserRepository::new(self.connector())
    }

    /// HTTP state wired to a service over this database.
    pub fn http_state(&self) -> HttpState {
        http_state_for(self.connector())
    }
}

/// HTTP state wired to a service over `connector`.
pub fn http_state_for(connector: SqliteConnector) -> HttpState {
    let service = Arc::new(UsersService::new(Arc::new(DieselUserRepository::new(
        connector,
    ))));
    HttpState::new(service.clone(), service)
}

/// Connector whose database lives in a directory that does not exist.
pub fn unreachable_connector() -> SqliteConnector {
    SqliteConnector::new("/nonexistent-users-api-dir/users.db")
}
