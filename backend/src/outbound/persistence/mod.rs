//! SQLite persistence adapters using Diesel ORM.
//!
//! Diesel's synchronous SQLite connection is driven through `diesel-async`'s
//! `SyncConnectionWrapper`. There is no pool: each repository call opens a
//! connection, runs one statement and closes it on drop. Writers contend on
//! SQLite's file lock, which each connection waits on for a bounded time.
//!
//! Row structs (`models.rs`) and the table definition (`schema.rs`) stay
//! private to this module; adapters hand domain types back to callers.
//!
//! # Example
//!
//! ```ignore
//! use users_api::outbound::persistence::{DieselUserRepository, SqliteConnector, ensure_schema};
//!
//! let connector = SqliteConnector::new("users.db");
//! ensure_schema(&connector).await?;
//! let repo = DieselUserRepository::new(connector);
//! ```

mod connection;
mod diesel_error_mapping;
mod diesel_user_repository;
mod models;
mod schema;
mod schema_init;

pub use connection::{BUSY_TIMEOUT_MS, ConnectionError, SqliteConnector, StoreConnection};
pub use diesel_user_repository::DieselUserRepository;
pub use schema_init::{CREATE_USERS_TABLE, SchemaInitError, ensure_schema};
