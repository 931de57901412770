//! Server settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `USERS_API_*` environment variables and
//! configuration files.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Bind host used when none is configured.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Bind port used when none is configured.
pub const DEFAULT_PORT: u16 = 8080;
/// SQLite file used when none is configured.
pub const DEFAULT_DATABASE_URL: &str = "users.db";

/// Configuration values controlling the HTTP server and its store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct AppSettings {
    /// Host name or address to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// SQLite database file path or `file:` URL.
    pub database_url: Option<String>,
    /// Create the users table at startup when missing.
    #[ortho_config(default = false)]
    pub init_schema: bool,
}

impl AppSettings {
    /// Return the host to bind, falling back to `0.0.0.0`.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the port to bind, falling back to `8080`.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the configured database location, falling back to `users.db`.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }
}
