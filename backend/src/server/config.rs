//! HTTP server configuration object and helpers.

use users_api::outbound::persistence::SqliteConnector;
use users_api::settings::AppSettings;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) connector: SqliteConnector,
}

impl ServerConfig {
    /// Construct a server configuration for a bind target and store.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, connector: SqliteConnector) -> Self {
        Self {
            host: host.into(),
            port,
            connector,
        }
    }

    /// Resolve bind target and database location from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(
            settings.host(),
            settings.port(),
            SqliteConnector::new(settings.database_url()),
        )
    }

    /// Return the connector used by persistence adapters.
    #[must_use]
    pub fn connector(&self) -> &SqliteConnector {
        &self.connector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn from_settings_applies_fallbacks() {
        let settings = AppSettings {
            host: None,
            port: Some(9000),
            database_url: None,
            init_schema: false,
        };

        let config = ServerConfig::from_settings(&settings);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.connector().database_url(), "users.db");
    }
}
