//! Users API entry-point: loads settings, optionally prepares the schema and
//! serves the REST endpoints.

mod server;

use std::io;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, build_health_state, create_server, drain_on, shutdown_signal};
use users_api::outbound::persistence::ensure_schema;
use users_api::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    let config = ServerConfig::from_settings(&settings);

    if settings.init_schema {
        ensure_schema(config.connector())
            .await
            .map_err(io::Error::other)?;
    }

    info!(
        host = settings.host(),
        port = settings.port(),
        database_url = settings.database_url(),
        "starting users API"
    );
    let health_state = build_health_state(&config);
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    server.await
}
