//! Create the users table, optionally inserting a demo user.
//!
//! ```text
//! init-db --database-url users.db --seed-demo
//! ```

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use users_api::domain::seed_demo_user;
use users_api::outbound::persistence::{DieselUserRepository, SqliteConnector, ensure_schema};
use users_api::settings::DEFAULT_DATABASE_URL;

#[derive(Debug, Parser)]
#[command(name = "init-db", about = "Initialise the users SQLite database")]
struct Cli {
    /// SQLite database file path or `file:` URL.
    #[arg(long, env = "USERS_API_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,
    /// Insert a demo user and log every stored row.
    #[arg(long)]
    seed_demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let connector = SqliteConnector::new(&cli.database_url);
    ensure_schema(&connector)
        .await
        .wrap_err_with(|| format!("failed to initialise {}", cli.database_url))?;

    if cli.seed_demo {
        let outcome = seed_demo_user(&DieselUserRepository::new(connector))
            .await
            .wrap_err("failed to seed demo user")?;
        info!(
            inserted = outcome.inserted,
            users = outcome.users.len(),
            "demo seeding finished"
        );
    }
    Ok(())
}
