//! Employee service entry-point: loads settings, prepares the store and
//! serves the REST API.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use employees::inbound::http::health::HealthState;
use employees::outbound::persistence::{DbPool, run_pending_migrations_async};
use employees::settings::ServerSettings;
use ortho_config::OrthoConfig;

use server::{ServerConfig, create_server};

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("{context}: {err}"))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| startup_error("failed to load settings", err))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| startup_error("invalid settings", err))?;
    let pool_config = settings
        .pool_config()
        .map_err(|err| startup_error("invalid settings", err))?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(pool_config) = pool_config {
        if settings.run_migrations() {
            run_pending_migrations_async(pool_config.database_url().to_owned())
                .await
                .map_err(|err| startup_error("database migration failed", err))?;
        }
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|err| startup_error("database pool setup failed", err))?;
        config = config.with_db_pool(pool);
    } else {
        warn!("no database configured; employees are kept in memory");
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "employee service listening");
    server.await
}
