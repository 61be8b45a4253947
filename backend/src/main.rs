//! Service entry-point: loads configuration, prepares storage, and serves the
//! users API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_service::config::AppSettings;
use user_service::inbound::http::health::HealthState;
use user_service::outbound::persistence::{DbPool, PoolConfig, run_migrations};

use server::{ServerConfig, create_server, drain, shutdown_signal};

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

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load configuration: {err}")))?;

    let mut config = ServerConfig::new(settings.bind_addr());
    match settings.database_url() {
        Some(url) => {
            run_migrations(url).await.map_err(std::io::Error::other)?;
            let pool_config = PoolConfig::new(url).with_max_size(settings.pool_max_size());
            let pool = DbPool::new(pool_config)
                .await
                .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None => info!("no database configured; users are kept in memory"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config).await?;
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        shutdown_signal().await;
        drain(health_state, handle).await;
    });
    info!(addr = %settings.bind_addr(), "user service listening");
    server.await
}
