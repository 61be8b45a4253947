//! Builders wiring repositories, services, and the id generator into HTTP
//! state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use user_service::domain::UserServiceImpl;
use user_service::domain::ports::UserRepository;
use user_service::inbound::http::state::HttpState;
use user_service::outbound::AtomicIdGenerator;
use user_service::outbound::persistence::{DieselUserRepository, InMemoryUserRepository};

use super::ServerConfig;

/// Pick the repository adapter for `config`: PostgreSQL when a pool is
/// attached, process memory otherwise.
fn build_repository(config: &ServerConfig) -> Arc<dyn UserRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselUserRepository::new(pool.clone())),
        None => Arc::new(InMemoryUserRepository::new()),
    }
}

/// Build HTTP state, seeding the id generator past every stored identifier.
///
/// # Errors
/// Returns [`std::io::Error`] when existing users cannot be read or the
/// identifier space is already exhausted.
pub(super) async fn build_http_state(
    config: &ServerConfig,
) -> std::io::Result<web::Data<HttpState>> {
    let repository = build_repository(config);
    let existing = repository
        .find_all()
        .await
        .map_err(|err| std::io::Error::other(format!("failed to load users: {err}")))?;
    let ids = AtomicIdGenerator::starting_after(&existing).map_err(std::io::Error::other)?;
    info!(
        existing = existing.len(),
        persistent = config.db_pool.is_some(),
        "user store initialised"
    );

    let users = Arc::new(UserServiceImpl::new(repository));
    Ok(web::Data::new(HttpState::new(users, Arc::new(ids))))
}
