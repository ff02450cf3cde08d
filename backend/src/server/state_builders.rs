//! Builders for HTTP state backed by the configured employee store.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use employees::inbound::http::state::HttpState;
use employees::outbound::memory::InMemoryEmployeeRepository;
use employees::outbound::persistence::DieselEmployeeRepository;

use super::ServerConfig;

/// Wire the employee ports to PostgreSQL when a pool is configured, otherwise
/// to a process-local in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "employee store selected");
            HttpState::from_repository(Arc::new(DieselEmployeeRepository::new(pool.clone())))
        }
        None => {
            info!(store = "memory", "employee store selected");
            HttpState::from_repository(Arc::new(InMemoryEmployeeRepository::default()))
        }
    };
    web::Data::new(state)
}
