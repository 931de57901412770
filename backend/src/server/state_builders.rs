//! Builders for the HTTP and health state shared by every worker.

use std::sync::Arc;

use actix_web::web;

use users_api::domain::UsersService;
use users_api::inbound::http::health::HealthState;
use users_api::inbound::http::state::HttpState;
use users_api::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Build the users service over the configured store and expose it through
/// both driving ports.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = Arc::new(DieselUserRepository::new(config.connector.clone()));
    let service = Arc::new(UsersService::new(repository));
    web::Data::new(HttpState::new(service.clone(), service))
}

/// Build the health state; readiness also requires the store to open.
pub(crate) fn build_health_state(config: &ServerConfig) -> web::Data<HealthState> {
    web::Data::new(HealthState::new().with_store_probe(Arc::new(config.connector.clone())))
}
