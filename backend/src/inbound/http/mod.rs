//! HTTP inbound adapter exposing REST endpoints.

pub mod dto;
pub mod echo;
pub mod error;
pub mod health;
pub mod root;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register the welcome, status, echo, users and health routes.
///
/// Callers supply `web::Data<HttpState>` and `web::Data<HealthState>` as app
/// data.
///
/// [`HttpState`]: state::HttpState
/// [`HealthState`]: health::HealthState
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root::welcome)
        .service(root::status)
        .service(echo::echo_data)
        .service(users::create_user)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(health::ready)
        .service(health::live);
}
