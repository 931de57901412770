//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the request, response and domain schema wrappers. The document backs
//! Swagger UI (debug builds) and the `openapi-dump` binary.

use crate::inbound::http::dto::{EchoRequest, EchoResponse, MessageResponse, UserRequest};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::UserSchema;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "CRUD over users stored in SQLite, plus status and echo endpoints."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::root::welcome,
        crate::inbound::http::root::status,
        crate::inbound::http::echo::echo_data,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ErrorBody,
        MessageResponse,
        EchoRequest,
        EchoResponse,
        UserRequest
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "meta", description = "Welcome, status and echo endpoints"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
