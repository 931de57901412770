//! Static welcome and status endpoints.

use actix_web::{HttpResponse, get};

use super::dto::MessageResponse;

/// Welcome text listing the available endpoints.
pub const WELCOME_MESSAGE: &str = "Welcome to the users API! Endpoints: /status, /data, /users";
/// Status text; reflects process liveness only.
pub const STATUS_MESSAGE: &str = "Server is running";

/// Greet callers and name the available endpoints.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome message", body = MessageResponse)),
    tags = ["meta"],
    operation_id = "welcome"
)]
#[get("/")]
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new(WELCOME_MESSAGE))
}

/// Report that the process is serving requests. Does not touch the store.
#[utoipa::path(
    get,
    path = "/status",
    responses((status = 200, description = "Server is running", body = MessageResponse)),
    tags = ["meta"],
    operation_id = "status"
)]
#[get("/status")]
pub async fn status() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new(STATUS_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use rstest::rstest;

    #[rstest]
    #[case("/", WELCOME_MESSAGE)]
    #[case("/status", STATUS_MESSAGE)]
    #[actix_web::test]
    async fn static_endpoints_return_messages(#[case] uri: &str, #[case] expected: &str) {
        let app = actix_test::init_service(App::new().service(welcome).service(status)).await;
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: MessageResponse = actix_test::read_body_json(res).await;
        assert_eq!(body.message, expected);
    }
}
