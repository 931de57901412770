//! Generic JSON echo endpoint. Nothing is persisted.

use actix_web::{HttpResponse, post, web};

use super::ApiResult;
use super::dto::EchoResponse;
use super::error::ErrorBody;
use super::validation::echo_payload;

/// Echo a JSON object carrying at least `name` and `role`.
#[utoipa::path(
    post,
    path = "/data",
    request_body = crate::inbound::http::dto::EchoRequest,
    responses(
        (status = 201, description = "Payload echoed", body = EchoResponse),
        (status = 400, description = "Missing or incomplete payload", body = ErrorBody)
    ),
    tags = ["meta"],
    operation_id = "echoData"
)]
#[post("/data")]
pub async fn echo_data(body: web::Bytes) -> ApiResult<HttpResponse> {
    let received_data = echo_payload(&body)?;
    Ok(HttpResponse::Created().json(EchoResponse { received_data }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::validation::{MISSING_NAME_OR_ROLE, NO_JSON_PAYLOAD};
    use actix_web::{App, http::StatusCode, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn post(body: &'static str) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(App::new().service(echo_data)).await;
        actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/data")
                .insert_header(("content-type", "application/json"))
                .set_payload(body)
                .to_request(),
        )
        .await
    }

    #[rstest]
    #[actix_web::test]
    async fn echoes_complete_payload() {
        let res = post(r#"{"name":"x","role":"y"}"#).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({"received_data": {"name": "x", "role": "y"}}));
    }

    #[rstest]
    #[case(r#"{"name":"x"}"#, MISSING_NAME_OR_ROLE)]
    #[case("", NO_JSON_PAYLOAD)]
    #[case("{", NO_JSON_PAYLOAD)]
    #[case("{}", NO_JSON_PAYLOAD)]
    #[actix_web::test]
    async fn rejects_incomplete_payloads(#[case] payload: &'static str, #[case] message: &str) {
        let res = post(payload).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = actix_test::read_body_json(res).await;
        assert_eq!(body.error, message);
    }
}
