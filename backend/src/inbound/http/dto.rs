//! Request and response bodies for the HTTP adapter.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Body of a successful request that returns only a confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User added successfully!")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Echo of an accepted `/data` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EchoResponse {
    /// The request body exactly as received.
    #[schema(value_type = Object)]
    pub received_data: Value,
}

/// Shape accepted by `POST /users` and `PUT /users/{id}`.
///
/// Documentation only: handlers validate the raw body so that missing
/// fields and malformed JSON map onto the same error messages.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserRequest {
    #[schema(example = "Alice")]
    name: String,
    #[schema(example = "alice@example.com")]
    email: String,
}

/// Shape accepted by `POST /data`; any further keys are echoed too.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EchoRequest {
    #[schema(value_type = Object, example = "x")]
    name: Value,
    #[schema(value_type = Object, example = "y")]
    role: Value,
}
