//! Users API handlers.
//!
//! ```text
//! POST   /users        {"name":"Alice","email":"alice@example.com"}
//! GET    /users
//! GET    /users/{id}
//! PUT    /users/{id}   {"name":"Alice B","email":"aliceb@example.com"}
//! DELETE /users/{id}
//! ```
//!
//! Bodies are validated before any storage call. A non-integer `{id}` fails
//! path extraction and yields 404.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{MessageResponse, UserRequest};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::user_draft;

/// Confirmation sent after a successful create.
pub const USER_ADDED: &str = "User added successfully!";
/// Confirmation sent after a successful update.
pub const USER_UPDATED: &str = "User updated successfully!";
/// Confirmation sent after a successful delete.
pub const USER_DELETED: &str = "User deleted successfully!";

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Missing fields, invalid email or duplicate email", body = ErrorBody),
        (status = 500, description = "Store unavailable or internal error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let draft = user_draft(&body)?;
    state.users.create(&draft).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new(USER_ADDED)))
}

/// List every user in storage order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "Store unavailable or internal error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Store unavailable or internal error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<User>> {
    let user = state
        .users_query
        .get_user(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(user))
}

/// Replace a user's name and email.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Missing fields, invalid email or duplicate email", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Store unavailable or internal error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let draft = user_draft(&body)?;
    state
        .users
        .update(UserId::new(path.into_inner()), &draft)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(USER_UPDATED)))
}

/// Remove a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Store unavailable or internal error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state.users.delete(UserId::new(path.into_inner())).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(USER_DELETED)))
}
