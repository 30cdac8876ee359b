//! User HTTP handlers.
//!
//! ```text
//! POST /users       Register a user
//! GET  /users/{id}  Fetch a user
//! ```
//!
//! User registration carries no `X-Sharer-User-Id` header; there is no
//! caller to identify yet.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CreateUserRequest, UserPayload};
use crate::domain::{Error, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request payload for registering a user.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBody {
    pub name: String,
    pub email: String,
}

/// User representation returned by the directory endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<UserPayload> for UserBody {
    fn from(payload: UserPayload) -> Self {
        Self {
            id: payload.id.0,
            name: payload.name,
            email: payload.email,
        }
    }
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserBody,
    responses(
        (status = 200, description = "User registered", body = UserBody),
        (status = 400, description = "Blank name or invalid email", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserBody>,
) -> ApiResult<web::Json<UserBody>> {
    let body = payload.into_inner();
    let user = state
        .users
        .create_user(CreateUserRequest {
            name: body.name,
            email: body.email,
        })
        .await?;
    Ok(web::Json(user.into()))
}

/// Fetch a user by identifier.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(("user_id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserBody),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{user_id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<UserBody>> {
    let user = state.users.get_user(UserId(path.into_inner())).await?;
    Ok(web::Json(user.into()))
}
