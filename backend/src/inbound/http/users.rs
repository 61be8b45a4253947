//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users {"name":"Ann","email":"ann@x.com","profession":"Engineer"}
//! PUT    /users {"id":0,"name":"Ann","email":"ann@x.com","profession":"Lead"}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::ports::UserService;
use crate::domain::{Error, User, UserId, UserInput, validated_details};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::schemas::{UserInputSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Message returned by a successful create.
pub const USER_CREATED_MESSAGE: &str = "New user Created successfully";
/// Message returned by a successful update.
pub const USER_UPDATED_MESSAGE: &str = "User data updated successfully";
/// Message returned by a successful delete.
pub const USER_DELETED_MESSAGE: &str = "User has been deleted";

/// Body returned by successful mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable confirmation of the mutation.
    #[schema(example = "New user Created successfully")]
    pub message: String,
}

impl SuccessResponse {
    fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_owned(),
        }
    }
}

fn log_input(operation: &'static str, input: Option<&UserInput>) {
    match input {
        Some(input) => info!(
            operation,
            id = ?input.id,
            name = ?input.name,
            email = ?input.email,
            profession = ?input.profession,
            "user payload received"
        ),
        None => info!(operation, "empty user payload received"),
    }
}

/// Look up `id`, treating an absent id as an absent record.
async fn find_existing(users: &dyn UserService, id: Option<UserId>) -> ApiResult<Option<User>> {
    match id {
        Some(id) => users.get_by_id(id).await,
        None => Ok(None),
    }
}

/// List every stored user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 400, description = "Unexpected failure", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_all().await?;
    info!(count = users.len(), "users listed");
    Ok(web::Json(users))
}

/// Fetch a user by identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 400, description = "Malformed identifier", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::new(path.into_inner());
    info!(%id, "get user requested");
    let user = state
        .users
        .get_by_id(id)
        .await?
        .ok_or_else(Error::user_not_found)?;
    info!(%user, "user found");
    Ok(web::Json(user))
}

/// Create a user under a freshly issued identifier.
///
/// Any `id` in the payload is ignored.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserInputSchema,
    responses(
        (status = 201, description = "User created", body = SuccessResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 404, description = "Invalid input", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<Option<UserInput>>,
) -> ApiResult<HttpResponse> {
    let input = payload.into_inner();
    log_input("create", input.as_ref());
    let details = validated_details(input.as_ref()).ok_or_else(Error::invalid_input)?;
    let id = state
        .ids
        .next()
        .map_err(|err| Error::unexpected(err.to_string()))?;
    let user = state.users.save(User::new(id, details)).await?;
    info!(%user, "user created");
    Ok(HttpResponse::Created().json(SuccessResponse::new(USER_CREATED_MESSAGE)))
}

/// Replace the fields of an existing user.
#[utoipa::path(
    put,
    path = "/users",
    request_body = UserInputSchema,
    responses(
        (status = 200, description = "User updated", body = SuccessResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 404, description = "Invalid input or unknown id", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users")]
pub async fn update_user(
    state: web::Data<HttpState>,
    payload: web::Json<Option<UserInput>>,
) -> ApiResult<HttpResponse> {
    let input = payload.into_inner();
    log_input("update", input.as_ref());
    let details = validated_details(input.as_ref()).ok_or_else(Error::invalid_input)?;
    let id = input.as_ref().and_then(UserInput::user_id);
    let existing = find_existing(state.users.as_ref(), id)
        .await?
        .ok_or_else(Error::invalid_input)?;
    let user = state.users.save(User::new(existing.id(), details)).await?;
    info!(%user, "user updated");
    Ok(HttpResponse::Ok().json(SuccessResponse::new(USER_UPDATED_MESSAGE)))
}

/// Delete an existing user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = SuccessResponse),
        (status = 400, description = "Malformed identifier", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = UserId::new(path.into_inner());
    info!(%id, "delete user requested");
    let user = find_existing(state.users.as_ref(), Some(id))
        .await?
        .ok_or_else(Error::invalid_user_id)?;
    state.users.delete(&user).await?;
    info!(%user, "user deleted");
    Ok(HttpResponse::Ok().json(SuccessResponse::new(USER_DELETED_MESSAGE)))
}

/// Register every user route on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}
