use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppJson, IdPath,
    errors::responses::{
        BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
        UnprocessableEntityResponse,
    },
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::{UserError, UserResult};
use crate::models::{PartialUpdate, RegistrationInput, Role, User};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const USERS_TAG: &str = "users";

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, register_user, get_user, update_user, delete_user),
    components(
        schemas(User, Role, RegistrationInput, PartialUpdate, UserListResponse, EmbeddedUsers),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            ConflictResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = USERS_TAG, description = "Parking user directory")
    )
)]
pub struct ApiDoc;

/// Collection envelope returned by the list endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedUsers,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedUsers {
    pub user_list: Vec<User>,
}

impl From<Vec<User>> for UserListResponse {
    fn from(users: Vec<User>) -> Self {
        Self {
            embedded: EmbeddedUsers { user_list: users },
        }
    }
}

/// Create the user router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(register_user))
        .route(
            "/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .with_state(shared_service)
}

/// List all users in registration order
#[utoipa::path(
    get,
    path = "",
    tag = USERS_TAG,
    responses(
        (status = 200, description = "All registered users", body = UserListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<UserListResponse>> {
    let users = service.list_all().await?;
    Ok(Json(users.into()))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "",
    tag = USERS_TAG,
    request_body = RegistrationInput,
    responses(
        (status = 201, description = "User registered", body = User),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    AppJson(input): AppJson<RegistrationInput>,
) -> UserResult<impl IntoResponse> {
    let user = service.register(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = USERS_TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?.ok_or(UserError::NotFound(id))?;
    Ok(Json(user))
}

/// Update the supplied fields of a user
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = USERS_TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = PartialUpdate,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
    AppJson(patch): AppJson<PartialUpdate>,
) -> UserResult<Json<User>> {
    let user = service.update_user(id, patch).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = USERS_TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<StatusCode> {
    service.delete_user_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
