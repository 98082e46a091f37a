use axum::extract::{Json, State};
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

use userhub_core::AppState;
use userhub_primitives::error::ApiError;
use userhub_primitives::models::{CreateUserRequest, User};

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created (or restored from a soft-deleted row)", body = User),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already in use"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let user = state.users.create(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}
