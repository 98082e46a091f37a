use axum::extract::{Json, Path, State};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

use userhub_core::AppState;
use userhub_primitives::error::ApiError;
use userhub_primitives::models::{UpdateUserRequest, User};

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let user = state.users.update(id, payload).await?;

    Ok(Json(user))
}
