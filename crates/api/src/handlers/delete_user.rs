use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use userhub_core::AppState;
use userhub_primitives::error::ApiError;
use userhub_primitives::models::DeleteResponse;

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User soft-deleted", body = DeleteResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.users.remove(id).await?;

    Ok(Json(DeleteResponse {
        success: true,
        message: format!("User with id {} has been successfully deleted", id),
    }))
}
