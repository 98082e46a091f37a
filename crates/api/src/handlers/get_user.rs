use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use userhub_core::AppState;
use userhub_primitives::error::ApiError;
use userhub_primitives::models::User;

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.find_one(id).await?;

    Ok(Json(user))
}
