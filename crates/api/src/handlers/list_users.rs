use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use userhub_core::AppState;
use userhub_primitives::error::ApiError;
use userhub_primitives::models::User;

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All active users, possibly served from cache", body = [User]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.find_all().await?;

    Ok(Json(users))
}
