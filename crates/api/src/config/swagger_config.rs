use crate::handlers::{
    create_user::__path_create_user, delete_user::__path_delete_user, get_user::__path_get_user,
    health::__path_health_check, list_users::__path_list_users,
    update_user::__path_update_user,
};
use userhub_primitives::models::{
    CreateUserRequest, DeleteResponse, HealthStatus, UpdateUserRequest, User,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(create_user, list_users, get_user, update_user, delete_user, health_check),
    components(schemas(
        User,
        CreateUserRequest,
        UpdateUserRequest,
        DeleteResponse,
        HealthStatus
    )),
    tags(
        (name = "Users", description = "User management endpoints"),
        (name = "Health", description = "Service health endpoints")
    )
)]
pub struct ApiDoc;
