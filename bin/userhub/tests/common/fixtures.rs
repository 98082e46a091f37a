use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;

use userhub_primitives::models::{CreateUserRequest, UpdateUserRequest};

/// Create-user payload with random name and email
pub fn create_user_request() -> CreateUserRequest {
    CreateUserRequest {
        name: Name().fake(),
        email: SafeEmail().fake(),
    }
}

/// Create-user payload with a specific email
pub fn create_user_request_with_email(email: &str) -> CreateUserRequest {
    CreateUserRequest {
        name: Name().fake(),
        email: email.to_string(),
    }
}

/// Partial update touching only the name
pub fn rename_request(name: &str) -> UpdateUserRequest {
    UpdateUserRequest {
        name: Some(name.to_string()),
        email: None,
    }
}
