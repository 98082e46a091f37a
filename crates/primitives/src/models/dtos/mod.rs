pub mod user_dto;

pub use user_dto::{CreateUserRequest, DeleteResponse, HealthStatus, UpdateUserRequest};
