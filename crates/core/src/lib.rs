pub mod app_state;
pub mod cache;
pub mod repositories;
pub mod services;

pub use app_state::AppState;
