// Services layer - Business logic
pub mod auth_service;
pub mod password;

pub use auth_service::AuthService;
