pub mod auth_service;
pub mod password;
pub mod profile_service;
