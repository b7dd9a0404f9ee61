// DTO layer - request/response models for the HTTP API
pub mod auth;
pub mod clients;
pub mod common;
pub mod projects;
pub mod uploads;
