// Stores layer - Data access and repository pattern
pub mod credential_store;
pub mod project_store;

pub use credential_store::CredentialStore;
pub use project_store::{ProjectStore, ProjectUpdate};
