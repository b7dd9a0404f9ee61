use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::ApplicationSettings;
use crate::errors::InternalError;
use crate::providers::{BlobStore, FsBlobStore};
use crate::stores::{CredentialStore, ProjectStore};

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once at startup and shared across the API
/// structs. There is no module-level mutable state; every handler reaches
/// its stores through this context.
pub struct AppData {
    pub db: DatabaseConnection,
    pub settings: ApplicationSettings,
    pub credential_store: Arc<CredentialStore>,
    pub project_store: Arc<ProjectStore>,
    pub blob_store: Arc<dyn BlobStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// Database connections should be connected and migrated before calling
    /// this. The blob store directory is created here.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when the blob store cannot be initialized
    pub async fn init(
        db: DatabaseConnection,
        settings: ApplicationSettings,
    ) -> Result<Self, InternalError> {
        tracing::debug!("Initializing blob store...");
        let blob_store: Arc<dyn BlobStore> = Arc::new(FsBlobStore::new(&settings.storage)?);

        Ok(Self::with_blob_store(db, settings, blob_store))
    }

    /// Assemble the context around an externally built blob store
    ///
    /// Integration tests use this to point uploads at a temp directory.
    pub fn with_blob_store(
        db: DatabaseConnection,
        settings: ApplicationSettings,
        blob_store: Arc<dyn BlobStore>,
    ) -> Self {
        let credential_store = Arc::new(CredentialStore::new(db.clone()));
        let project_store = Arc::new(ProjectStore::new(db.clone()));

        Self {
            db,
            settings,
            credential_store,
            project_store,
            blob_store,
        }
    }
}
