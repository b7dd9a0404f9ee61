use std::path::PathBuf;

use crate::config::env_provider::EnvironmentProvider;
use crate::errors::InternalError;

/// Blob store configuration.
///
/// A missing bucket name is a fatal startup error; everything else has a
/// local-development default.
#[derive(Debug, Clone)]
pub struct StorageSettings {
    /// Logical bucket the uploads live under
    pub bucket: String,
    /// Filesystem root backing the blob store
    pub root: PathBuf,
    /// Base used to build the public URL of a stored object
    pub public_url_base: String,
}

/// Application settings loaded from the environment at startup
#[derive(Debug, Clone)]
pub struct ApplicationSettings {
    pub database_url: String,
    pub bind_addr: String,
    pub session_secret: String,
    pub storage: StorageSettings,
    /// Directory holding the dashboard pages
    pub public_dir: PathBuf,
}

impl ApplicationSettings {
    /// Load settings through the given environment provider
    ///
    /// # Errors
    ///
    /// Returns `InternalError::MissingEnvVar` when `SESSION_SECRET` or
    /// `STORAGE_BUCKET` is absent.
    pub fn load(env: &dyn EnvironmentProvider) -> Result<Self, InternalError> {
        let database_url = env
            .get_var("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://portal.db?mode=rwc".to_string());

        let bind_addr = env
            .get_var("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string());

        let session_secret = env
            .get_var("SESSION_SECRET")
            .ok_or_else(|| InternalError::MissingEnvVar("SESSION_SECRET".to_string()))?;

        let bucket = env
            .get_var("STORAGE_BUCKET")
            .ok_or_else(|| InternalError::MissingEnvVar("STORAGE_BUCKET".to_string()))?;

        let root = env
            .get_var("STORAGE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("storage"));

        let public_url_base = env
            .get_var("PUBLIC_URL_BASE")
            .unwrap_or_else(|| "http://localhost:3000/storage".to_string());

        let public_dir = env
            .get_var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("public"));

        Ok(Self {
            database_url,
            bind_addr,
            session_secret,
            storage: StorageSettings {
                bucket,
                root,
                public_url_base,
            },
            public_dir,
        })
    }
}
