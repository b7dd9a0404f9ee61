use thiserror::Error;

/// Failures raised before the HTTP surface exists (startup, config, blob IO)
#[derive(Debug, Error)]
pub enum InternalError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Blob store error: {0}")]
    BlobStore(#[from] std::io::Error),
}
