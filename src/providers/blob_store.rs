use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;

use crate::config::StorageSettings;
use crate::errors::InternalError;

/// Capability seam for the object storage holding uploaded images.
///
/// Upload mechanics are opaque to the rest of the system; callers hand over
/// a key and bytes and get back a public URL.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store an object under the given key and return its public URL
    async fn put_object(&self, key: &str, bytes: &[u8]) -> Result<String, InternalError>;
}

/// Build a collision-resistant object key from an uploaded filename.
///
/// Millisecond-timestamp prefix plus the original basename, with path
/// separators stripped from hostile filenames.
pub fn object_key(original_name: &str) -> String {
    let basename = original_name
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("upload.bin");
    format!("{}-{}", Utc::now().timestamp_millis(), basename)
}

/// Filesystem-backed blob store.
///
/// Objects live under `{root}/{bucket}/{key}` and resolve to
/// `{public_url_base}/{bucket}/{key}`.
pub struct FsBlobStore {
    bucket_dir: PathBuf,
    bucket: String,
    public_url_base: String,
}

impl FsBlobStore {
    /// Create the store, making sure the bucket directory exists
    pub fn new(settings: &StorageSettings) -> Result<Self, InternalError> {
        let bucket_dir = settings.root.join(&settings.bucket);
        std::fs::create_dir_all(&bucket_dir)?;

        Ok(Self {
            bucket_dir,
            bucket: settings.bucket.clone(),
            public_url_base: settings.public_url_base.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn put_object(&self, key: &str, bytes: &[u8]) -> Result<String, InternalError> {
        let path = self.bucket_dir.join(key);
        tokio::fs::write(&path, bytes).await?;
        Ok(format!("{}/{}/{}", self.public_url_base, self.bucket, key))
    }
}

impl std::fmt::Debug for FsBlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsBlobStore")
            .field("bucket", &self.bucket)
            .field("bucket_dir", &self.bucket_dir)
            .finish()
    }
}
