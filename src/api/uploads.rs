use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::providers::blob_store::{object_key, BlobStore};
use crate::types::dto::uploads::{UploadImagesPayload, UploadImagesResponse};

/// Upper bound on files per upload request
pub const MAX_UPLOAD_FILES: usize = 12;

/// Image upload endpoints
pub struct UploadsApi {
    blob_store: Arc<dyn BlobStore>,
}

impl UploadsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            blob_store: app_data.blob_store.clone(),
        }
    }
}

/// API tags for upload endpoints
#[derive(Tags)]
enum UploadTags {
    /// Image uploads
    Uploads,
}

#[OpenApi]
impl UploadsApi {
    /// Store uploaded images in the blob store
    ///
    /// Accepts up to 12 files in the "images" field and returns their public
    /// URLs in request order. The URLs are not attached to any project here;
    /// callers follow up with the attach-images endpoint.
    #[oai(path = "/upload-images", method = "post", tag = "UploadTags::Uploads")]
    async fn upload_images(
        &self,
        payload: UploadImagesPayload,
    ) -> Result<Json<UploadImagesResponse>, ApiError> {
        if payload.images.len() > MAX_UPLOAD_FILES {
            return Err(ApiError::validation(format!(
                "At most {} images per upload",
                MAX_UPLOAD_FILES
            )));
        }

        let mut urls = Vec::with_capacity(payload.images.len());
        for upload in payload.images {
            let key = object_key(upload.file_name().unwrap_or("upload.bin"));

            let bytes = upload.into_vec().await.map_err(|e| {
                tracing::warn!("Failed to read uploaded file: {}", e);
                ApiError::validation("Malformed multipart payload")
            })?;

            let url = self.blob_store.put_object(&key, &bytes).await.map_err(|e| {
                tracing::error!("Blob store write failed: {}", e);
                ApiError::internal()
            })?;
            urls.push(url);
        }

        Ok(Json(UploadImagesResponse {
            success: true,
            urls,
        }))
    }
}
