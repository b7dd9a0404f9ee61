use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};
use serde::{Deserialize, Serialize};

/// Multipart payload for the image upload endpoint.
///
/// Browsers send each file as a repeated "images" field.
#[derive(Multipart, Debug)]
pub struct UploadImagesPayload {
    /// Uploaded image files
    pub images: Vec<Upload>,
}

/// Response model for the image upload endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UploadImagesResponse {
    /// Always true when all files were stored
    pub success: bool,

    /// Public URL of each stored file, in request order
    pub urls: Vec<String>,
}
