use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::stores::project_store::decode_images;
use crate::types::db::project;

/// Request model for creating a project
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AddProjectRequest {
    /// Project display name
    pub name: String,

    /// Current stage label (free-form, e.g. "design")
    #[oai(rename = "currentStage")]
    #[serde(rename = "currentStage")]
    pub current_stage: String,

    /// Completion percentage, 0-100 expected
    pub progress: Option<i32>,

    /// Username of the owning client
    pub client: String,
}

/// Request model for partially updating a project.
///
/// Omitted fields keep their stored values.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    /// New project name
    pub name: Option<String>,

    /// New stage label
    #[oai(rename = "currentStage")]
    #[serde(rename = "currentStage")]
    pub current_stage: Option<String>,

    /// New completion percentage
    pub progress: Option<i32>,
}

/// Request model for attaching uploaded image URLs to a project
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AttachImagesRequest {
    /// Image URLs to append to the project's gallery
    pub urls: Vec<String>,
}

/// Project record as returned in API responses
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Store-assigned project id
    pub id: String,

    /// Project display name
    pub name: String,

    /// Current stage label
    #[oai(rename = "currentStage")]
    #[serde(rename = "currentStage")]
    pub current_stage: String,

    /// Completion percentage
    pub progress: i32,

    /// Unix timestamp of the last create/update
    #[oai(rename = "lastUpdated")]
    #[serde(rename = "lastUpdated")]
    pub last_updated: i64,

    /// Image URLs attached to the project, in upload order
    pub images: Vec<String>,

    /// Id of the owning client (may reference a deleted client)
    pub client: String,
}

impl From<project::Model> for ProjectRecord {
    fn from(model: project::Model) -> Self {
        Self {
            images: decode_images(&model.images),
            id: model.id,
            name: model.name,
            current_stage: model.current_stage,
            progress: model.progress,
            last_updated: model.last_updated,
            client: model.client_id,
        }
    }
}
