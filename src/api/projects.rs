use std::sync::Arc;

use poem_openapi::param::Path;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::stores::{CredentialStore, ProjectStore, ProjectUpdate};
use crate::types::dto::common::SuccessResponse;
use crate::types::dto::projects::{AddProjectRequest, AttachImagesRequest, UpdateProjectRequest};

/// Project record management endpoints
pub struct ProjectsApi {
    credential_store: Arc<CredentialStore>,
    project_store: Arc<ProjectStore>,
}

impl ProjectsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            credential_store: app_data.credential_store.clone(),
            project_store: app_data.project_store.clone(),
        }
    }
}

/// API tags for project management endpoints
#[derive(Tags)]
enum ProjectTags {
    /// Project record management
    Projects,
}

#[OpenApi]
impl ProjectsApi {
    /// Create a project for an existing client
    ///
    /// The `client` field carries a username and is resolved to the owning
    /// client id; an unknown username creates nothing and returns 404.
    #[oai(path = "/add-project", method = "post", tag = "ProjectTags::Projects")]
    async fn add_project(&self, body: Json<AddProjectRequest>) -> Result<Json<SuccessResponse>, ApiError> {
        let AddProjectRequest {
            name,
            current_stage,
            progress,
            client,
        } = body.0;

        if name.trim().is_empty() {
            return Err(ApiError::validation("name must not be empty"));
        }
        if current_stage.trim().is_empty() {
            return Err(ApiError::validation("currentStage must not be empty"));
        }

        let owner = self
            .credential_store
            .find_by_username(&client)
            .await?
            .ok_or_else(|| ApiError::not_found("Client not found"))?;

        let created = self
            .project_store
            .add_project(name, current_stage, progress.unwrap_or(0), owner.id.clone())
            .await?;

        // Second, independent write for the client side of the link. A
        // concurrent client deletion can still leave the project dangling.
        self.credential_store
            .set_project_reference(&owner.id, &created.id)
            .await?;

        Ok(Json(SuccessResponse::ok()))
    }

    /// Partially update a project
    ///
    /// Omitted fields keep their stored values. An id that matches no
    /// project is reported as success.
    #[oai(path = "/update-project/:id", method = "put", tag = "ProjectTags::Projects")]
    async fn update_project(
        &self,
        id: Path<String>,
        body: Json<UpdateProjectRequest>,
    ) -> Result<Json<SuccessResponse>, ApiError> {
        let UpdateProjectRequest {
            name,
            current_stage,
            progress,
        } = body.0;

        self.project_store
            .update_project(
                &id.0,
                ProjectUpdate {
                    name,
                    current_stage,
                    progress,
                },
            )
            .await?;

        Ok(Json(SuccessResponse::ok()))
    }

    /// Attach uploaded image URLs to a project's gallery
    #[oai(path = "/attach-images/:id", method = "put", tag = "ProjectTags::Projects")]
    async fn attach_images(
        &self,
        id: Path<String>,
        body: Json<AttachImagesRequest>,
    ) -> Result<Json<SuccessResponse>, ApiError> {
        self.project_store.attach_images(&id.0, body.0.urls).await?;
        Ok(Json(SuccessResponse::ok()))
    }

    /// Delete a project by id
    ///
    /// Any client still referencing the project keeps its reference.
    #[oai(path = "/delete-project/:id", method = "delete", tag = "ProjectTags::Projects")]
    async fn delete_project(&self, id: Path<String>) -> Result<Json<SuccessResponse>, ApiError> {
        self.project_store.delete_project(&id.0).await?;
        Ok(Json(SuccessResponse::ok()))
    }
}
