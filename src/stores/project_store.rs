use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::types::db::project::{self, Entity as Project};

/// ProjectStore manages project records in the database.
///
/// The `client_id` field is a soft reference; this store never checks it
/// against the clients table. Resolving a username to a client id happens in
/// the API layer before a project is created.
pub struct ProjectStore {
    db: DatabaseConnection,
}

/// Partial update for a project; `None` fields keep their stored values
#[derive(Debug, Default)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub current_stage: Option<String>,
    pub progress: Option<i32>,
}

impl ProjectStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a project owned by the given client id
    ///
    /// `last_updated` is set to creation time and the gallery starts empty.
    pub async fn add_project(
        &self,
        name: String,
        current_stage: String,
        progress: i32,
        client_id: String,
    ) -> Result<project::Model, ApiError> {
        let new_project = project::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name),
            current_stage: Set(current_stage),
            progress: Set(progress),
            last_updated: Set(Utc::now().timestamp()),
            images: Set("[]".to_string()),
            client_id: Set(client_id),
        };

        new_project.insert(&self.db).await.map_err(|e| {
            tracing::error!("Failed to insert project: {}", e);
            ApiError::internal()
        })
    }

    /// Look up a project by id
    pub async fn find_by_id(&self, id: &str) -> Result<Option<project::Model>, ApiError> {
        Project::find_by_id(id).one(&self.db).await.map_err(|e| {
            tracing::error!("Project lookup failed: {}", e);
            ApiError::internal()
        })
    }

    /// Partially update a project by id
    ///
    /// Only supplied fields change; `last_updated` is bumped whenever a row
    /// matches. An id that matches nothing is reported as success, matching
    /// the find-and-update semantics the callers rely on.
    pub async fn update_project(&self, id: &str, update: ProjectUpdate) -> Result<(), ApiError> {
        let Some(existing) = self.find_by_id(id).await? else {
            tracing::debug!(id, "update matched no project");
            return Ok(());
        };

        let mut active: project::ActiveModel = existing.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(stage) = update.current_stage {
            active.current_stage = Set(stage);
        }
        if let Some(progress) = update.progress {
            active.progress = Set(progress);
        }
        active.last_updated = Set(Utc::now().timestamp());

        active.update(&self.db).await.map_err(|e| {
            tracing::error!("Failed to update project {}: {}", id, e);
            ApiError::internal()
        })?;

        Ok(())
    }

    /// Append image URLs to a project's gallery
    ///
    /// URLs are stored in upload order after whatever is already attached.
    /// An id that matches nothing is reported as success, consistent with
    /// `update_project`.
    pub async fn attach_images(&self, id: &str, urls: Vec<String>) -> Result<(), ApiError> {
        let Some(existing) = self.find_by_id(id).await? else {
            tracing::debug!(id, "attach_images matched no project");
            return Ok(());
        };

        let mut gallery = decode_images(&existing.images);
        gallery.extend(urls);
        let encoded = serde_json::to_string(&gallery).map_err(|e| {
            tracing::error!("Failed to encode image list: {}", e);
            ApiError::internal()
        })?;

        let mut active: project::ActiveModel = existing.into();
        active.images = Set(encoded);
        active.last_updated = Set(Utc::now().timestamp());

        active.update(&self.db).await.map_err(|e| {
            tracing::error!("Failed to attach images to project {}: {}", id, e);
            ApiError::internal()
        })?;

        Ok(())
    }

    /// Delete a project by id
    ///
    /// Any Client.project_id back-reference is left untouched; deleting an
    /// unknown id is reported as success.
    pub async fn delete_project(&self, id: &str) -> Result<(), ApiError> {
        Project::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            tracing::error!("Failed to delete project {}: {}", id, e);
            ApiError::internal()
        })?;
        Ok(())
    }
}

/// Decode the stored JSON image list, tolerating legacy/garbled rows
pub fn decode_images(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("db", &"<connection>")
            .finish()
    }
}
