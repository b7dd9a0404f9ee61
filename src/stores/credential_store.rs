use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::services::password;
use crate::types::db::client::{self, Entity as Client};
use crate::types::db::project::{self, Entity as Project};

/// CredentialStore manages client accounts in the database.
///
/// Projects are owned by the ProjectStore; this store only carries the
/// `project_id` soft reference and expands it when listing.
pub struct CredentialStore {
    db: DatabaseConnection,
}

impl CredentialStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Add a new client account
    ///
    /// Hashes the password before anything touches the database. Duplicate
    /// usernames are rejected both by a pre-check and by the unique
    /// constraint on the column.
    ///
    /// # Returns
    /// * `Ok(Model)` - The created client row
    /// * `Err(ApiError)` - DuplicateUsername, or Internal on store failure
    pub async fn add_client(
        &self,
        username: String,
        plaintext_password: &str,
        role: String,
        project_id: Option<String>,
    ) -> Result<client::Model, ApiError> {
        let existing = Client::find()
            .filter(client::Column::Username.eq(&username))
            .one(&self.db)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check username uniqueness: {}", e);
                ApiError::internal()
            })?;

        if existing.is_some() {
            return Err(ApiError::duplicate_username());
        }

        let password_hash = password::hash_password(plaintext_password).map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            ApiError::internal()
        })?;

        let new_client = client::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            username: Set(username),
            password_hash: Set(password_hash),
            role: Set(role),
            project_id: Set(project_id),
            created_at: Set(Utc::now().timestamp()),
        };

        let created = new_client.insert(&self.db).await.map_err(|e| {
            // Lost the pre-check race; the unique constraint is authoritative
            if e.to_string().contains("UNIQUE") {
                ApiError::duplicate_username()
            } else {
                tracing::error!("Failed to insert client: {}", e);
                ApiError::internal()
            }
        })?;

        Ok(created)
    }

    /// Verify credentials and return the matching client row
    ///
    /// Unknown usernames and wrong passwords both come back as
    /// `InvalidCredentials`; the distinction only reaches the server log.
    pub async fn verify_credentials(
        &self,
        username: &str,
        plaintext_password: &str,
    ) -> Result<client::Model, ApiError> {
        let found = Client::find()
            .filter(client::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| {
                tracing::error!("Credential lookup failed: {}", e);
                ApiError::internal()
            })?;

        let Some(record) = found else {
            tracing::warn!(username, "login rejected: unknown username");
            return Err(ApiError::invalid_credentials());
        };

        if !password::verify_password(plaintext_password, &record.password_hash) {
            tracing::warn!(username, "login rejected: wrong password");
            return Err(ApiError::invalid_credentials());
        }

        Ok(record)
    }

    /// Look up a client by exact username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<client::Model>, ApiError> {
        Client::find()
            .filter(client::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| {
                tracing::error!("Client lookup failed: {}", e);
                ApiError::internal()
            })
    }

    /// List all clients with their `project_id` reference expanded
    ///
    /// The populate join is two queries: one for the clients, one batched
    /// fetch of every referenced project. Dangling references expand to None.
    pub async fn list_with_projects(
        &self,
    ) -> Result<Vec<(client::Model, Option<project::Model>)>, ApiError> {
        let clients = Client::find().all(&self.db).await.map_err(|e| {
            tracing::error!("Failed to list clients: {}", e);
            ApiError::internal()
        })?;

        let referenced: Vec<String> = clients
            .iter()
            .filter_map(|c| c.project_id.clone())
            .collect();

        let mut projects_by_id: HashMap<String, project::Model> = HashMap::new();
        if !referenced.is_empty() {
            let projects = Project::find()
                .filter(project::Column::Id.is_in(referenced))
                .all(&self.db)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to expand project references: {}", e);
                    ApiError::internal()
                })?;
            for p in projects {
                projects_by_id.insert(p.id.clone(), p);
            }
        }

        Ok(clients
            .into_iter()
            .map(|c| {
                let expanded = c
                    .project_id
                    .as_ref()
                    .and_then(|id| projects_by_id.get(id).cloned());
                (c, expanded)
            })
            .collect())
    }

    /// Point a client's `project_id` at the given project
    ///
    /// This is the client side of the bidirectional link; it is a separate
    /// write from project creation and no transaction spans the two tables.
    pub async fn set_project_reference(
        &self,
        client_id: &str,
        project_id: &str,
    ) -> Result<(), ApiError> {
        let Some(existing) = Client::find_by_id(client_id).one(&self.db).await.map_err(|e| {
            tracing::error!("Client lookup failed: {}", e);
            ApiError::internal()
        })?
        else {
            // The owner vanished between the two writes; the project keeps
            // its dangling reference.
            tracing::warn!(client_id, "client disappeared before back-reference write");
            return Ok(());
        };

        let mut active: client::ActiveModel = existing.into();
        active.project_id = Set(Some(project_id.to_string()));
        active.update(&self.db).await.map_err(|e| {
            tracing::error!("Failed to set project reference: {}", e);
            ApiError::internal()
        })?;

        Ok(())
    }

    /// Delete a client by id
    ///
    /// Projects referencing the client are left untouched; deleting an
    /// unknown id is reported as success.
    pub async fn delete_client(&self, id: &str) -> Result<(), ApiError> {
        Client::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            tracing::error!("Failed to delete client {}: {}", id, e);
            ApiError::internal()
        })?;
        Ok(())
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("db", &"<connection>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_store() -> CredentialStore {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        CredentialStore::new(db)
    }

    #[tokio::test]
    async fn add_client_stores_a_hash_not_the_password() {
        let store = setup_store().await;

        let created = store
            .add_client("alice".to_string(), "hunter2", "client".to_string(), None)
            .await
            .expect("add_client should succeed");

        assert_ne!(created.password_hash, "hunter2");
        assert!(created.password_hash.starts_with("$argon2"));
        assert_eq!(created.role, "client");
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let store = setup_store().await;

        store
            .add_client("alice".to_string(), "pw-one", "client".to_string(), None)
            .await
            .expect("first add should succeed");

        let err = store
            .add_client("alice".to_string(), "pw-two", "client".to_string(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::DuplicateUsername(_)));
    }

    #[tokio::test]
    async fn verify_credentials_accepts_the_right_password() {
        let store = setup_store().await;

        let created = store
            .add_client("alice".to_string(), "hunter2", "client".to_string(), None)
            .await
            .expect("add_client should succeed");

        let verified = store
            .verify_credentials("alice", "hunter2")
            .await
            .expect("verification should succeed");

        assert_eq!(verified.id, created.id);
    }

    #[tokio::test]
    async fn unknown_user_and_wrong_password_return_the_same_error() {
        let store = setup_store().await;

        store
            .add_client("alice".to_string(), "hunter2", "client".to_string(), None)
            .await
            .expect("add_client should succeed");

        let wrong_password = store
            .verify_credentials("alice", "not-hunter2")
            .await
            .unwrap_err();
        let unknown_user = store.verify_credentials("bob", "hunter2").await.unwrap_err();

        assert!(matches!(wrong_password, ApiError::InvalidCredentials(_)));
        assert!(matches!(unknown_user, ApiError::InvalidCredentials(_)));
        assert_eq!(wrong_password.message(), unknown_user.message());
    }

    #[tokio::test]
    async fn list_appears_exactly_once_without_a_project() {
        let store = setup_store().await;

        store
            .add_client("alice".to_string(), "hunter2", "client".to_string(), None)
            .await
            .expect("add_client should succeed");

        let listed = store
            .list_with_projects()
            .await
            .expect("listing should succeed");

        let alices: Vec<_> = listed.iter().filter(|(c, _)| c.username == "alice").collect();
        assert_eq!(alices.len(), 1);
        assert!(alices[0].1.is_none());
    }

    #[tokio::test]
    async fn dangling_project_reference_expands_to_none() {
        let store = setup_store().await;

        store
            .add_client(
                "alice".to_string(),
                "hunter2",
                "client".to_string(),
                Some("no-such-project".to_string()),
            )
            .await
            .expect("add_client should succeed");

        let listed = store
            .list_with_projects()
            .await
            .expect("listing should succeed");

        let (_, expanded) = listed
            .iter()
            .find(|(c, _)| c.username == "alice")
            .expect("alice should be listed");
        assert!(expanded.is_none());
    }

    #[tokio::test]
    async fn delete_client_is_idempotent() {
        let store = setup_store().await;

        let created = store
            .add_client("alice".to_string(), "hunter2", "client".to_string(), None)
            .await
            .expect("add_client should succeed");

        store
            .delete_client(&created.id)
            .await
            .expect("delete should succeed");
        store
            .delete_client(&created.id)
            .await
            .expect("repeat delete should also succeed");

        let listed = store
            .list_with_projects()
            .await
            .expect("listing should succeed");
        assert!(listed.iter().all(|(c, _)| c.username != "alice"));
    }
}
