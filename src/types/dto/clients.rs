use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::{client, project};
use crate::types::dto::projects::ProjectRecord;

/// Request model for creating a client account
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AddClientRequest {
    /// Username for the new client (unique)
    pub username: String,

    /// Optional id of an existing project to link to the account
    pub project: Option<String>,

    /// Plaintext password, hashed before storage
    pub password: String,
}

/// Client record as returned by the listing endpoint.
///
/// The password hash is deliberately absent from this shape.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Store-assigned client id
    pub id: String,

    /// Unique username
    pub username: String,

    /// Role of the account ("admin" or "client")
    pub role: String,

    /// Linked project, expanded to the full record when the reference
    /// resolves; null when unset or dangling
    pub project: Option<ProjectRecord>,
}

impl ClientRecord {
    /// Build the response shape from a client row and its expanded project
    pub fn from_models(client: client::Model, project: Option<project::Model>) -> Self {
        Self {
            id: client.id,
            username: client.username,
            role: client.role,
            project: project.map(ProjectRecord::from),
        }
    }
}
