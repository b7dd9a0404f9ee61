use std::sync::Arc;

use poem_openapi::param::Path;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::stores::CredentialStore;
use crate::types::db::client::ROLE_CLIENT;
use crate::types::dto::clients::{AddClientRequest, ClientRecord};
use crate::types::dto::common::SuccessResponse;

/// Client record management endpoints
pub struct ClientsApi {
    credential_store: Arc<CredentialStore>,
}

impl ClientsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            credential_store: app_data.credential_store.clone(),
        }
    }
}

/// API tags for client management endpoints
#[derive(Tags)]
enum ClientTags {
    /// Client record management
    Clients,
}

#[OpenApi]
impl ClientsApi {
    /// Create a client account
    ///
    /// The password is hashed before storage. Accounts created here always
    /// get the "client" role; the admin account is provisioned at startup.
    #[oai(path = "/add-client", method = "post", tag = "ClientTags::Clients")]
    async fn add_client(&self, body: Json<AddClientRequest>) -> Result<Json<SuccessResponse>, ApiError> {
        let AddClientRequest {
            username,
            project,
            password,
        } = body.0;

        if username.trim().is_empty() {
            return Err(ApiError::validation("username must not be empty"));
        }
        if password.is_empty() {
            return Err(ApiError::validation("password must not be empty"));
        }

        self.credential_store
            .add_client(username, &password, ROLE_CLIENT.to_string(), project)
            .await?;

        Ok(Json(SuccessResponse::ok()))
    }

    /// List all clients with their project reference expanded
    #[oai(path = "/clients", method = "get", tag = "ClientTags::Clients")]
    async fn clients(&self) -> Result<Json<Vec<ClientRecord>>, ApiError> {
        let rows = self.credential_store.list_with_projects().await?;

        Ok(Json(
            rows.into_iter()
                .map(|(client, project)| ClientRecord::from_models(client, project))
                .collect(),
        ))
    }

    /// Delete a client by id
    ///
    /// Projects referencing the client are left in place.
    #[oai(path = "/delete-client/:id", method = "delete", tag = "ClientTags::Clients")]
    async fn delete_client(&self, id: Path<String>) -> Result<Json<SuccessResponse>, ApiError> {
        self.credential_store.delete_client(&id.0).await?;
        Ok(Json(SuccessResponse::ok()))
    }
}
