use std::sync::Arc;

use poem::session::Session;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::services::auth_service::{SESSION_CLIENT_ID, SESSION_ROLE, SESSION_USERNAME};
use crate::services::AuthService;
use crate::types::dto::auth::{LoginRequest, LoginResponse};
use crate::types::dto::common::SuccessResponse;

/// Authentication API endpoints
pub struct AuthApi {
    auth_service: AuthService,
}

impl AuthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            auth_service: AuthService::new(app_data.credential_store.clone()),
        }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi]
impl AuthApi {
    /// Login with username and password
    ///
    /// On success the session is established server-side and the response
    /// carries the dashboard to navigate to, chosen by the account's role.
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(
        &self,
        session: &Session,
        body: Json<LoginRequest>,
    ) -> Result<Json<LoginResponse>, ApiError> {
        let outcome = self
            .auth_service
            .login(&body.username, &body.password)
            .await?;

        session.set(SESSION_CLIENT_ID, outcome.client_id);
        session.set(SESSION_USERNAME, outcome.username);
        session.set(SESSION_ROLE, outcome.role);

        Ok(Json(LoginResponse {
            redirect_url: outcome.redirect_url,
        }))
    }

    /// Tear down the active session
    #[oai(path = "/logout", method = "post", tag = "AuthTags::Authentication")]
    async fn logout(&self, session: &Session) -> Result<Json<SuccessResponse>, ApiError> {
        if session.get::<String>(SESSION_CLIENT_ID).is_none() {
            return Err(ApiError::unauthorized());
        }
        session.purge();
        Ok(Json(SuccessResponse::ok()))
    }
}
