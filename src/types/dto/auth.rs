use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Request model for login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username for authentication
    pub username: String,

    /// Password for authentication
    pub password: String,
}

/// Response model for a successful login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Dashboard the caller should navigate to, chosen by role
    #[oai(rename = "redirectURL")]
    #[serde(rename = "redirectURL")]
    pub redirect_url: String,
}
