// API layer - HTTP endpoints and route assembly
pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod gate;
pub mod health;
pub mod projects;
pub mod uploads;

use std::sync::Arc;

use poem::session::{CookieConfig, MemoryStorage, ServerSession};
use poem::web::cookie::CookieKey;
use poem::{get, Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

pub use auth::AuthApi;
pub use clients::ClientsApi;
pub use gate::RecordApiGate;
pub use health::HealthApi;
pub use projects::ProjectsApi;
pub use uploads::UploadsApi;

use crate::app_data::AppData;

/// Compose the full application endpoint.
///
/// The OpenAPI service is nested under /api with the record gate as its
/// single authorization chokepoint; the dashboards are plain poem handlers.
/// Session state is process-local, so a restart invalidates every session.
pub fn build_app(app_data: Arc<AppData>) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (
            HealthApi,
            AuthApi::new(app_data.clone()),
            ClientsApi::new(app_data.clone()),
            ProjectsApi::new(app_data.clone()),
            UploadsApi::new(app_data.clone()),
        ),
        "Studio Portal API",
        "1.0.0",
    )
    .server("http://localhost:3000/api");
    let ui = api_service.swagger_ui();

    let session_key = CookieKey::derive_from(app_data.settings.session_secret.as_bytes());

    Route::new()
        .nest("/api", api_service.with(RecordApiGate::default()))
        .nest("/swagger", ui)
        .at("/dashboard_admin", get(dashboard::dashboard_admin))
        .at("/dashboard_client", get(dashboard::dashboard_client))
        .with(ServerSession::new(
            CookieConfig::signed(session_key),
            MemoryStorage::new(),
        ))
        .data(app_data)
}
