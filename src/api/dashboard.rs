use std::sync::Arc;

use poem::http::StatusCode;
use poem::session::Session;
use poem::web::{Data, Html, Redirect};
use poem::{handler, IntoResponse, Response};

use crate::api::gate::unauthorized_response;
use crate::app_data::AppData;
use crate::services::auth_service::{CLIENT_DASHBOARD, SESSION_CLIENT_ID, SESSION_ROLE};
use crate::types::db::client::ROLE_ADMIN;

/// Admin dashboard page, session-gated and role-checked.
///
/// Authenticated non-admins are bounced to the client dashboard instead of
/// receiving an error.
#[handler]
pub async fn dashboard_admin(session: &Session, app_data: Data<&Arc<AppData>>) -> Response {
    if session.get::<String>(SESSION_CLIENT_ID).is_none() {
        return unauthorized_response();
    }

    let role = session.get::<String>(SESSION_ROLE).unwrap_or_default();
    if role != ROLE_ADMIN {
        return Redirect::see_other(CLIENT_DASHBOARD).into_response();
    }

    serve_page(&app_data, "dashboard_admin.html").await
}

/// Client dashboard page, session-gated
#[handler]
pub async fn dashboard_client(session: &Session, app_data: Data<&Arc<AppData>>) -> Response {
    if session.get::<String>(SESSION_CLIENT_ID).is_none() {
        return unauthorized_response();
    }

    serve_page(&app_data, "dashboard_client.html").await
}

async fn serve_page(app_data: &AppData, file: &str) -> Response {
    let path = app_data.settings.public_dir.join(file);
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => Html(content).into_response(),
        Err(e) => {
            tracing::error!("Failed to read dashboard page {:?}: {}", path, e);
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body("Internal server error")
        }
    }
}
