use poem::http::StatusCode;
use poem::session::Session;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response};

use crate::services::auth_service::SESSION_CLIENT_ID;

/// Paths under /api that must stay reachable without a session
const EXEMPT_PATHS: &[&str] = &["/login", "/health"];

/// Single chokepoint for the administrative record endpoints.
///
/// The deployed surface leaves these endpoints open, so the gate defaults to
/// pass-through; switching to `RecordApiGate::enforcing()` at the one place
/// it is attached closes the gap for every record endpoint at once.
#[derive(Default)]
pub struct RecordApiGate {
    enforce_sessions: bool,
}

impl RecordApiGate {
    /// Gate that rejects sessionless requests to non-exempt paths
    pub fn enforcing() -> Self {
        Self {
            enforce_sessions: true,
        }
    }
}

impl<E: Endpoint> Middleware<E> for RecordApiGate {
    type Output = RecordApiGateEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RecordApiGateEndpoint {
            inner: ep,
            enforce_sessions: self.enforce_sessions,
        }
    }
}

pub struct RecordApiGateEndpoint<E> {
    inner: E,
    enforce_sessions: bool,
}

impl<E: Endpoint> Endpoint for RecordApiGateEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> poem::Result<Self::Output> {
        if self.enforce_sessions && !EXEMPT_PATHS.contains(&req.uri().path()) {
            let authenticated = req
                .extensions()
                .get::<Session>()
                .map(|s| s.get::<String>(SESSION_CLIENT_ID).is_some())
                .unwrap_or(false);

            if !authenticated {
                return Ok(unauthorized_response());
            }
        }

        self.inner.call(req).await.map(IntoResponse::into_response)
    }
}

/// JSON 401 matching the shape of `ApiError::unauthorized`
pub fn unauthorized_response() -> Response {
    let body = serde_json::json!({
        "error": "unauthorized",
        "message": "Access denied. Please log in.",
        "status_code": 401,
    });
    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .content_type("application/json")
        .body(body.to_string())
}
