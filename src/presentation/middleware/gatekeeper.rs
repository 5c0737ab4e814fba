use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;

use crate::domain::{GateDecision, decide};
use crate::infrastructure::GatekeeperConfig;

/// Request gate applied ahead of every handler.
///
/// Checks only that the session cookie is present; the token value is
/// validated deeper in the request path. Redirects never carry a body of
/// their own beyond the `Location` header.
pub async fn gatekeeper(
    State(config): State<Arc<GatekeeperConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let session_present = has_cookie(request.headers(), &config.session_cookie);

    match decide(&path, session_present) {
        GateDecision::Allow => next.run(request).await,
        GateDecision::RedirectToLogin { return_to } => {
            tracing::debug!(path = %return_to, "unauthenticated request, redirecting to login");
            let location = format!(
                "{}?{}={}",
                config.login_path,
                config.redirect_param,
                urlencoding::encode(&return_to)
            );
            Redirect::temporary(&location).into_response()
        }
        GateDecision::RedirectToDashboard => {
            tracing::debug!(path = %path, "authenticated request to auth page, redirecting");
            Redirect::temporary(&config.dashboard_path).into_response()
        }
    }
}

/// Presence check for a named cookie across all Cookie headers.
fn has_cookie(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .any(|cookie| {
            cookie
                .trim_start()
                .strip_prefix(name)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
}
