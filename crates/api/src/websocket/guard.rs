//! Origin guard for upgrade requests
//!
//! Runs the origin authorizer before the WebSocket handler sees the request.
//! Rejected attempts get a 403; authorized ones get the security headers on
//! the upgrade response.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, Uri},
    middleware::Next,
    response::Response,
};
use tenantgate_shared::RequestContext;

use crate::error::{ApiError, ApiResult};
use crate::origin::{authorize, ConnectionAttempt};
use crate::security::apply_security_headers;
use crate::state::AppState;

/// Reconstruct the URL the client requested
///
/// Origin-form request targets carry only the path, so scheme and host come
/// from `X-Forwarded-Proto` (default `http`) and `Host`. Without a `Host`
/// header the bare path is returned, which cannot yield an origin.
pub fn request_url(headers: &HeaderMap, uri: &Uri) -> String {
    if uri.scheme().is_some() {
        return uri.to_string();
    }

    let path = uri.path_and_query().map(|p| p.as_str()).unwrap_or("/");

    match header_str(headers, header::HOST.as_str()) {
        Some(host) => {
            let scheme = header_str(headers, "x-forwarded-proto")
                .map(|p| p.split(',').next().unwrap_or(p).trim())
                .filter(|p| !p.is_empty())
                .unwrap_or("http");
            format!("{}://{}{}", scheme, host, path)
        }
        None => path.to_string(),
    }
}

/// Request metadata made available to predicate policies
pub fn connection_context(headers: &HeaderMap, uri: &Uri) -> RequestContext {
    RequestContext {
        host: header_str(headers, header::HOST.as_str()).map(String::from),
        path: uri.path().to_string(),
    }
}

/// Middleware rejecting upgrade attempts from origins the policy does not allow
pub async fn require_allowed_origin(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> ApiResult<Response> {
    let headers = request.headers();

    // An empty Origin is treated the same as a missing one
    let origin = match headers.get(header::ORIGIN) {
        Some(value) => match value.to_str() {
            Ok("") => None,
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!(origin = "invalid", "WebSocket connection rejected: unreadable Origin header");
                return Err(ApiError::OriginNotAllowed);
            }
        },
        None => None,
    };

    let url = request_url(headers, request.uri());
    let ctx = connection_context(headers, request.uri());
    let attempt = ConnectionAttempt {
        origin,
        request_url: &url,
    };

    if !authorize(attempt, &state.policy, &ctx) {
        return Err(ApiError::OriginNotAllowed);
    }

    let mut response = next.run(request).await;
    apply_security_headers(response.headers_mut());
    Ok(response)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
