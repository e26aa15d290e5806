//! Fallback origin for upgrade requests without an Origin header
//!
//! Some browsers omit `Origin` on same-origin WebSocket upgrades. The request's
//! own scheme and host are used to synthesize the origin it would have sent.
//! The result goes through the same policy as an explicit header.

use tenantgate_shared::OriginError;
use url::Url;

/// Derive `{scheme}://{host[:port]}` from a request URL
///
/// A leading `ws` scheme token is rewritten to `http`, so `ws` becomes `http`
/// and `wss` becomes `https`. Default ports are omitted, matching how browsers
/// serialize origins.
pub fn infer_origin(request_url: &str) -> Result<String, OriginError> {
    let url = Url::parse(request_url)
        .map_err(|e| OriginError::MalformedRequestUrl(format!("{}: {}", request_url, e)))?;

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| OriginError::MalformedRequestUrl(format!("{}: missing host", request_url)))?;

    let scheme = http_family_scheme(url.scheme());

    Ok(match url.port() {
        Some(port) => format!("{}://{}:{}", scheme, host, port),
        None => format!("{}://{}", scheme, host),
    })
}

/// Swap a leading `ws` token for `http`, leaving other schemes untouched
fn http_family_scheme(scheme: &str) -> String {
    match scheme.strip_prefix("ws") {
        Some(rest) => format!("http{}", rest),
        None => scheme.to_string(),
    }
}
