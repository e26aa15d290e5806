//! Security Headers
//!
//! Fixed headers attached to a WebSocket upgrade response once its origin has
//! been authorized.

use axum::http::{HeaderMap, HeaderValue};

/// Header name/value pairs applied to authorized upgrade responses
pub const SECURITY_HEADERS: [(&str, &str); 3] = [
    // Prevent clickjacking attacks
    ("X-Frame-Options", "DENY"),
    // Prevent MIME type sniffing
    ("X-Content-Type-Options", "nosniff"),
    // Enable browser XSS filtering (legacy, but still useful)
    ("X-XSS-Protection", "1; mode=block"),
];

/// The security headers as a standalone map
pub fn security_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(SECURITY_HEADERS.len());
    apply_security_headers(&mut headers);
    headers
}

/// Merge the security headers into `headers`, replacing existing values
pub fn apply_security_headers(headers: &mut HeaderMap) {
    for (name, value) in SECURITY_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::IntoResponse};

    #[test]
    fn test_apply_security_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-frame-options", HeaderValue::from_static("SAMEORIGIN"));

        apply_security_headers(&mut headers);

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get("X-Frame-Options").unwrap(), "DENY");
        assert_eq!(headers.get("X-Content-Type-Options").unwrap(), "nosniff");
        assert_eq!(headers.get("X-XSS-Protection").unwrap(), "1; mode=block");
    }

    #[test]
    fn test_security_headers_map_is_constant() {
        let headers = security_headers();
        assert_eq!(headers.len(), SECURITY_HEADERS.len());
        assert_eq!(headers, security_headers());
    }

    #[test]
    fn test_security_headers_added_to_response() {
        let mut response = (StatusCode::SWITCHING_PROTOCOLS, "ok").into_response();
        apply_security_headers(response.headers_mut());

        assert_eq!(response.status(), StatusCode::SWITCHING_PROTOCOLS);
        assert_eq!(response.headers().get("X-Frame-Options").unwrap(), "DENY");
        assert_eq!(
            response.headers().get("X-Content-Type-Options").unwrap(),
            "nosniff"
        );
        assert_eq!(
            response.headers().get("X-XSS-Protection").unwrap(),
            "1; mode=block"
        );
    }
}
