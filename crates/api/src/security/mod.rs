//! Response hardening for authorized upgrade connections

mod headers;

pub use headers::{apply_security_headers, security_headers, SECURITY_HEADERS};
