//! Transport scheme selection for tenant hosts

use tenantgate_shared::Scheme;

/// Host prefixes that are served over plain HTTP
pub const LOOPBACK_PREFIXES: &[&str] = &["localhost", "127.0.0.1", "0.0.0.0", "::1"];

/// Pick `http` for loopback hosts and `https` for everything else
///
/// Matching is a case-sensitive prefix test on the raw host (port included).
/// No DNS lookup is made.
pub fn select_scheme(host: &str) -> Scheme {
    if LOOPBACK_PREFIXES
        .iter()
        .any(|prefix| host.starts_with(prefix))
    {
        Scheme::Http
    } else {
        Scheme::Https
    }
}
