//! Building an origin policy from deployment settings

use tenantgate_shared::CorsPolicy;

use crate::routing::select_scheme;

/// Policy for a fixed list of origins
///
/// One origin becomes an exact match, several become an allow-list. An empty
/// list allows nothing.
pub fn static_policy(mut origins: Vec<String>) -> CorsPolicy {
    if origins.len() == 1 {
        CorsPolicy::Exact(origins.remove(0))
    } else {
        CorsPolicy::AllowList(origins)
    }
}

/// Origin a browser reports for pages served directly from `domain`
///
/// Browsers serialize hosts in lowercase, so the domain is lowercased too.
pub fn domain_origin(domain: &str) -> String {
    let domain = domain.to_ascii_lowercase();
    format!("{}://{}", select_scheme(&domain), domain)
}

/// Predicate policy admitting the listed origins plus the platform domain
/// and any of its subdomains (tenant previews)
///
/// The origin's scheme must be the one the platform serves `domain` with.
pub fn tenant_policy(origins: Vec<String>, domain: Option<String>) -> CorsPolicy {
    let domain = domain.map(|d| d.to_ascii_lowercase());
    CorsPolicy::predicate(move |origin, _ctx| {
        if origins.iter().any(|o| o == origin) {
            return Some(origin.to_string());
        }

        let domain = domain.as_deref()?;
        let authority = origin.strip_prefix(select_scheme(domain).as_str())?.strip_prefix("://")?;
        let is_tenant = authority == domain
            || authority
                .strip_suffix(domain)
                .is_some_and(|label| label.ends_with('.') && label.len() > 1);

        is_tenant.then(|| origin.to_string())
    })
}
