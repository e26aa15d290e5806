//! Effective tenant-facing domain
//!
//! The preview override wins over the base domain when it is set to anything
//! but whitespace. A scheme accidentally left in either value is stripped.

use tenantgate_shared::{DomainConfig, RoutingError};

/// Resolve the domain tenant URLs are built under
pub fn resolve_domain(config: &DomainConfig) -> Result<String, RoutingError> {
    let configured = non_blank(config.preview_domain_override.as_deref())
        .or_else(|| non_blank(config.base_domain.as_deref()))
        .ok_or(RoutingError::MissingDomainConfiguration)?;

    let domain = strip_scheme(configured);
    if domain.is_empty() {
        return Err(RoutingError::MissingDomainConfiguration);
    }

    Ok(domain.to_string())
}

/// Remove a leading `http://` or `https://`, ignoring case
pub fn strip_scheme(domain: &str) -> &str {
    for prefix in ["https://", "http://"] {
        if let Some(head) = domain.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                return &domain[prefix.len()..];
            }
        }
    }
    domain
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
