//! Tenant backend URL construction

use tenantgate_shared::{DeploymentId, DomainConfig, RoutingError, TenantUrl};

use super::{domain::resolve_domain, protocol::select_scheme};

/// Build the typed address of a deployment under `domain`
///
/// The scheme is chosen from the domain, so a loopback domain yields a plain
/// HTTP URL. `deployment_id` is not validated here.
pub fn tenant_url(deployment_id: &str, domain: &str) -> TenantUrl {
    TenantUrl {
        scheme: select_scheme(domain),
        host: format!("{}.{}", deployment_id, domain),
    }
}

/// Build `scheme://{deployment_id}.{domain}`
pub fn build_tenant_url(deployment_id: &str, domain: &str) -> String {
    tenant_url(deployment_id, domain).to_string()
}

/// Resolve the configured domain and build the deployment's URL under it
pub fn tenant_url_for(
    config: &DomainConfig,
    deployment_id: &DeploymentId,
) -> Result<TenantUrl, RoutingError> {
    let domain = resolve_domain(config)?;
    Ok(tenant_url(deployment_id.as_str(), &domain))
}
