//! Common types used across Tenantgate

use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// ID Wrappers
// =============================================================================

/// Deployment ID wrapper
///
/// Opaque tenant identifier used as the leftmost DNS label of a tenant URL.
/// Whatever assigns it is responsible for keeping it a legal label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentId(pub String);

impl DeploymentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DeploymentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DeploymentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Origin Policy
// =============================================================================

/// Request metadata passed to predicate policies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Host header of the incoming request, if any
    pub host: Option<String>,
    /// Request path
    pub path: String,
}

/// Predicate over an origin. Returns the origin it allows, or None.
pub type OriginPredicate = Arc<dyn Fn(&str, &RequestContext) -> Option<String> + Send + Sync>;

/// Allowed-origin policy for upgrade connections
#[derive(Clone)]
pub enum CorsPolicy {
    /// A single allowed origin
    Exact(String),
    /// Any of the listed origins (exact match, order irrelevant)
    AllowList(Vec<String>),
    /// Callback deciding per origin. Only an exact echo of the input counts.
    Predicate(OriginPredicate),
}

impl CorsPolicy {
    /// Wrap a closure as a predicate policy
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str, &RequestContext) -> Option<String> + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    /// Evaluate an origin against this policy
    pub fn allows(&self, origin: &str, ctx: &RequestContext) -> bool {
        match self {
            CorsPolicy::Exact(allowed) => origin == allowed,
            CorsPolicy::AllowList(allowed) => allowed.iter().any(|a| a == origin),
            CorsPolicy::Predicate(predicate) => predicate(origin, ctx).as_deref() == Some(origin),
        }
    }

    /// Short name of the policy shape, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            CorsPolicy::Exact(_) => "exact",
            CorsPolicy::AllowList(_) => "allow_list",
            CorsPolicy::Predicate(_) => "predicate",
        }
    }
}

impl std::fmt::Debug for CorsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorsPolicy::Exact(origin) => f.debug_tuple("Exact").field(origin).finish(),
            CorsPolicy::AllowList(origins) => f.debug_tuple("AllowList").field(origins).finish(),
            CorsPolicy::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

// =============================================================================
// Tenant Addressing
// =============================================================================

/// Layered domain settings used to address tenant backends
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Preferred domain for preview URLs (CUSTOM_PREVIEW_DOMAIN)
    pub preview_domain_override: Option<String>,
    /// Platform domain (CUSTOM_DOMAIN)
    pub base_domain: Option<String>,
}

/// Transport scheme for reaching a tenant backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully qualified address of a tenant backend
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantUrl {
    pub scheme: Scheme,
    /// `{deployment_id}.{domain}`
    pub host: String,
}

impl std::fmt::Display for TenantUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)
    }
}

/// Candidate display addresses for one tenant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCandidates {
    pub preview_url: Option<String>,
    pub tunnel_url: Option<String>,
}
