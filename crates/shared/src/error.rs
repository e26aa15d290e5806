//! Error types for origin authorization and tenant routing

use thiserror::Error;

/// Reasons an upgrade attempt's origin was not authorized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OriginError {
    /// No Origin header was sent and the request URL could not be parsed
    /// into a fallback origin
    #[error("Malformed request URL: {0}")]
    MalformedRequestUrl(String),

    /// An origin was available but the policy did not allow it
    #[error("Origin rejected by policy: {0}")]
    PolicyRejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    #[error("No preview or base domain configured")]
    MissingDomainConfiguration,
}
