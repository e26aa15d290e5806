//! Application configuration

use std::env;
use std::net::SocketAddr;

use tenantgate_shared::{CorsPolicy, DomainConfig};

use crate::origin::{domain_origin, static_policy, tenant_policy};
use crate::routing::resolve_domain;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,

    // Tenant routing
    pub domain: DomainConfig,

    // Upgrade origin policy
    pub allowed_origins: Vec<String>,
    pub allow_tenant_origins: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Server
            bind_address: {
                let addr =
                    env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
                if addr.parse::<SocketAddr>().is_err() {
                    return Err(ConfigError::Invalid(
                        "BIND_ADDRESS",
                        "expected host:port socket address",
                    ));
                }
                addr
            },

            // Tenant routing
            domain: DomainConfig {
                preview_domain_override: env::var("CUSTOM_PREVIEW_DOMAIN").ok(),
                base_domain: env::var("CUSTOM_DOMAIN").ok(),
            },

            // Upgrade origin policy
            allowed_origins: match env::var("ALLOWED_ORIGINS") {
                Ok(raw) => parse_origins(&raw)?,
                Err(_) => Vec::new(),
            },
            allow_tenant_origins: env::var("ALLOW_TENANT_ORIGINS")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
        })
    }

    /// Origin policy for upgrade connections
    ///
    /// Without explicit origins, only the platform domain's own origin is
    /// allowed. With neither origins nor a domain, nothing is.
    pub fn cors_policy(&self) -> CorsPolicy {
        let domain = resolve_domain(&self.domain).ok();

        if self.allow_tenant_origins {
            return tenant_policy(self.allowed_origins.clone(), domain);
        }

        if !self.allowed_origins.is_empty() {
            return static_policy(self.allowed_origins.clone());
        }

        match domain {
            Some(domain) => CorsPolicy::Exact(domain_origin(&domain)),
            None => {
                tracing::warn!(
                    "No ALLOWED_ORIGINS or domain configured; all upgrade connections will be rejected"
                );
                CorsPolicy::AllowList(Vec::new())
            }
        }
    }
}

/// Split a comma-separated origin list, dropping blanks and duplicates
fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    let mut origins: Vec<String> = Vec::new();

    for candidate in raw.split(',') {
        let origin = candidate.trim();
        if origin.is_empty() {
            continue;
        }
        if !origin.contains("://") {
            return Err(ConfigError::Invalid(
                "ALLOWED_ORIGINS",
                "each origin must include a scheme, e.g. https://app.example.com",
            ));
        }
        if !origins.iter().any(|o| o == origin) {
            origins.push(origin.to_string());
        }
    }

    Ok(origins)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}
