//! Shared application state

use std::sync::Arc;

use tenantgate_shared::CorsPolicy;

use crate::config::Config;

/// State handed to every handler
///
/// Both fields are read-only snapshots taken at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub policy: Arc<CorsPolicy>,
}

impl AppState {
    /// Build state from configuration, deriving the origin policy from it
    pub fn new(config: Config) -> Self {
        let policy = config.cors_policy();
        Self::with_policy(config, policy)
    }

    /// Build state with an explicitly supplied origin policy
    pub fn with_policy(config: Config, policy: CorsPolicy) -> Self {
        tracing::info!(policy = ?policy, "Upgrade origin policy loaded");
        Self {
            config: Arc::new(config),
            policy: Arc::new(policy),
        }
    }
}
