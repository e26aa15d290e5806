//! Origin checks for upgrade connections
//!
//! Decides whether the origin claimed by (or inferred for) a connection
//! attempt is allowed by the configured [`CorsPolicy`].
//!
//! [`CorsPolicy`]: tenantgate_shared::CorsPolicy

mod authorizer;
mod inference;
mod policy;

pub use authorizer::{authorize, evaluate, ConnectionAttempt};
pub use inference::infer_origin;
pub use policy::{domain_origin, static_policy, tenant_policy};
