//! Tenantgate API Library
//!
//! Origin authorization for upgrade connections and tenant backend
//! addressing, plus the HTTP surface that exposes them.

pub mod config;
pub mod error;
pub mod origin;
pub mod routes;
pub mod routing;
pub mod security;
pub mod state;
pub mod websocket;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
