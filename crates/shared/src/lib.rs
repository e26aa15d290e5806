//! Tenantgate Shared Types
//!
//! Policy, domain configuration and error types shared between the resolver
//! and the HTTP surface that feeds it.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
