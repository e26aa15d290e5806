//! Tenant backend addressing
//!
//! Turns a deployment ID plus the platform's domain settings into the URL of
//! that tenant's backend:
//! - Remote domains: dep-123.example.com -> https://dep-123.example.com
//! - Loopback domains: dep-123.localhost -> http://dep-123.localhost
//!
//! Also arbitrates between a tenant's preview and tunnel addresses.

mod address;
mod domain;
mod protocol;
mod tenant_url;

pub use address::{select_address, SelectAddress};
pub use domain::{resolve_domain, strip_scheme};
pub use protocol::{select_scheme, LOOPBACK_PREFIXES};
pub use tenant_url::{build_tenant_url, tenant_url, tenant_url_for};
