//! WebSocket upgrade endpoint for tenant connections
//!
//! # Architecture
//!
//! - **Guard**: origin check that runs before the upgrade and hardens the
//!   upgrade response
//! - **Handler**: Axum WebSocket route handler
//! - **Events**: Type-safe event definitions for client/server communication

pub mod events;
pub mod guard;
pub mod handler;

pub use guard::{connection_context, request_url, require_allowed_origin};
pub use handler::ws_handler;
