//! WebSocket event types and serialization
//!
//! Defines all client-to-server and server-to-client event types
//! with type-safe serde serialization.

use serde::{Deserialize, Serialize};
use tenantgate_shared::DeploymentId;
use uuid::Uuid;

// =============================================================================
// Client-to-Server Events
// =============================================================================

/// Events sent from client to server
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Heartbeat ping to keep connection alive
    Ping,
}

// =============================================================================
// Server-to-Client Events
// =============================================================================

/// Events sent from server to client
#[derive(Debug, Serialize, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Connection established
    Connected {
        session_id: Uuid,
        deployment_id: DeploymentId,
        /// Address of the tenant backend this connection belongs to
        tenant_url: String,
    },

    /// Heartbeat response
    Pong,

    /// Error message
    Error { message: String },
}
