//! WebSocket handler for Axum
//!
//! Upgrades authorized connections and tells the client which tenant backend
//! the connection belongs to. Relaying traffic to that backend is handled
//! elsewhere.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        Path, State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{stream::StreamExt, Sink, SinkExt};
use serde::Serialize;
use tenantgate_shared::DeploymentId;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::routing::tenant_url_for;
use crate::state::AppState;

use super::events::{ClientEvent, ServerEvent};

/// WebSocket handler - upgrades HTTP connection to WebSocket
///
/// The origin has already been checked by the guard middleware.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Path(deployment_id): Path<DeploymentId>,
) -> ApiResult<Response> {
    let tenant_url = tenant_url_for(&state.config.domain, &deployment_id)?.to_string();

    tracing::info!(
        deployment_id = %deployment_id,
        tenant_url = %tenant_url,
        "WebSocket connection upgrade requested"
    );

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, deployment_id, tenant_url)))
}

/// Handle individual WebSocket connection
async fn handle_socket(socket: WebSocket, deployment_id: DeploymentId, tenant_url: String) {
    let (mut sender, mut receiver) = socket.split();
    let session_id = Uuid::new_v4();

    let connected = ServerEvent::Connected {
        session_id,
        deployment_id: deployment_id.clone(),
        tenant_url,
    };
    if send_event(&mut sender, &connected).await.is_err() {
        tracing::info!(session_id = %session_id, "WebSocket closed before acknowledgment");
        return;
    }

    while let Some(msg) = receiver.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(session_id = %session_id, error = ?e, "WebSocket receive error");
                break;
            }
        };

        match msg {
            Message::Text(text) => {
                let reply = match serde_json::from_str::<ClientEvent>(&text) {
                    Ok(ClientEvent::Ping) => ServerEvent::Pong,
                    Err(e) => {
                        tracing::warn!(
                            error = ?e,
                            message = %text,
                            "Failed to parse client event"
                        );
                        ServerEvent::Error {
                            message: "Invalid event format".to_string(),
                        }
                    }
                };
                if send_event(&mut sender, &reply).await.is_err() {
                    break; // Connection closed
                }
            }
            Message::Close(_) => {
                tracing::info!(session_id = %session_id, "WebSocket close frame received");
                break;
            }
            Message::Ping(_) | Message::Pong(_) => {
                // Axum handles ping/pong automatically
            }
            _ => {} // Ignore binary messages
        }
    }

    tracing::info!(
        session_id = %session_id,
        deployment_id = %deployment_id,
        "WebSocket connection closing"
    );
}

/// Serialize and send one event
///
/// Fails if the event cannot be serialized or the connection is gone.
async fn send_event<S, E>(sender: &mut S, event: &E) -> Result<(), ()>
where
    S: Sink<Message> + Unpin,
    E: Serialize,
{
    let json = match serde_json::to_string(event) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(error = ?e, "Failed to serialize WebSocket event");
            return Err(());
        }
    };

    sender.send(Message::Text(json)).await.map_err(|_| ())
}
