//! WebSocket session handling for hub endpoints.
//!
//! # Responsibilities
//! - Announce pre-registered bindings when a session opens
//! - Accept lazy `attach` frames binding further anchors
//! - Track live sessions, removing entries on close
//!
//! # Design Decisions
//! - Session state (bound anchors) lives for the connection only; nothing
//!   crosses requests or sessions
//! - Close frames end the session loop; ping/pong is handled by the
//!   underlying protocol layer

use std::collections::BTreeMap;

use axum::extract::ws::{Message, WebSocket};
use dashmap::DashMap;
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::hub::options::{ComponentTypeId, HubOptions};

/// A live hub session.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    /// Name of the hub endpoint that accepted the session.
    pub hub: &'static str,
}

/// Concurrent registry of live sessions across all hub endpoints.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<Uuid, SessionInfo>,
}

impl SessionRegistry {
    pub fn open(&self, hub: &'static str) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, SessionInfo { hub });
        tracing::debug!(session_id = %id, hub = hub, "Hub session opened");
        id
    }

    pub fn close(&self, id: Uuid) {
        self.sessions.remove(&id);
        tracing::debug!(session_id = %id, "Hub session closed");
    }

    pub fn live_count(&self) -> usize {
        self.sessions.len()
    }
}

/// Frames sent by the server.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum ServerFrame {
    #[serde(rename_all = "camelCase")]
    ComponentAttached {
        anchor: String,
        component: ComponentTypeId,
        preregistered: bool,
    },
    Error { message: String },
}

/// Frames accepted from the client.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum ClientFrame {
    #[serde(rename_all = "camelCase")]
    Attach { anchor: String, component: String },
}

/// Drive one hub session to completion.
pub async fn run_session(
    mut socket: WebSocket,
    hub: &'static str,
    options: &HubOptions,
    registry: &SessionRegistry,
) {
    let session_id = registry.open(hub);

    // Pre-registered bindings are announced before anything else, so the
    // client observes them without asking.
    let mut bound: BTreeMap<String, ComponentTypeId> = BTreeMap::new();
    for (anchor, component) in options.bindings() {
        let frame = ServerFrame::ComponentAttached {
            anchor: anchor.to_string(),
            component: component.clone(),
            preregistered: true,
        };
        if send_frame(&mut socket, &frame).await.is_err() {
            registry.close(session_id);
            return;
        }
        bound.insert(anchor.to_string(), component.clone());
    }

    while let Some(message) = socket.next().await {
        let message = match message {
            Ok(m) => m,
            Err(error) => {
                tracing::debug!(session_id = %session_id, error = %error, "Session read failed");
                break;
            }
        };

        match message {
            Message::Text(text) => {
                let reply = handle_client_frame(text.as_str(), &mut bound);
                if send_frame(&mut socket, &reply).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            // Ping/pong and binary frames carry no hub semantics.
            _ => {}
        }
    }

    registry.close(session_id);
}

fn handle_client_frame(text: &str, bound: &mut BTreeMap<String, ComponentTypeId>) -> ServerFrame {
    let frame: ClientFrame = match serde_json::from_str(text) {
        Ok(frame) => frame,
        Err(error) => {
            return ServerFrame::Error {
                message: format!("malformed frame: {}", error),
            }
        }
    };

    match frame {
        ClientFrame::Attach { anchor, component } => {
            if bound.contains_key(&anchor) {
                return ServerFrame::Error {
                    message: format!("anchor '{}' is already bound", anchor),
                };
            }
            let component = ComponentTypeId::new(component);
            bound.insert(anchor.clone(), component.clone());
            ServerFrame::ComponentAttached {
                anchor,
                component,
                preregistered: false,
            }
        }
    }
}

async fn send_frame(socket: &mut WebSocket, frame: &ServerFrame) -> Result<(), axum::Error> {
    let text = serde_json::to_string(frame).unwrap_or_default();
    socket.send(Message::Text(text.into())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_binds_new_anchor() {
        let mut bound = BTreeMap::new();
        let reply = handle_client_frame(
            r#"{"type":"attach","anchor":"lazy1","component":"scope-component"}"#,
            &mut bound,
        );

        assert!(matches!(
            reply,
            ServerFrame::ComponentAttached {
                preregistered: false,
                ..
            }
        ));
        assert_eq!(bound["lazy1"].as_str(), "scope-component");
    }

    #[test]
    fn test_attach_rejects_duplicate_anchor() {
        let mut bound = BTreeMap::new();
        bound.insert("root".to_string(), ComponentTypeId::new("index-component"));

        let reply = handle_client_frame(
            r#"{"type":"attach","anchor":"root","component":"scope-component"}"#,
            &mut bound,
        );

        assert!(matches!(reply, ServerFrame::Error { .. }));
        assert_eq!(bound["root"].as_str(), "index-component");
    }

    #[test]
    fn test_malformed_frame_reports_error() {
        let mut bound = BTreeMap::new();
        let reply = handle_client_frame("not json", &mut bound);
        assert!(matches!(reply, ServerFrame::Error { .. }));
    }
}
