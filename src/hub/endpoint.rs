//! Hub endpoint handler.
//!
//! One handler serves three surfaces on the same path: the WebSocket session
//! upgrade, a JSON descriptor of pre-bound anchors, and single-anchor
//! resolution via the `anchor` query parameter.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::ws::WebSocketUpgrade,
    extract::{FromRequestParts, Query, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, MethodRouter},
};
use serde::{Deserialize, Serialize};

use crate::hub::options::HubOptions;
use crate::hub::session::{run_session, SessionRegistry};

#[derive(Clone)]
struct HubState {
    name: &'static str,
    options: Arc<HubOptions>,
    sessions: Arc<SessionRegistry>,
}

/// Build a hub endpoint for one registration path.
///
/// Each registration is an isolated instance: the same hub type mounted
/// under several paths carries different pre-bound anchors.
pub fn hub_endpoint(
    name: &'static str,
    options: HubOptions,
    sessions: Arc<SessionRegistry>,
) -> MethodRouter {
    let state = HubState {
        name,
        options: Arc::new(options),
        sessions,
    };
    get(hub_handler).with_state(state)
}

#[derive(Debug, Deserialize)]
struct HubQuery {
    anchor: Option<String>,
}

#[derive(Debug, Serialize)]
struct HubDescriptor<'a> {
    hub: &'static str,
    anchors: BTreeMap<&'a str, &'a str>,
}

#[derive(Debug, Serialize)]
struct AnchorBinding<'a> {
    anchor: &'a str,
    component: &'a str,
}

async fn hub_handler(
    State(state): State<HubState>,
    Query(query): Query<HubQuery>,
    request: Request<Body>,
) -> Response {
    let (mut parts, _body) = request.into_parts();

    if let Ok(upgrade) = WebSocketUpgrade::from_request_parts(&mut parts, &()).await {
        return upgrade.on_upgrade(move |socket| async move {
            run_session(socket, state.name, &state.options, &state.sessions).await;
        });
    }

    if let Some(anchor) = query.anchor.as_deref() {
        return match state.options.resolve(anchor) {
            Some(component) => Json(AnchorBinding {
                anchor,
                component: component.as_str(),
            })
            .into_response(),
            None => (
                StatusCode::NOT_FOUND,
                format!("no component pre-bound to anchor '{}'", anchor),
            )
                .into_response(),
        };
    }

    let descriptor = HubDescriptor {
        hub: state.name,
        anchors: state
            .options
            .bindings()
            .map(|(anchor, component)| (anchor, component.as_str()))
            .collect(),
    };
    Json(descriptor).into_response()
}
