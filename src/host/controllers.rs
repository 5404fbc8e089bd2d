//! Controller-action endpoints on the root mount.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query, State},
    http::{header, StatusCode},
    middleware::from_fn_with_state,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::security::authn::{AuthState, Principal};
use crate::security::authz::{require_policy_middleware, RequirePolicy, NAME_MUST_START_WITH_B};
use crate::security::PolicyRegistry;

/// Build the root mount's controller routes.
pub fn api_routes(auth: AuthState, policies: Arc<PolicyRegistry>) -> Router {
    let restricted = Router::new()
        .route("/api/restricted", get(restricted))
        .route_layer(from_fn_with_state(
            RequirePolicy {
                registry: policies,
                policy_name: NAME_MUST_START_WITH_B,
            },
            require_policy_middleware,
        ));

    let auth_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .with_state(auth);

    Router::new()
        .route("/api/greeting", get(greeting))
        .route("/api/user", get(current_user))
        .merge(restricted)
        .merge(auth_routes)
}

/// Plain action carrying the exposed custom header, so cross-origin scripts
/// can observe it when the origin allow-rule grants access.
async fn greeting() -> impl IntoResponse {
    (
        [("MyCustomHeader", "From the server")],
        Json(json!({ "message": "Hello" })),
    )
}

#[derive(Debug, Serialize)]
struct UserInfo {
    name: Option<String>,
    authenticated: bool,
}

async fn current_user(Extension(principal): Extension<Principal>) -> Json<UserInfo> {
    Json(UserInfo {
        authenticated: principal.is_authenticated(),
        name: principal.name,
    })
}

/// Reachable only under the "NameMustStartWithB" policy.
async fn restricted(Extension(principal): Extension<Principal>) -> Json<serde_json::Value> {
    Json(json!({
        "message": "restricted content",
        "name": principal.name,
    }))
}

#[derive(Debug, Deserialize)]
struct LoginQuery {
    name: String,
}

/// Mint the identity cookie. The persistence behind a real identity store
/// is an external collaborator; the test host trusts the declared name.
async fn login(State(auth): State<AuthState>, Query(query): Query<LoginQuery>) -> impl IntoResponse {
    let cookie = format!("{}={}; Path=/; HttpOnly", auth.cookie_name, query.name);
    ([(header::SET_COOKIE, cookie)], StatusCode::NO_CONTENT)
}

async fn logout(State(auth): State<AuthState>) -> impl IntoResponse {
    let cookie = format!("{}=; Path=/; HttpOnly; Max-Age=0", auth.cookie_name);
    ([(header::SET_COOKIE, cookie)], StatusCode::NO_CONTENT)
}
