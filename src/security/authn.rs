//! Cookie-based identity.
//!
//! # Responsibilities
//! - Parse the identity cookie into a `Principal` request extension
//! - Establish identity once, globally, before mount dispatch
//!
//! # Design Decisions
//! - Unauthenticated requests carry an anonymous principal (no name claim)
//!   rather than being rejected; rejection is authorization's job
//! - The cookie value is the display name; the persistence mechanism behind
//!   a real identity store is an external collaborator

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use crate::config::AuthConfig;

/// The authenticated caller, attached to every request.
#[derive(Debug, Clone, Default)]
pub struct Principal {
    /// Display name claim; `None` for anonymous requests.
    pub name: Option<String>,
}

impl Principal {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.name.is_some()
    }
}

/// Authentication state shared by the middleware and the login controller.
#[derive(Debug, Clone)]
pub struct AuthState {
    pub cookie_name: Arc<str>,
}

impl AuthState {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            cookie_name: Arc::from(config.cookie_name.as_str()),
        }
    }
}

/// Global authentication middleware.
///
/// Runs before mount dispatch so every sub-tree observes the same identity.
pub async fn authenticate_middleware(
    State(state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let name = request
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|cookies| cookie_value(cookies, &state.cookie_name))
        .filter(|name| !name.is_empty())
        .map(str::to_owned);

    let principal = Principal { name };
    if let Some(name) = &principal.name {
        tracing::debug!(name = %name, "Request authenticated");
    }
    request.extensions_mut().insert(principal);

    next.run(request).await
}

/// Extract a single cookie value from a `Cookie` header.
fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}
