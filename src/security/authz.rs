//! Named authorization policies.
//!
//! # Responsibilities
//! - Hold the registry of named policies built at startup
//! - Evaluate a route's required policy against the current principal
//! - Deny with 403 Forbidden when the predicate fails or identity is absent
//!
//! # Design Decisions
//! - Policies are pure predicates over `Principal`; no I/O during evaluation
//! - The registry is immutable after construction (lock-free concurrent reads)
//! - A route naming an unregistered policy is denied, never silently allowed

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::security::authn::Principal;

/// Policy requiring the principal's display name to start with "B".
pub const NAME_MUST_START_WITH_B: &str = "NameMustStartWithB";

type Predicate = dyn Fn(&Principal) -> bool + Send + Sync;

/// A named predicate over the authenticated principal.
pub struct AuthorizationPolicy {
    name: String,
    predicate: Box<Predicate>,
}

impl AuthorizationPolicy {
    pub fn new(name: impl Into<String>, predicate: impl Fn(&Principal) -> bool + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate the policy. Grants access iff the predicate holds.
    pub fn grants(&self, principal: &Principal) -> bool {
        (self.predicate)(principal)
    }
}

impl std::fmt::Debug for AuthorizationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationPolicy")
            .field("name", &self.name)
            .finish()
    }
}

/// Registry of named policies, built once at startup.
#[derive(Debug, Default)]
pub struct PolicyRegistry {
    policies: HashMap<String, AuthorizationPolicy>,
}

impl PolicyRegistry {
    /// Registry with the built-in policies.
    pub fn with_defaults() -> Self {
        let mut registry = Self::default();
        registry.register(AuthorizationPolicy::new(NAME_MUST_START_WITH_B, |p| {
            p.name.as_deref().is_some_and(|name| name.starts_with('B'))
        }));
        registry
    }

    pub fn register(&mut self, policy: AuthorizationPolicy) {
        self.policies.insert(policy.name().to_string(), policy);
    }

    pub fn get(&self, name: &str) -> Option<&AuthorizationPolicy> {
        self.policies.get(name)
    }
}

/// State for the per-route authorization middleware.
#[derive(Debug, Clone)]
pub struct RequirePolicy {
    pub registry: Arc<PolicyRegistry>,
    pub policy_name: &'static str,
}

/// Per-route authorization middleware.
///
/// Applied with `route_layer` on endpoints declaring a required policy.
/// Denial is terminal for the request only; the mount table is untouched.
pub async fn require_policy_middleware(
    State(state): State<RequirePolicy>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let principal = request
        .extensions()
        .get::<Principal>()
        .cloned()
        .unwrap_or_default();

    let granted = state
        .registry
        .get(state.policy_name)
        .is_some_and(|policy| policy.grants(&principal));

    if !granted {
        tracing::debug!(
            policy = state.policy_name,
            authenticated = principal.is_authenticated(),
            "Authorization denied"
        );
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }

    next.run(request).await
}
