//! Cross-origin resource sharing.
//!
//! # Responsibilities
//! - Evaluate the origin allow-rule (prefix predicate over the Origin header)
//! - Answer preflight requests directly
//! - Decorate matched and unmatched responses with CORS headers
//!
//! # Design Decisions
//! - The allowed origin is echoed verbatim, never `*`: browsers reject
//!   wildcards in conjunction with credentials, so the policy must name
//!   the origin it is allowing
//! - A disallowed origin only omits the allow headers; the body is still
//!   served and same-origin callers are unaffected
//! - The policy is an immutable value object; evaluation is a pure predicate

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::CorsConfig;

/// Immutable cross-origin policy, constructed once at startup.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origin_prefixes: Vec<String>,
    exposed_headers: Vec<String>,
    allow_any_header: bool,
    allow_any_method: bool,
    allow_credentials: bool,
}

impl CorsPolicy {
    /// Build the policy from configuration.
    pub fn from_config(config: &CorsConfig) -> Self {
        Self {
            allowed_origin_prefixes: config.allowed_origin_prefixes.clone(),
            exposed_headers: config.exposed_headers.clone(),
            allow_any_header: true,
            allow_any_method: true,
            allow_credentials: config.allow_credentials,
        }
    }

    /// Returns true if the declared origin matches the allow-rule.
    pub fn origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origin_prefixes
            .iter()
            .any(|prefix| origin.starts_with(prefix))
    }

    fn exposed_headers_value(&self) -> Option<HeaderValue> {
        if self.exposed_headers.is_empty() {
            return None;
        }
        HeaderValue::from_str(&self.exposed_headers.join(", ")).ok()
    }
}

/// Per-mount CORS middleware.
///
/// Runs after route matching and applies to matched and unmatched routes
/// alike (it wraps the mount's fallback too). Static file lookups terminate
/// before this stage and are never decorated.
pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let allowed_origin = origin.as_deref().filter(|o| policy.origin_allowed(o));
    if let Some(origin) = &origin {
        if allowed_origin.is_none() {
            tracing::debug!(origin = %origin, "Origin not allowed, omitting CORS headers");
        }
    }

    // Preflight requests are answered here and never reach the endpoint.
    let is_preflight = request.method() == Method::OPTIONS
        && request
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);
    if is_preflight {
        return preflight_response(&policy, &request, allowed_origin);
    }

    let allow_echo = allowed_origin.map(|o| HeaderValue::from_str(o).ok());
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.append(header::VARY, HeaderValue::from_static("Origin"));
    if let Some(Some(echo)) = allow_echo {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, echo);
        if policy.allow_credentials {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("true"),
            );
        }
        if let Some(exposed) = policy.exposed_headers_value() {
            headers.insert(header::ACCESS_CONTROL_EXPOSE_HEADERS, exposed);
        }
    }

    response
}

fn preflight_response(
    policy: &CorsPolicy,
    request: &Request<Body>,
    allowed_origin: Option<&str>,
) -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    let req_headers = request.headers();
    let echo = allowed_origin.and_then(|o| HeaderValue::from_str(o).ok());

    let headers = response.headers_mut();
    headers.append(header::VARY, HeaderValue::from_static("Origin"));

    if let Some(echo) = echo {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, echo);
        if policy.allow_credentials {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("true"),
            );
        }

        // Any method and any header are permitted, so the requested ones
        // are echoed back rather than enumerated.
        if policy.allow_any_method {
            if let Some(method) = req_headers.get(header::ACCESS_CONTROL_REQUEST_METHOD) {
                headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, method.clone());
            }
        }
        if policy.allow_any_header {
            if let Some(requested) = req_headers.get(header::ACCESS_CONTROL_REQUEST_HEADERS) {
                headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
            }
        }
    }

    response
}
