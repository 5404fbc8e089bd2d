//! Static-file lookup stage.
//!
//! # Responsibilities
//! - Map a request path to a file under the mount's static root
//! - Serve the bytes and terminate the chain on a hit
//! - Pass the original request through on a miss
//!
//! # Design Decisions
//! - Runs ahead of CORS and authorization: a served file never reaches the
//!   policy chain (the asymmetry the host exists to exercise)
//! - Lookup is mount-relative; mounts that keep their path base declare the
//!   prefix to drop for lookup only
//! - Only GET and HEAD touch the filesystem

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode, Uri},
    middleware::Next,
    response::Response,
};
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

/// State for the static lookup middleware.
#[derive(Clone)]
pub struct StaticFiles {
    files: ServeDir,
    /// Prefix dropped from the request path before lookup; empty for mounts
    /// whose path base is already stripped at dispatch.
    lookup_base: &'static str,
}

impl StaticFiles {
    pub fn new(root: &str, lookup_base: &'static str) -> Self {
        Self {
            files: ServeDir::new(root),
            lookup_base,
        }
    }

    fn lookup_uri(&self, uri: &Uri) -> Option<Uri> {
        let path = uri.path();
        let rel = path.strip_prefix(self.lookup_base).unwrap_or(path);
        let rel = if rel.is_empty() { "/" } else { rel };
        rel.parse().ok()
    }
}

/// Per-mount static lookup middleware.
pub async fn static_lookup_middleware(
    State(state): State<StaticFiles>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() != Method::GET && request.method() != Method::HEAD {
        return next.run(request).await;
    }

    let Some(uri) = state.lookup_uri(request.uri()) else {
        return next.run(request).await;
    };

    let mut probe = Request::new(Body::empty());
    *probe.method_mut() = request.method().clone();
    *probe.uri_mut() = uri;

    let served = match state.files.clone().oneshot(probe).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    if served.status() == StatusCode::NOT_FOUND {
        return next.run(request).await;
    }

    served.map(Body::new)
}
