//! Mount wiring and top-level dispatch.
//!
//! # Responsibilities
//! - Build the four mounts and freeze them into the MountTable
//! - Dispatch each request into the selected mount's isolated pipeline
//! - Apply global authentication before any mount dispatch
//!
//! # Per-mount pipeline (fixed order, all mounts)
//! 1. Path-base rewrite for mounts configured to strip their prefix
//! 2. Static-file lookup; a hit serves bytes and terminates the chain
//! 3. Route matching against the mount's endpoint set
//! 4. CORS resolution (matched and unmatched routes alike)
//! 5. Authorization for endpoints declaring a required policy
//! 6. Endpoint invocation

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::from_fn_with_state,
    response::Response,
    routing::{any, get},
    Router,
};
use tower::util::ServiceExt;
use tower_http::services::ServeFile;

use crate::config::HostConfig;
use crate::host::static_files::{static_lookup_middleware, StaticFiles};
use crate::host::{controllers, pages};
use crate::hub::{hub_endpoint, ComponentTypeId, HubOptions, SessionRegistry};
use crate::observability::metrics;
use crate::routing::mount::{strip_path_base, MountEntry, MountTable};
use crate::security::authn::{authenticate_middleware, AuthState};
use crate::security::cors::cors_middleware;
use crate::security::{CorsPolicy, PolicyRegistry};

#[derive(Clone)]
struct DispatchState {
    mounts: Arc<MountTable>,
}

/// Build the complete host application.
///
/// Everything here is constructed once and never mutated afterwards; the
/// returned router is safe for unsynchronized concurrent reads.
pub fn build_host(config: &HostConfig) -> Router {
    let cors = Arc::new(CorsPolicy::from_config(&config.cors));
    let policies = Arc::new(PolicyRegistry::with_defaults());
    let sessions = Arc::new(SessionRegistry::default());
    let auth = AuthState::from_config(&config.auth);

    let mounts = MountTable::new(vec![
        root_mount(config, &cors, &policies, &auth, &sessions),
        subdir_mount(config, &cors, &sessions),
        prerendered_mount(config, &cors, &sessions),
        startmodes_mount(config, &cors, &sessions),
    ]);

    let state = DispatchState {
        mounts: Arc::new(mounts),
    };

    // Authentication is global: it runs before mount dispatch so every
    // sub-tree observes the same identity.
    Router::new()
        .route("/", any(dispatch))
        .route("/{*path}", any(dispatch))
        .with_state(state)
        .layer(from_fn_with_state(auth, authenticate_middleware))
}

/// Top-level dispatch: longest matching prefix wins; the root mount is the
/// fallback. One-shot, no retries.
async fn dispatch(State(state): State<DispatchState>, mut request: Request<Body>) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mount = state.mounts.select(&path);
    if mount.strip_path_base {
        strip_path_base(&mut request, mount.prefix);
    }

    tracing::debug!(mount = mount.name, path = %path, "Dispatching request");

    let response = match mount.app.clone().oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    metrics::record_request(&method, response.status().as_u16(), mount.name, start);
    response
}

/// Root mount: controller actions, page routes, default session hub.
fn root_mount(
    config: &HostConfig,
    cors: &Arc<CorsPolicy>,
    policies: &Arc<PolicyRegistry>,
    auth: &AuthState,
    sessions: &Arc<SessionRegistry>,
) -> MountEntry {
    let app = Router::new()
        .route("/", get(pages::index))
        .route("/Index", get(pages::index))
        .merge(controllers::api_routes(auth.clone(), policies.clone()))
        .route(
            "/_blazor",
            hub_endpoint("root", HubOptions::empty(), sessions.clone()),
        )
        .layer(from_fn_with_state(cors.clone(), cors_middleware))
        .layer(from_fn_with_state(
            StaticFiles::new(&config.assets.root_dir, ""),
            static_lookup_middleware,
        ));

    MountEntry {
        name: "root",
        prefix: "/",
        strip_path_base: false,
        app,
    }
}

/// `/subdir`: alternate client bundle, hub anchored at `root`, fallback to
/// the bundle's index.html. Keeps its path base; static lookup drops the
/// prefix on its own.
fn subdir_mount(
    config: &HostConfig,
    cors: &Arc<CorsPolicy>,
    sessions: &Arc<SessionRegistry>,
) -> MountEntry {
    let index = Path::new(&config.assets.subdir_dir).join("index.html");
    let app = Router::new()
        .route(
            "/subdir/_blazor",
            hub_endpoint(
                "subdir",
                HubOptions::preregistered([("root", ComponentTypeId::new("index-component"))]),
                sessions.clone(),
            ),
        )
        .fallback_service(ServeFile::new(index))
        .layer(from_fn_with_state(cors.clone(), cors_middleware))
        .layer(from_fn_with_state(
            StaticFiles::new(&config.assets.subdir_dir, "/subdir"),
            static_lookup_middleware,
        ));

    MountEntry {
        name: "subdir",
        prefix: "/subdir",
        strip_path_base: false,
        app,
    }
}

/// `/prerendered` (path-base stripped): pages, hub, fallback to the
/// PrerenderedHost page.
fn prerendered_mount(
    config: &HostConfig,
    cors: &Arc<CorsPolicy>,
    sessions: &Arc<SessionRegistry>,
) -> MountEntry {
    let app = Router::new()
        .route("/PrerenderedHost", get(pages::prerendered_host))
        .route(
            "/_blazor",
            hub_endpoint("prerendered", HubOptions::empty(), sessions.clone()),
        )
        .fallback(pages::prerendered_host)
        .layer(from_fn_with_state(cors.clone(), cors_middleware))
        .layer(from_fn_with_state(
            StaticFiles::new(&config.assets.prerendered_dir, ""),
            static_lookup_middleware,
        ));

    MountEntry {
        name: "prerendered",
        prefix: "/prerendered",
        strip_path_base: true,
        app,
    }
}

/// `/startmodes` (path-base stripped): `{mode}` fallback page plus three hub
/// variants exercising pre-registered vs. lazily declared components. Shares
/// the root asset dir for its static stage.
fn startmodes_mount(
    config: &HostConfig,
    cors: &Arc<CorsPolicy>,
    sessions: &Arc<SessionRegistry>,
) -> MountEntry {
    let scope = || ComponentTypeId::new("scope-component");
    let counter = || ComponentTypeId::new("counter-component");

    let app = Router::new()
        .route("/startmodeshost/{mode}", get(pages::start_modes_host))
        .route(
            "/startmodeshost/prerendered/_blazor",
            hub_endpoint(
                "startmodes-prerendered",
                HubOptions::empty(),
                sessions.clone(),
            ),
        )
        .route(
            "/startmodeshost/preregistered/_blazor",
            hub_endpoint(
                "startmodes-preregistered",
                HubOptions::preregistered([
                    ("preregistered1", scope()),
                    ("preregistered2", counter()),
                ]),
                sessions.clone(),
            ),
        )
        .route(
            "/startmodeshost/mixed/_blazor",
            hub_endpoint(
                "startmodes-mixed",
                HubOptions::preregistered([("mixed1", scope()), ("mixed2", counter())]),
                sessions.clone(),
            ),
        )
        .layer(from_fn_with_state(cors.clone(), cors_middleware))
        .layer(from_fn_with_state(
            StaticFiles::new(&config.assets.root_dir, ""),
            static_lookup_middleware,
        ));

    MountEntry {
        name: "startmodes",
        prefix: "/startmodes",
        strip_path_base: true,
        app,
    }
}
