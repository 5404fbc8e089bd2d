//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the host application router from validated configuration
//! - Wire up outer middleware (timeout, request ID, tracing)
//! - Bind the server to a listener and serve until shutdown

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::HostConfig;
use crate::host::build_host;
use crate::http::request::RequestIdLayer;
use crate::lifecycle::Shutdown;

/// HTTP server for the component host.
pub struct HttpServer {
    router: Router,
    config: HostConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: HostConfig) -> Self {
        let host = build_host(&config);
        let router = Self::build_router(&config, host);
        Self { router, config }
    }

    /// Apply the outer middleware layers in fixed order.
    fn build_router(config: &HostConfig, host: Router) -> Router {
        host.layer(TimeoutLayer::new(Duration::from_secs(
            config.timeouts.request_secs,
        )))
        .layer(RequestIdLayer)
        .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown coordinator fires.
    pub async fn run(self, listener: TcpListener, shutdown: &Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let mut signal = shutdown.subscribe();
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = signal.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }
}
