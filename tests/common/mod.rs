//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use component_host::{HostConfig, HttpServer, Shutdown};

/// Configuration pointing at the repository's fixture assets.
pub fn test_config() -> HostConfig {
    let assets = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
    let mut config = HostConfig::default();
    config.assets.root_dir = assets.join("wwwroot").to_string_lossy().into_owned();
    config.assets.subdir_dir = assets.join("subdir").to_string_lossy().into_owned();
    config.assets.prerendered_dir = assets.join("prerendered").to_string_lossy().into_owned();
    config
}

/// Start a host on an ephemeral port. The returned coordinator stops it.
pub async fn spawn_host() -> (SocketAddr, Arc<Shutdown>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Arc::new(Shutdown::new());
    let server_shutdown = shutdown.clone();
    let server = HttpServer::new(test_config());

    tokio::spawn(async move {
        server.run(listener, &server_shutdown).await.unwrap();
    });

    (addr, shutdown)
}

#[allow(dead_code)]
pub fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{}{}", addr, path)
}
