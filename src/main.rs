//! Component host binary.
//!
//! # Architecture Overview
//!
//! ```text
//!                ┌───────────────────────────────────────────────┐
//!                │                COMPONENT HOST                  │
//!                │                                                │
//!  Request ──────┼─▶ outer layers ─▶ authentication ─▶ dispatch   │
//!                │   (timeout,        (identity        (longest   │
//!                │    request id,      cookie)          prefix)   │
//!                │    trace)                               │      │
//!                │                                         ▼      │
//!                │        ┌──────────┬──────────┬─────────────┐   │
//!                │        │  /       │ /subdir  │ /prerendered│.. │
//!                │        │  mount   │  mount   │   mount     │   │
//!                │        └──────────┴──────────┴─────────────┘   │
//!                │   each: static lookup → routes → CORS →        │
//!                │         authorization → endpoint               │
//!                └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use component_host::config::loader::load_config;
use component_host::lifecycle::signals::wait_for_signal;
use component_host::observability::{logging, metrics};
use component_host::{HostConfig, HttpServer, Shutdown};

#[derive(Debug, Parser)]
#[command(name = "component-host", about = "Mount-table component test host")]
struct Args {
    /// Path to a TOML configuration file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => HostConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Arc::new(Shutdown::new());
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        signal_shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
