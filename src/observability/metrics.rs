//! Metrics collection and exposition.
//!
//! # Metrics
//! - `host_requests_total` (counter): total requests by mount, method, status
//! - `host_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Labels carry the mount name so the isolated pipelines stay
//!   distinguishable in dashboards
//! - The exporter is optional; recording without one installed is a no-op

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(error) => tracing::error!(error = %error, "Failed to install metrics exporter"),
    }
}

/// Record one dispatched request.
pub fn record_request(method: &str, status: u16, mount: &str, start: Instant) {
    let elapsed = start.elapsed().as_secs_f64();
    counter!(
        "host_requests_total",
        "mount" => mount.to_string(),
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "host_request_duration_seconds",
        "mount" => mount.to_string(),
        "method" => method.to_string()
    )
    .record(elapsed);
}
