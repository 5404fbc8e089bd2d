//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the host.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the component host.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HostConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Cross-origin policy applied per mount.
    pub cors: CorsConfig,

    /// Cookie authentication settings.
    pub auth: AuthConfig,

    /// Static asset roots for the file-serving mounts.
    pub assets: AssetConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Cross-origin resource sharing configuration.
///
/// Deserializes into the immutable `CorsPolicy` value object at startup.
/// Credentialed CORS forbids the `*` origin, so the policy always echoes a
/// concrete origin; there is no wildcard knob by design.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origin prefixes granted access (e.g., "http://localhost:").
    pub allowed_origin_prefixes: Vec<String>,

    /// Response headers exposed to cross-origin scripts.
    pub exposed_headers: Vec<String>,

    /// Whether credentialed requests are allowed.
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin_prefixes: vec![
                "http://localhost:".to_string(),
                "http://127.0.0.1:".to_string(),
            ],
            exposed_headers: vec!["MyCustomHeader".to_string()],
            allow_credentials: true,
        }
    }
}

/// Cookie authentication configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Name of the identity cookie.
    pub cookie_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: "identity".to_string(),
        }
    }
}

/// Static asset roots, one per file-serving mount.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Asset root for the root mount.
    pub root_dir: String,

    /// Asset root for the /subdir mount (alternate client bundle).
    pub subdir_dir: String,

    /// Asset root for the /prerendered mount.
    pub prerendered_dir: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root_dir: "assets/wwwroot".to_string(),
            subdir_dir: "assets/subdir".to_string(),
            prerendered_dir: "assets/prerendered".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
