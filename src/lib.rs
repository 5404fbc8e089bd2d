//! Component host: mount-table router with per-mount policy chains.
//!
//! Dispatches incoming requests to isolated sub-applications by URL path
//! prefix and applies a uniform policy chain (CORS resolution →
//! authentication → authorization → endpoint dispatch) per mount. All
//! routing and policy objects are built once at startup and are immutable
//! for the process lifetime.

pub mod config;
pub mod host;
pub mod http;
pub mod hub;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod security;

pub use config::HostConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
