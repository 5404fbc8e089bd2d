//! HTTP server assembly.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, outer layers: timeout, request ID, trace)
//!     → host application (authentication, mount dispatch)
//!     → response to client
//! ```

pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
