//! The hosted application: five isolated mounts over one URL space.
//!
//! # Data Flow
//! ```text
//! Request
//!     → global authentication (identity cookie → Principal)
//!     → app.rs dispatch (longest-prefix mount selection, path-base strip)
//!     → per-mount pipeline:
//!         static lookup (terminates before the policy chain)
//!         → route match → CORS → authorization → endpoint
//! ```
//!
//! # Design Decisions
//! - Each mount re-declares its own static serving, routes, CORS and
//!   authorization application; nothing is shared across endpoint sets
//! - Static file hits bypass CORS and authorization entirely, a deliberate
//!   asymmetry the integration tests pin down

pub mod app;
pub mod controllers;
pub mod pages;
pub mod static_files;

pub use app::build_host;
