//! Cross-cutting request policies.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → authn.rs (identity cookie → Principal extension, global)
//!     → [mount table dispatch]
//!     → cors.rs (origin allow-rule → response headers, per mount)
//!     → authz.rs (named policy over Principal, per route)
//!     → endpoint
//! ```
//!
//! # Design Decisions
//! - Policies are immutable value objects built once at startup
//! - Allow/deny decisions are pure predicate functions over those objects
//! - Authorization failure is terminal for the request, never retried

pub mod authn;
pub mod authz;
pub mod cors;

pub use authn::Principal;
pub use authz::PolicyRegistry;
pub use cors::CorsPolicy;
