//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (path)
//!     → mount.rs (longest-prefix selection)
//!     → path-base strip (for mounts configured to)
//!     → dispatch into the mount's isolated pipeline
//!
//! Mount compilation (at startup):
//!     MountEntry[]
//!     → Sort by prefix length, longest first
//!     → Freeze as immutable MountTable
//! ```
//!
//! # Design Decisions
//! - Mounts compiled at startup, immutable at runtime
//! - Longest matching prefix wins; root ("/") is the fallback
//! - Mounts are fully isolated: a request dispatched to one mount never
//!   passes through another mount's endpoint set

pub mod mount;

pub use mount::{MountEntry, MountTable};
