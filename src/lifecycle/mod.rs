//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Build mount table → Bind listener → Serve
//!
//! Shutdown:
//!     Signal received → Stop accepting → Drain in-flight requests → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Shutdown is a broadcast; the server and hub sessions observe one signal

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
