//! Component session hub.
//!
//! # Data Flow
//! ```text
//! GET <hub path>                  → JSON descriptor of pre-bound anchors
//! GET <hub path>?anchor=NAME      → single anchor resolution (404 if unbound)
//! GET <hub path> + Upgrade        → WebSocket session:
//!     server announces pre-registered bindings,
//!     client attaches further anchors lazily,
//!     state lives for the connection only
//! ```
//!
//! # Design Decisions
//! - Pre-registered bindings are an explicit construction parameter
//!   (anchor name → component type id), not repeated registration calls
//! - The rendering engine behind a component type is an external
//!   collaborator; the hub only tracks bindings
//! - Live sessions are tracked in a concurrent registry, removed on close

pub mod endpoint;
pub mod options;
pub mod session;

pub use endpoint::hub_endpoint;
pub use options::{ComponentTypeId, HubOptions};
pub use session::SessionRegistry;
