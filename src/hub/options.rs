//! Hub endpoint construction options.

use std::collections::BTreeMap;

use serde::Serialize;

/// Opaque identifier of a server-side component type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentTypeId(pub String);

impl ComponentTypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Immutable per-endpoint hub options.
///
/// The same hub endpoint type may be registered multiple times under
/// different paths, each instance with its own pre-bound anchors. The map
/// is fixed at construction; lazy bindings happen per session, never here.
#[derive(Debug, Clone, Default)]
pub struct HubOptions {
    preregistered: BTreeMap<String, ComponentTypeId>,
}

impl HubOptions {
    /// Options with no pre-bound anchors (all bindings client-declared).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Options pre-binding the given anchors.
    pub fn preregistered<I, A>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (A, ComponentTypeId)>,
        A: Into<String>,
    {
        Self {
            preregistered: bindings
                .into_iter()
                .map(|(anchor, component)| (anchor.into(), component))
                .collect(),
        }
    }

    /// Resolve a pre-bound anchor to its component type.
    pub fn resolve(&self, anchor: &str) -> Option<&ComponentTypeId> {
        self.preregistered.get(anchor)
    }

    /// Iterate pre-bound (anchor, component type) pairs in anchor order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &ComponentTypeId)> {
        self.preregistered
            .iter()
            .map(|(anchor, component)| (anchor.as_str(), component))
    }

    pub fn is_empty(&self) -> bool {
        self.preregistered.is_empty()
    }
}
