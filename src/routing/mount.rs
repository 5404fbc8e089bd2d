//! Mount table: prefix selection and path-base strip.
//!
//! # Responsibilities
//! - Store the ordered (path-prefix, sub-application) pairs
//! - Select the longest matching prefix for a request path
//! - Rewrite the URI for mounts that strip their path base
//!
//! # Design Decisions
//! - Prefix matching is on segment boundaries: `/subdir` matches `/subdir`
//!   and `/subdir/x`, never `/subdirectory`
//! - No locking: the table is immutable after construction and safe for
//!   unsynchronized concurrent reads
//! - Stripping the bare prefix yields `/`, preserving the query string

use axum::{
    body::Body,
    http::{uri::Uri, Request},
    Router,
};

/// One sub-tree of the URL space with its own isolated pipeline.
#[derive(Debug, Clone)]
pub struct MountEntry {
    /// Mount identifier for logging/metrics.
    pub name: &'static str,

    /// Path prefix; "/" marks the root mount.
    pub prefix: &'static str,

    /// Whether inner routing sees paths relative to the prefix.
    pub strip_path_base: bool,

    /// The mount's sub-application.
    pub app: Router,
}

impl MountEntry {
    fn matches(&self, path: &str) -> bool {
        if self.prefix == "/" {
            return true;
        }
        match path.strip_prefix(self.prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Ordered list of mounts, longest prefix first. Compiled once at startup.
#[derive(Debug, Clone)]
pub struct MountTable {
    entries: Vec<MountEntry>,
}

impl MountTable {
    /// Build the table. Entries are ordered by prefix length so the longest
    /// matching prefix always wins; a root ("/") entry must be present to
    /// guarantee selection is total.
    pub fn new(mut entries: Vec<MountEntry>) -> Self {
        entries.sort_by_key(|entry| std::cmp::Reverse(entry.prefix.len()));
        debug_assert!(entries.iter().any(|e| e.prefix == "/"));
        Self { entries }
    }

    /// Select the mount for a request path.
    pub fn select(&self, path: &str) -> &MountEntry {
        self.entries
            .iter()
            .find(|entry| entry.matches(path))
            .unwrap_or_else(|| &self.entries[self.entries.len() - 1])
    }

    pub fn entries(&self) -> &[MountEntry] {
        &self.entries
    }
}

/// Rewrite a request URI, removing the mount prefix so inner routing sees
/// relative paths. `/prerendered/x?q=1` becomes `/x?q=1`; the bare prefix
/// becomes `/`.
pub fn strip_path_base(request: &mut Request<Body>, prefix: &str) {
    let uri = request.uri();
    let path = uri.path();
    let Some(rest) = path.strip_prefix(prefix) else {
        return;
    };

    let new_path = if rest.is_empty() { "/" } else { rest };
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", new_path, query),
        None => new_path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = path_and_query.parse().ok();
    if let Ok(new_uri) = Uri::from_parts(parts) {
        *request.uri_mut() = new_uri;
    }
}
