//! Host collaborator traits.
//!
//! The loader owns no browser or build-tool glue. Everything that touches
//! the document (script injection, preload hints, server-rendered artifact
//! lookup, page lifecycle events) lives behind [`BundleHost`], and the build
//! tool's module-graph status behind [`BuildStatus`]. Host probes are
//! synchronous and must not call back into the loader.

use async_trait::async_trait;

use crate::bundle::Bundle;

/// Error reported by the host when a bundle fails to load.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct HostError {
    message: String,
}

impl HostError {
    /// Create a host error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Environment adapter for fetching and executing bundles.
#[async_trait]
pub trait BundleHost: Send + Sync {
    /// Start loading and executing `bundle`.
    ///
    /// Resolves `Ok` once the load has been issued; resolves `Err` when the
    /// transport fails, whenever that surfaces. Success is reported by the
    /// loaded code calling [`PageLoader::register_page`], never by this
    /// future.
    ///
    /// [`PageLoader::register_page`]: crate::PageLoader::register_page
    async fn inject(&self, bundle: &Bundle) -> Result<(), HostError>;

    /// Whether the host supports non-executing preload hints.
    fn preload_supported(&self) -> bool;

    /// Issue a non-executing resource hint for `bundle`. Warms the cache
    /// without running the script.
    fn preload(&self, bundle: &Bundle);

    /// Whether a server-rendered artifact for `route` is already present in
    /// the current document.
    fn has_server_rendered(&self, route: &str) -> bool;

    /// Remove the server-rendered artifact for `route`, if any.
    fn remove_server_rendered(&self, route: &str);

    /// Whether the document has finished loading.
    fn document_ready(&self) -> bool;

    /// Resolves when the document finishes loading. Must resolve promptly if
    /// it already has.
    async fn wait_document_ready(&self);
}

/// Build-tool module-graph status.
///
/// Optional collaborator: when configured, page registration is deferred
/// until the build reports idle, so pages never register against a
/// partially-consistent module graph.
#[async_trait]
pub trait BuildStatus: Send + Sync {
    /// Whether the module graph is currently stable.
    fn is_idle(&self) -> bool;

    /// Resolves on the next transition to idle.
    async fn wait_idle(&self);
}
