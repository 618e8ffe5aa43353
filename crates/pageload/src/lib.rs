//! Client-side, on-demand page bundle loading.
//!
//! Given a logical route name, this crate guarantees:
//!
//! - at most one fetch of the route's bundle in flight at a time
//! - the outcome (success or failure) is cached until explicitly cleared
//! - every caller awaiting the route receives the same outcome, exactly once
//! - speculative prefetch with native preload hints, or a deferred real
//!   load on hosts without the hint primitive
//!
//! The physical mechanics (script injection, preload hints, detection of
//! server-rendered content, the build tool's idle signal) live behind the
//! [`BundleHost`] and [`BuildStatus`] traits supplied by the embedding
//! application.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use pageload::{LoaderConfig, PageLoader};
//! # use pageload::{Bundle, BundleHost, HostError};
//! # struct BrowserHost;
//! # #[async_trait::async_trait]
//! # impl BundleHost for BrowserHost {
//! #     async fn inject(&self, _: &Bundle) -> Result<(), HostError> { Ok(()) }
//! #     fn preload_supported(&self) -> bool { false }
//! #     fn preload(&self, _: &Bundle) {}
//! #     fn has_server_rendered(&self, _: &str) -> bool { false }
//! #     fn remove_server_rendered(&self, _: &str) {}
//! #     fn document_ready(&self) -> bool { true }
//! #     async fn wait_document_ready(&self) {}
//! # }
//! # #[derive(Clone)] struct Page;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = LoaderConfig::new("abc123").with_asset_prefix("https://cdn.example.com");
//! let loader: PageLoader<Page> = PageLoader::new(config, Arc::new(BrowserHost));
//!
//! // Resolves once the bundle for "/about" registers itself.
//! let page = loader.load("/about").await?;
//!
//! // Warm a route we expect to need soon.
//! loader.prefetch("/pricing").await?;
//! # Ok(())
//! # }
//! ```

pub mod bundle;
pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod loader;
mod prefetch;
pub mod route;

pub use bundle::Bundle;
pub use config::LoaderConfig;
pub use error::{LoadError, LoadResult};
pub use events::PageEvents;
pub use host::{BuildStatus, BundleHost, HostError};
pub use loader::PageLoader;
pub use route::normalize;
