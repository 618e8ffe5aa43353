//! Load coordination: cache, in-flight deduplication, fan-out.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use crate::bundle::Bundle;
use crate::config::LoaderConfig;
use crate::error::{LoadError, LoadResult};
use crate::events::PageEvents;
use crate::host::{BuildStatus, BundleHost};
use crate::route::normalize;

pub(crate) struct Inner<P> {
    /// Route -> settled outcome. Authoritative until cleared.
    cache: HashMap<String, LoadResult<P>>,

    /// Routes with a fetch issued and no outcome yet.
    loading: HashSet<String>,

    /// Asset paths a prefetch hint or load has been issued for. Grows only.
    pub(crate) prefetched: HashSet<String>,

    events: PageEvents<LoadResult<P>>,
}

/// Coordinates on-demand loading of page bundles.
///
/// For every route, at most one fetch is in flight at a time; the outcome
/// (success or failure) is cached until [`clear_cache`] and fanned out to
/// every caller awaiting the route. The loader is a cheap handle: clones
/// share the same state.
///
/// Freshly-loaded bundle code announces itself through
/// [`register_page`]; the host reports transport failures by resolving its
/// `inject` future with an error. Both paths settle the route through the
/// same cache-write and fan-out step.
///
/// [`clear_cache`]: PageLoader::clear_cache
/// [`register_page`]: PageLoader::register_page
pub struct PageLoader<P> {
    pub(crate) inner: Arc<Mutex<Inner<P>>>,
    pub(crate) host: Arc<dyn BundleHost>,
    build: Option<Arc<dyn BuildStatus>>,
    pub(crate) config: LoaderConfig,
}

impl<P> Clone for PageLoader<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            host: Arc::clone(&self.host),
            build: self.build.clone(),
            config: self.config.clone(),
        }
    }
}

impl<P: Clone + Send + 'static> PageLoader<P> {
    /// Create a loader over the given host.
    pub fn new(config: LoaderConfig, host: Arc<dyn BundleHost>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                cache: HashMap::new(),
                loading: HashSet::new(),
                prefetched: HashSet::new(),
                events: PageEvents::new(),
            })),
            host,
            build: None,
            config,
        }
    }

    /// Defer page registration until this collaborator reports idle.
    pub fn with_build_status(mut self, build: Arc<dyn BuildStatus>) -> Self {
        self.build = Some(build);
        self
    }

    /// Load the page for `route`.
    ///
    /// Resolves from the cache when the route has already settled; otherwise
    /// waits for the route's outcome, starting the fetch only if no fetch is
    /// already in flight and no server-rendered artifact is present.
    pub async fn load(&self, route: &str) -> LoadResult<P> {
        let route = normalize(route)?;

        // Pure probe; kept outside the state lock.
        let server_rendered = self.host.has_server_rendered(&route);

        let rx = {
            let mut inner = self.inner.lock().unwrap();
            if let Some(outcome) = inner.cache.get(&route) {
                debug!(%route, "page cache hit");
                return outcome.clone();
            }

            let rx = inner.events.subscribe(&route);

            if server_rendered {
                // The server-delivered bundle registers itself; no fetch.
                debug!(%route, "waiting for server-rendered page to register");
            } else if inner.loading.insert(route.clone()) {
                self.start_fetch(&route);
            }
            rx
        };

        match rx.await {
            Ok(outcome) => outcome,
            // Sender dropped without an outcome: the loader went away.
            Err(_) => Err(LoadError::PageLoad { route }),
        }
    }

    /// Registration entry point, invoked by freshly-loaded bundle code.
    ///
    /// Runs `register` to produce the page, writes the outcome into the
    /// cache, and fans it out to every waiter. When a [`BuildStatus`]
    /// collaborator is configured and reports non-idle, the whole step is
    /// deferred until the idle transition.
    ///
    /// Calling this for a route that was cleared mid-fetch repopulates the
    /// cache as if it were a fresh load.
    pub async fn register_page<F>(&self, route: &str, register: F)
    where
        F: FnOnce() -> anyhow::Result<P>,
    {
        if let Some(build) = &self.build {
            if !build.is_idle() {
                info!(route, "waiting for the build to become idle before registering page");
                build.wait_idle().await;
            }
        }

        let outcome = register().map_err(|error| {
            let message = format!("{error:#}");
            warn!(route, error = %message, "page registration failed");
            LoadError::Registration {
                route: route.to_string(),
                message,
            }
        });
        self.complete(route, outcome);
    }

    /// Evict the route's cached outcome and pending marker, and ask the host
    /// to remove any server-rendered artifact.
    ///
    /// Cannot retract an in-flight fetch; a result arriving afterwards is
    /// cached as a fresh entry. The prefetched set is untouched: hints are
    /// one-time per process.
    pub fn clear_cache(&self, route: &str) -> LoadResult<()> {
        let route = normalize(route)?;
        {
            let mut inner = self.inner.lock().unwrap();
            inner.cache.remove(&route);
            inner.loading.remove(&route);
        }
        self.host.remove_server_rendered(&route);
        debug!(%route, "page cache cleared");
        Ok(())
    }

    /// Issue the fetch for `route`. Caller must already hold the pending
    /// marker for the route.
    fn start_fetch(&self, route: &str) {
        let bundle = Bundle::for_route(&self.config, route);
        debug!(%route, url = %bundle.url, "fetching page bundle");

        let host = Arc::clone(&self.host);
        let loader = self.clone();
        tokio::spawn(async move {
            if let Err(error) = host.inject(&bundle).await {
                warn!(route = %bundle.route, %error, "page bundle failed to load");
                loader.complete(
                    &bundle.route,
                    Err(LoadError::PageLoad {
                        route: bundle.route.clone(),
                    }),
                );
            }
        });
    }

    /// Settle `route`: write the outcome, drop the pending marker, fan out.
    fn complete(&self, route: &str, outcome: LoadResult<P>) {
        let mut inner = self.inner.lock().unwrap();
        inner.cache.insert(route.to_string(), outcome.clone());
        inner.loading.remove(route);
        let notified = inner.events.publish(route, outcome);
        debug!(route, notified, "page outcome published");
    }
}
