//! Speculative prefetch.

use tracing::debug;

use crate::bundle::Bundle;
use crate::error::LoadResult;
use crate::loader::PageLoader;
use crate::route::normalize;

impl<P: Clone + Send + 'static> PageLoader<P> {
    /// Warm the bundle for a route that is not yet needed.
    ///
    /// At most one hint or load attempt is ever issued per bundle,
    /// regardless of its success. When the host supports preload hints the
    /// bundle's bytes are fetched without executing; otherwise a real
    /// [`load`] is performed, deferred until the document has finished
    /// loading so the prefetch never contends with first-paint resources.
    ///
    /// [`load`]: PageLoader::load
    pub async fn prefetch(&self, route: &str) -> LoadResult<()> {
        let route = normalize(route)?;
        let bundle = Bundle::for_route(&self.config, &route);

        {
            let mut inner = self.inner.lock().unwrap();
            if !inner.prefetched.insert(bundle.asset_path.clone()) {
                debug!(%route, "bundle already prefetched");
                return Ok(());
            }
        }

        if self.host.preload_supported() {
            debug!(%route, url = %bundle.url, "issuing preload hint");
            self.host.preload(&bundle);
            return Ok(());
        }

        if !self.host.document_ready() {
            debug!(%route, "deferring prefetch until the document finishes loading");
            self.host.wait_document_ready().await;
        }
        self.load(&route).await.map(|_| ())
    }
}
