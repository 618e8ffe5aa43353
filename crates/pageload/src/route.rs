//! Route name normalization.
//!
//! A normalized route is the canonical cache key for a page:
//!
//! - always starts with `/`
//! - a trailing `/index` collapses to `/`
//! - no trailing `/` except for the root route itself

use crate::error::{LoadError, LoadResult};

/// Normalize a route name into its canonical cache key.
///
/// Idempotent: normalizing an already-normalized route is a no-op.
///
/// # Examples
///
/// ```
/// use pageload::route::normalize;
///
/// assert_eq!(normalize("/about/").unwrap(), "/about");
/// assert_eq!(normalize("/index").unwrap(), "/");
/// assert_eq!(normalize("/").unwrap(), "/");
/// assert!(normalize("about").is_err());
/// ```
pub fn normalize(route: &str) -> LoadResult<String> {
    if !route.starts_with('/') {
        return Err(LoadError::InvalidRoute {
            route: route.to_string(),
        });
    }

    let route = match route.strip_suffix("/index") {
        Some(head) => format!("{head}/"),
        None => route.to_string(),
    };

    if route == "/" {
        return Ok(route);
    }
    Ok(route.strip_suffix('/').unwrap_or(&route).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash() {
        assert_eq!(normalize("/about/").unwrap(), "/about");
        assert_eq!(normalize("/about").unwrap(), "/about");
    }

    #[test]
    fn index_collapses_to_root() {
        assert_eq!(normalize("/index").unwrap(), "/");
        assert_eq!(normalize("/docs/index").unwrap(), "/docs");
    }

    #[test]
    fn root_is_untouched() {
        assert_eq!(normalize("/").unwrap(), "/");
    }

    #[test]
    fn relative_route_is_rejected() {
        let err = normalize("about").unwrap_err();
        assert_eq!(
            err,
            LoadError::InvalidRoute {
                route: "about".to_string()
            }
        );
        assert!(normalize("").is_err());
    }

    #[test]
    fn only_the_last_index_segment_collapses() {
        assert_eq!(normalize("/index/index").unwrap(), "/index");
    }

    #[test]
    fn idempotent() {
        for route in ["/about/", "/index", "/", "/docs/index", "/a/b/"] {
            let once = normalize(route).unwrap();
            assert_eq!(normalize(&once).unwrap(), once);
        }
    }
}
