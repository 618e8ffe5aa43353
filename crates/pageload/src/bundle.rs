//! Bundle addressing.
//!
//! Maps a normalized route to the script asset that serves it and to the
//! fully qualified URL the host fetches it from.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::config::LoaderConfig;

/// Characters escaped in the build-id path segment: everything except ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const BUILD_ID_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A loadable script bundle for a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    /// Normalized route this bundle serves.
    pub route: String,

    /// Route-derived script path, e.g. `/about.js`. Also the prefetch
    /// deduplication key.
    pub asset_path: String,

    /// Fully qualified URL the host should fetch.
    pub url: String,
}

impl Bundle {
    /// Derive the bundle for a normalized route.
    pub fn for_route(config: &LoaderConfig, route: &str) -> Self {
        let asset_path = if route == "/" {
            "/index.js".to_string()
        } else {
            format!("{route}.js")
        };
        let build_id = utf8_percent_encode(&config.build_id, BUILD_ID_ESCAPES);
        let url = format!(
            "{}/_next/static/{}/pages{}",
            config.asset_prefix, build_id, asset_path
        );
        Self {
            route: route.to_string(),
            asset_path,
            url,
        }
    }
}
