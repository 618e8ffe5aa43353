//! Loader configuration.

use serde::{Deserialize, Serialize};

/// Loader configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Build identifier baked into bundle URLs.
    #[serde(default = "default_build_id")]
    pub build_id: String,

    /// Origin prefix for bundle URLs (e.g. a CDN origin). Empty means
    /// same-origin relative URLs.
    #[serde(default)]
    pub asset_prefix: String,
}

fn default_build_id() -> String {
    "development".to_string()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            build_id: default_build_id(),
            asset_prefix: String::new(),
        }
    }
}

impl LoaderConfig {
    /// Create a config for the given build id.
    pub fn new(build_id: impl Into<String>) -> Self {
        Self {
            build_id: build_id.into(),
            asset_prefix: String::new(),
        }
    }

    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `PAGELOAD_BUILD_ID` | Build identifier |
    /// | `PAGELOAD_ASSET_PREFIX` | Origin prefix for bundle URLs |
    pub fn from_env() -> Self {
        Self {
            build_id: std::env::var("PAGELOAD_BUILD_ID").unwrap_or_else(|_| default_build_id()),
            asset_prefix: std::env::var("PAGELOAD_ASSET_PREFIX").unwrap_or_default(),
        }
    }

    /// Set the build id.
    pub fn with_build_id(mut self, build_id: impl Into<String>) -> Self {
        self.build_id = build_id.into();
        self
    }

    /// Set the asset prefix.
    pub fn with_asset_prefix(mut self, asset_prefix: impl Into<String>) -> Self {
        self.asset_prefix = asset_prefix.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LoaderConfig::default();
        assert_eq!(config.build_id, "development");
        assert_eq!(config.asset_prefix, "");
    }

    #[test]
    fn builder_setters() {
        let config = LoaderConfig::new("abc123").with_asset_prefix("https://cdn.example.com");
        assert_eq!(config.build_id, "abc123");
        assert_eq!(config.asset_prefix, "https://cdn.example.com");
    }
}
