//! Error types for page loading.

/// Result alias for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Page loading errors.
///
/// `PageLoad` and `Registration` outcomes are cached and replayed verbatim
/// to every future caller of the route until `clear_cache`; `InvalidRoute`
/// is synchronous and never cached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// Route name does not start with `/`.
    #[error("route name should start with a \"/\", got {route:?}")]
    InvalidRoute { route: String },

    /// The bundle fetch failed at the transport level.
    #[error("error when loading route: {route}")]
    PageLoad { route: String },

    /// The loaded bundle failed while registering its page.
    #[error("page registration failed for {route}: {message}")]
    Registration { route: String, message: String },
}

impl LoadError {
    /// Stable error code, suitable for host-side dispatch.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRoute { .. } => "INVALID_ROUTE",
            Self::PageLoad { .. } => "PAGE_LOAD_ERROR",
            Self::Registration { .. } => "REGISTRATION_ERROR",
        }
    }

    /// Route the error concerns.
    pub fn route(&self) -> &str {
        match self {
            Self::InvalidRoute { route }
            | Self::PageLoad { route }
            | Self::Registration { route, .. } => route,
        }
    }
}
