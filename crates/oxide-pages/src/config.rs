//! Route tree configuration.

use serde::{Deserialize, Serialize};

use crate::legacy::LegacyRouteRedirectStrategy;

/// Default bound on redirect hops during a single resolution.
pub const DEFAULT_MAX_REDIRECTS: usize = 16;

/// Settings that govern how a [`RouteTree`](crate::RouteTree) matches paths.
///
/// These are fixed when the tree is built and do not change the stored
/// routes, only how paths are matched against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Whether legacy spellings of route segments are accepted.
    pub legacy_routes: LegacyRouteRedirectStrategy,
    /// Maximum number of redirects followed before resolution fails.
    pub max_redirects: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            legacy_routes: LegacyRouteRedirectStrategy::default(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl RouterConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the legacy route strategy.
    #[must_use]
    pub const fn legacy_routes(mut self, strategy: LegacyRouteRedirectStrategy) -> Self {
        self.legacy_routes = strategy;
        self
    }

    /// Sets the redirect hop limit.
    #[must_use]
    pub const fn max_redirects(mut self, limit: usize) -> Self {
        self.max_redirects = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RouterConfig::new();
        assert_eq!(config.legacy_routes, LegacyRouteRedirectStrategy::Disallow);
        assert_eq!(config.max_redirects, DEFAULT_MAX_REDIRECTS);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RouterConfig = serde_json::from_str(r#"{"legacy_routes": "allow"}"#).unwrap();
        assert_eq!(config.legacy_routes, LegacyRouteRedirectStrategy::Allow);
        assert_eq!(config.max_redirects, DEFAULT_MAX_REDIRECTS);
    }

    #[test]
    fn test_builder() {
        let config = RouterConfig::new()
            .legacy_routes(LegacyRouteRedirectStrategy::Warn)
            .max_redirects(3);
        assert_eq!(config.legacy_routes, LegacyRouteRedirectStrategy::Warn);
        assert_eq!(config.max_redirects, 3);
    }
}
