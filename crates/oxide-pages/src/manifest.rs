//! JSON route manifests.
//!
//! A manifest lists the pages and redirects of a site together with the
//! router settings, in the order they should be registered:
//!
//! ```json
//! {
//!   "config": { "legacy_routes": "allow", "max_redirects": 16 },
//!   "routes": [ { "route": "/users/{user}", "page": "UserPage" } ],
//!   "redirects": [ { "from": "/old/(.*)", "to": "/new/$1" } ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::RouterConfig;
use crate::error::{Result, RouteError};
use crate::tree::RouteTree;

/// A page registered at a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Route pattern, e.g. `/users/{user}`.
    pub route: String,
    /// Page identifier stored as the route's data.
    pub page: String,
}

/// A redirect rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectEntry {
    /// Regex matched against the whole path.
    pub from: String,
    /// Replacement template.
    pub to: String,
}

/// Routes, redirects and settings for one site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteManifest {
    /// Router settings.
    pub config: RouterConfig,
    /// Pages, registered in order.
    pub routes: Vec<PageEntry>,
    /// Redirects, tried in order.
    pub redirects: Vec<RedirectEntry>,
}

impl RouteManifest {
    /// Parses a manifest from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| RouteError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            routes = manifest.routes.len(),
            redirects = manifest.redirects.len(),
            "loaded route manifest"
        );
        Ok(manifest)
    }

    /// Builds a route tree, stopping at the first invalid entry.
    pub fn build(&self) -> Result<RouteTree<String>> {
        let mut tree = RouteTree::with_config(self.config);
        for entry in &self.routes {
            tree.register(&entry.route, entry.page.clone())?;
        }
        for entry in &self.redirects {
            tree.register_redirect(&entry.from, &entry.to)?;
        }
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legacy::LegacyRouteRedirectStrategy;

    const MANIFEST: &str = r#"{
        "config": { "legacy_routes": "allow" },
        "routes": [
            { "route": "/", "page": "Index" },
            { "route": "/users/{user}", "page": "User" }
        ],
        "redirects": [
            { "from": "/people/(.*)", "to": "/users/$1" }
        ]
    }"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = RouteManifest::from_json(MANIFEST).unwrap();
        assert_eq!(
            manifest.config.legacy_routes,
            LegacyRouteRedirectStrategy::Allow
        );
        assert_eq!(manifest.routes.len(), 2);
        assert_eq!(manifest.redirects[0].to, "/users/$1");
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = RouteManifest::from_json("{}").unwrap();
        assert_eq!(manifest, RouteManifest::default());
        assert!(manifest.build().unwrap().routes().is_empty());
    }

    #[test]
    fn test_build_manifest() {
        let tree = RouteManifest::from_json(MANIFEST).unwrap().build().unwrap();
        let resolved = tree.resolve("/people/ada", true).unwrap();
        assert_eq!(resolved.data, "User");
        assert_eq!(resolved.params.get("user"), Some("ada"));
        assert_eq!(tree.config().legacy_routes, LegacyRouteRedirectStrategy::Allow);
    }

    #[test]
    fn test_build_reports_structural_errors() {
        let manifest = RouteManifest::from_json(
            r#"{ "routes": [
                { "route": "/a/b/c", "page": "C" },
                { "route": "/a/{d}", "page": "D" }
            ] }"#,
        )
        .unwrap();
        assert!(matches!(
            manifest.build(),
            Err(RouteError::SiblingConflict { .. })
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            RouteManifest::from_json("{ \"routes\": 3 }"),
            Err(RouteError::ManifestParse(_))
        ));
    }
}
