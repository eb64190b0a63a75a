//! # oxide-pages
//!
//! Page route resolution for file-based web sites.
//!
//! This crate provides:
//! - A route tree with static, dynamic and catch-all segments
//! - Ordered regex redirects, applied before routes
//! - Optional matching of legacy (camelCase, lowercase, snake_case) spellings
//! - JSON route manifests and a small CLI to inspect them
//!
//! ## Quick Start
//!
//! ```
//! use oxide_pages::RouteTree;
//!
//! let mut tree = RouteTree::new();
//! tree.register("/", "Index").unwrap();
//! tree.register("/users/{user}/posts/{post}", "Post").unwrap();
//!
//! let resolved = tree.resolve("/users/123/posts/11", true).unwrap();
//! assert_eq!(*resolved.data, "Post");
//!
//! let params: Vec<_> = resolved.params.iter().collect();
//! assert_eq!(params, vec![("user", "123"), ("post", "11")]);
//! ```
//!
//! ## Route Syntax
//!
//! Routes are `/`-separated. A trailing slash is significant: `/about` and
//! `/about/` are different routes.
//!
//! - `about` - literal segment
//! - `{user}` - dynamic segment, matches exactly one path segment
//! - `{...slug}` - catch-all, matches one or more trailing segments
//! - `{...slug?}` - optional catch-all, also matches an empty trailing segment
//!
//! ```
//! use oxide_pages::RouteTree;
//!
//! let mut tree = RouteTree::new();
//! tree.register("/games/{...slug?}", "Game").unwrap();
//!
//! let resolved = tree.resolve("/games/space-invaders/difficulty/easy", true).unwrap();
//! assert_eq!(resolved.params.get("slug"), Some("space-invaders/difficulty/easy"));
//! assert_eq!(tree.resolve("/games/", true).unwrap().params.get("slug"), Some(""));
//! assert!(tree.resolve("/games", true).is_none());
//! ```
//!
//! ## Redirects
//!
//! ```
//! use oxide_pages::RouteTree;
//!
//! let mut tree = RouteTree::new();
//! tree.register("/socials/meta/{topic}", "Meta").unwrap();
//! tree.register_redirect("/socials/facebook/([^/]+)", "/socials/meta/$1").unwrap();
//!
//! let resolved = tree.resolve("/socials/facebook/feedback", true).unwrap();
//! assert_eq!(resolved.path, "/socials/meta/feedback");
//! assert!(tree.resolve("/socials/facebook/feedback", false).is_none());
//! ```
//!
//! ## Legacy Routes
//!
//! ```
//! use oxide_pages::{LegacyRouteRedirectStrategy, RouteTree, RouterConfig};
//!
//! let config = RouterConfig::new().legacy_routes(LegacyRouteRedirectStrategy::Allow);
//! let mut tree = RouteTree::with_config(config);
//! tree.register("/multi-word-folder/{item-id}", "Item").unwrap();
//!
//! let resolved = tree.resolve("/multiWordFolder/7", true).unwrap();
//! assert_eq!(resolved.params.get("item-id"), Some("7"));
//! assert_eq!(resolved.params.get("itemId"), Some("7"));
//! ```

mod config;
mod error;
mod legacy;
mod manifest;
mod params;
mod redirect;
mod segment;
mod tree;

pub use config::{RouterConfig, DEFAULT_MAX_REDIRECTS};
pub use error::{Result, RouteError};
pub use legacy::{LegacyNames, LegacyRouteRedirectStrategy};
pub use manifest::{PageEntry, RedirectEntry, RouteManifest};
pub use params::RouteParams;
pub use redirect::{RedirectRegistry, RedirectRule};
pub use segment::RouteSegment;
pub use tree::{NodeId, ResolvedEntry, ResolvedRoute, RouteNode, RouteTree};
