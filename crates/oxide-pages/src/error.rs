//! Error types for route registration and resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Route-tree errors.
///
/// Registration errors are structural: they point at a mistake in the route
/// declarations and should abort startup. A path that simply does not resolve
/// is not an error; resolution returns `None` instead.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Route patterns must be absolute.
    #[error("route `{0}` must start with '/'")]
    MissingLeadingSlash(String),

    /// A `{}` placeholder reached the tree without a resolved name.
    #[error("route `{route}`: segment `{segment}` has an empty parameter name")]
    EmptyParameterName {
        /// The route being registered.
        route: String,
        /// The offending token.
        segment: String,
    },

    /// `{name?}` is only valid as `{...name?}`.
    #[error(
        "route `{route}`: optional segment `{segment}` must be a catch-all (`{{...name?}}`)"
    )]
    OptionalWithoutCatchAll {
        /// The route being registered.
        route: String,
        /// The offending token.
        segment: String,
    },

    /// A catch-all segment was followed by more segments.
    #[error("route `{route}`: catch-all segment `{segment}` must be last, but is followed by `{trailing}`")]
    CatchAllNotLast {
        /// The route being registered.
        route: String,
        /// The catch-all token.
        segment: String,
        /// The first token after it.
        trailing: String,
    },

    /// Two segments of one route capture under the same name.
    #[error("route `{route}`: parameter `{name}` is captured more than once")]
    DuplicateParameter {
        /// The route being registered.
        route: String,
        /// The repeated parameter name.
        name: String,
    },

    /// Static and dynamic segments cannot share a parent node.
    #[error("route `{route}`: segment `{segment}` cannot coexist with sibling(s) {siblings}")]
    SiblingConflict {
        /// The route being registered.
        route: String,
        /// The token that could not be inserted.
        segment: String,
        /// The conflicting siblings already in the tree, each in backticks.
        siblings: String,
    },

    /// Redirect rules need a pattern to match against.
    #[error("redirect to `{0}` has an empty source pattern")]
    EmptyRedirectPattern(String),

    /// The redirect source pattern is not a valid regex.
    #[error("invalid redirect pattern: {0}")]
    InvalidRedirect(#[from] regex::Error),

    /// Redirects kept matching past the configured limit.
    #[error("redirect chain starting at `{path}` exceeded {limit} hops")]
    RedirectLimitExceeded {
        /// The path resolution started from.
        path: String,
        /// The configured hop limit.
        limit: usize,
    },

    /// A captured parameter was required but not present.
    #[error("missing route parameter: {0}")]
    MissingParameter(String),

    /// The route manifest could not be read.
    #[error("failed to read manifest '{path}': {source}")]
    ManifestRead {
        /// Path to the manifest file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The route manifest is not valid JSON for the expected shape.
    #[error("invalid manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),
}

/// Result type alias for route-tree operations.
pub type Result<T> = std::result::Result<T, RouteError>;
