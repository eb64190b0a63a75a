//! Route segment classification.

use std::fmt;

use crate::error::{Result, RouteError};

/// One `/`-delimited token of a registered route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteSegment {
    /// A literal segment, matched as-is (or by legacy spelling).
    Static(String),
    /// `{name}`: matches exactly one path segment.
    Dynamic(String),
    /// `{...name}` or `{...name?}`: matches the rest of the path.
    CatchAll {
        /// Parameter name the remainder is captured under.
        name: String,
        /// Whether an empty remainder (a trailing slash) still matches.
        optional: bool,
    },
}

impl RouteSegment {
    /// Classifies a single route token.
    ///
    /// Token syntax:
    /// - `about` - Static segment
    /// - `{id}` - Dynamic segment
    /// - `{...slug}` - Catch-all segment (one or more segments)
    /// - `{...slug?}` - Optional catch-all segment (zero or more segments)
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_pages::RouteSegment;
    ///
    /// let segment = RouteSegment::parse("{...slug?}").unwrap();
    /// assert_eq!(
    ///     segment,
    ///     RouteSegment::CatchAll { name: "slug".to_string(), optional: true }
    /// );
    /// assert_eq!(segment.to_string(), "{...slug?}");
    /// ```
    pub fn parse(token: &str) -> Result<Self> {
        Self::parse_in(token, token)
    }

    /// Classifies `token` as part of `route`, so errors name the whole route.
    pub(crate) fn parse_in(route: &str, token: &str) -> Result<Self> {
        let Some(inner) = token.strip_prefix('{').and_then(|s| s.strip_suffix('}')) else {
            return Ok(Self::Static(token.to_string()));
        };

        let segment = if let Some(rest) = inner.strip_prefix("...") {
            let (name, optional) = rest
                .strip_suffix('?')
                .map_or((rest, false), |name| (name, true));
            Self::CatchAll {
                name: name.to_string(),
                optional,
            }
        } else if inner.ends_with('?') {
            return Err(RouteError::OptionalWithoutCatchAll {
                route: route.to_string(),
                segment: token.to_string(),
            });
        } else {
            Self::Dynamic(inner.to_string())
        };

        if segment.param_name().is_some_and(str::is_empty) {
            return Err(RouteError::EmptyParameterName {
                route: route.to_string(),
                segment: token.to_string(),
            });
        }
        Ok(segment)
    }

    /// Returns the captured parameter name, if this segment captures one.
    #[must_use]
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::Static(_) => None,
            Self::Dynamic(name) | Self::CatchAll { name, .. } => Some(name),
        }
    }

    /// Returns true for literal segments.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }

    /// Returns true for `{...name}` and `{...name?}`.
    #[must_use]
    pub const fn is_catch_all(&self) -> bool {
        matches!(self, Self::CatchAll { .. })
    }
}

impl fmt::Display for RouteSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.write_str(text),
            Self::Dynamic(name) => write!(f, "{{{name}}}"),
            Self::CatchAll {
                name,
                optional: false,
            } => write!(f, "{{...{name}}}"),
            Self::CatchAll {
                name,
                optional: true,
            } => write!(f, "{{...{name}?}}"),
        }
    }
}

/// Splits an absolute route or path into its tokens.
///
/// The leading `/` is dropped; a trailing `/` leaves an empty last token, so
/// `/x` and `/x/` stay distinct.
pub(crate) fn split_path(path: &str) -> Option<Vec<&str>> {
    path.strip_prefix('/').map(|rest| rest.split('/').collect())
}

/// Parses a full route pattern into segments.
pub(crate) fn parse_route(route: &str) -> Result<Vec<RouteSegment>> {
    let tokens =
        split_path(route).ok_or_else(|| RouteError::MissingLeadingSlash(route.to_string()))?;

    let segments = tokens
        .iter()
        .map(|token| RouteSegment::parse_in(route, token))
        .collect::<Result<Vec<_>>>()?;

    if let Some(index) = segments.iter().position(RouteSegment::is_catch_all) {
        if let Some(trailing) = tokens.get(index + 1) {
            return Err(RouteError::CatchAllNotLast {
                route: route.to_string(),
                segment: tokens[index].to_string(),
                trailing: (*trailing).to_string(),
            });
        }
    }

    let mut names: Vec<&str> = Vec::new();
    for name in segments.iter().filter_map(RouteSegment::param_name) {
        if names.contains(&name) {
            return Err(RouteError::DuplicateParameter {
                route: route.to_string(),
                name: name.to_string(),
            });
        }
        names.push(name);
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_segment() {
        let segment = RouteSegment::parse("about").unwrap();
        assert_eq!(segment, RouteSegment::Static("about".to_string()));
        assert!(segment.is_static());
        assert_eq!(segment.param_name(), None);
    }

    #[test]
    fn test_dynamic_segment() {
        let segment = RouteSegment::parse("{user}").unwrap();
        assert_eq!(segment, RouteSegment::Dynamic("user".to_string()));
        assert_eq!(segment.param_name(), Some("user"));
    }

    #[test]
    fn test_catch_all_segments() {
        let required = RouteSegment::parse("{...slug}").unwrap();
        let optional = RouteSegment::parse("{...slug?}").unwrap();
        assert!(required.is_catch_all());
        assert_eq!(
            optional,
            RouteSegment::CatchAll {
                name: "slug".to_string(),
                optional: true
            }
        );
        assert_ne!(required, optional);
    }

    #[test]
    fn test_display_round_trips_tokens() {
        for token in ["b", "{d}", "{...slug}", "{...slug?}", ""] {
            assert_eq!(RouteSegment::parse(token).unwrap().to_string(), token);
        }
    }

    #[test]
    fn test_optional_requires_catch_all() {
        let err = RouteSegment::parse("{id?}").unwrap_err();
        assert!(matches!(err, RouteError::OptionalWithoutCatchAll { .. }));
        assert!(err.to_string().contains("{id?}"));
    }

    #[test]
    fn test_empty_names_rejected() {
        for token in ["{}", "{...}", "{...?}"] {
            assert!(matches!(
                RouteSegment::parse(token),
                Err(RouteError::EmptyParameterName { .. })
            ));
        }
    }

    #[test]
    fn test_unbalanced_braces_are_static() {
        assert!(RouteSegment::parse("{id").unwrap().is_static());
        assert!(RouteSegment::parse("id}").unwrap().is_static());
    }

    #[test]
    fn test_split_path_keeps_trailing_slash() {
        assert_eq!(split_path("/x"), Some(vec!["x"]));
        assert_eq!(split_path("/x/"), Some(vec!["x", ""]));
        assert_eq!(split_path("/"), Some(vec![""]));
        assert_eq!(split_path("x"), None);
    }

    #[test]
    fn test_parse_route_rejects_catch_all_not_last() {
        let err = parse_route("/a/b/{...slug}/etc").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("{...slug}"));
        assert!(message.contains("etc"));
    }

    #[test]
    fn test_parse_route_rejects_repeated_names() {
        let err = parse_route("/a/{x}/b/{...x}").unwrap_err();
        assert!(matches!(err, RouteError::DuplicateParameter { ref name, .. } if name == "x"));
        assert!(parse_route("/a/{x}/b/{y}").is_ok());
    }

    #[test]
    fn test_parse_route_requires_leading_slash() {
        assert!(matches!(
            parse_route("users/{id}"),
            Err(RouteError::MissingLeadingSlash(_))
        ));
    }
}
