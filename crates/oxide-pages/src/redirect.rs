//! Ordered regex redirects, consulted before the route tree.

use regex::{Captures, Regex};
use tracing::debug;

use crate::error::{Result, RouteError};

/// A single redirect from a path pattern to a replacement template.
#[derive(Debug, Clone)]
pub struct RedirectRule {
    /// Source pattern as registered.
    from: String,
    /// Replacement template, may reference `$1`, `$2`, ...
    to: String,
    /// Registration sequence number.
    order: usize,
    /// `from`, anchored to match the whole path.
    regex: Regex,
    /// `to` with every `$N` braced as `${N}` for [`Captures::expand`].
    expansion: String,
}

impl RedirectRule {
    fn new(from: &str, to: &str, order: usize) -> Result<Self> {
        if from.is_empty() {
            return Err(RouteError::EmptyRedirectPattern(to.to_string()));
        }
        let regex = Regex::new(&format!("^(?:{from})$"))?;
        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            order,
            regex,
            expansion: brace_group_numbers(to)?,
        })
    }

    /// Returns the source pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.from
    }

    /// Returns the replacement template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.to
    }

    /// Returns the registration sequence number.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Rewrites `path` if this rule matches all of it.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_pages::RedirectRegistry;
    ///
    /// let mut redirects = RedirectRegistry::new();
    /// redirects
    ///     .register("/socials/facebook/([^/]+)", "/socials/meta/$1")
    ///     .unwrap();
    /// let rule = &redirects.rules()[0];
    /// assert_eq!(
    ///     rule.apply("/socials/facebook/feedback").as_deref(),
    ///     Some("/socials/meta/feedback")
    /// );
    /// assert_eq!(rule.apply("/socials/facebook/a/b"), None);
    /// ```
    #[must_use]
    pub fn apply(&self, path: &str) -> Option<String> {
        let captures = self.regex.captures(path)?;
        let mut target = String::new();
        captures.expand(&self.expansion, &mut target);
        Some(target)
    }
}

/// Rewrites `$N` as `${N}` so `$1_old` means group 1 followed by `_old`.
///
/// `$$` escapes and already braced or named references are left alone.
fn brace_group_numbers(template: &str) -> Result<String> {
    let numbered = Regex::new(r"\$(\$|[0-9]+)")?;
    let braced = numbered.replace_all(template, |caps: &Captures<'_>| match &caps[1] {
        "$" => "$$".to_string(),
        index => format!("${{{index}}}"),
    });
    Ok(braced.into_owned())
}

/// Redirect rules in registration order. The first match wins.
#[derive(Debug, Clone, Default)]
pub struct RedirectRegistry {
    rules: Vec<RedirectRule>,
}

impl RedirectRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a redirect from `from` (a regex) to `to` (a template).
    pub fn register(&mut self, from: &str, to: &str) -> Result<()> {
        let rule = RedirectRule::new(from, to, self.rules.len())?;
        debug!(from, to, order = rule.order, "registered redirect");
        self.rules.push(rule);
        Ok(())
    }

    /// Returns the rewritten path for the first rule matching `path`.
    #[must_use]
    pub fn apply(&self, path: &str) -> Option<String> {
        self.rules.iter().find_map(|rule| rule.apply(path))
    }

    /// Returns the rules in the order they are tried.
    #[must_use]
    pub fn rules(&self) -> &[RedirectRule] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no redirect has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
