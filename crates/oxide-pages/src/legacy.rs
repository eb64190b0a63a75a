//! Legacy route spellings.
//!
//! Routes and parameter names are canonically kebab-case (`multi-word-folder`).
//! Older sites generated them as camelCase, all-lowercase or snake_case, so
//! when legacy routes are enabled those spellings are accepted as well.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether legacy spellings of route segments are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacyRouteRedirectStrategy {
    /// Accept legacy spellings and expose params under their aliases.
    #[serde(alias = "ALLOW")]
    Allow,
    /// Like [`Allow`](Self::Allow), but log every legacy match.
    #[serde(alias = "WARN")]
    Warn,
    /// Only canonical spellings match.
    #[default]
    #[serde(alias = "DISALLOW")]
    Disallow,
}

impl LegacyRouteRedirectStrategy {
    /// Returns true if legacy spellings should match.
    #[must_use]
    pub const fn allows_legacy(self) -> bool {
        !matches!(self, Self::Disallow)
    }

    /// Returns the strategy name as used in manifests.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Warn => "warn",
            Self::Disallow => "disallow",
        }
    }
}

impl fmt::Display for LegacyRouteRedirectStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegacyRouteRedirectStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "allow" => Ok(Self::Allow),
            "warn" => Ok(Self::Warn),
            "disallow" => Ok(Self::Disallow),
            _ => Err(format!(
                "unknown legacy route strategy `{s}` (expected allow, warn or disallow)"
            )),
        }
    }
}

/// Every spelling of one canonical kebab-case name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyNames {
    /// `multi-word-folder`
    pub kebab: String,
    /// `multiWordFolder`
    pub camel: String,
    /// `multiwordfolder`
    pub lower: String,
    /// `multi_word_folder`
    pub snake: String,
}

impl LegacyNames {
    /// Derives the legacy spellings of a kebab-case name.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_pages::LegacyNames;
    ///
    /// let names = LegacyNames::of("multi-word-folder");
    /// assert_eq!(names.camel, "multiWordFolder");
    /// assert_eq!(names.lower, "multiwordfolder");
    /// assert_eq!(names.snake, "multi_word_folder");
    /// ```
    #[must_use]
    pub fn of(kebab: &str) -> Self {
        let mut words = kebab.split('-');
        let mut camel = words.next().unwrap_or_default().to_string();
        for word in words {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                camel.extend(first.to_uppercase());
                camel.push_str(chars.as_str());
            }
        }

        Self {
            kebab: kebab.to_string(),
            camel,
            lower: kebab.replace('-', ""),
            snake: kebab.replace('-', "_"),
        }
    }

    /// Returns true if `segment` is one of the legacy spellings.
    #[must_use]
    pub fn matches(&self, segment: &str) -> bool {
        self.camel == segment || self.lower == segment || self.snake == segment
    }

    /// Returns the legacy spellings that differ from the canonical name.
    #[must_use]
    pub fn aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<&str> = Vec::with_capacity(3);
        for alias in [&self.camel, &self.lower, &self.snake] {
            if *alias != self.kebab && !aliases.contains(&alias.as_str()) {
                aliases.push(alias.as_str());
            }
        }
        aliases
    }
}
