use crate::error::{Result, VersionError};
use regex::Regex;

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pattern: String,
    matcher: Regex,
}

impl TagPattern {
    /// Compile a tag pattern
    ///
    /// The pattern must contain a `{version}` placeholder; every other
    /// character is matched literally.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern.contains(PLACEHOLDER) {
            return Err(VersionError::config(format!(
                "tag pattern '{}' must contain {} placeholder",
                pattern, PLACEHOLDER
            )));
        }

        // Escape everything, then let the placeholder capture the version text
        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replacen(r"\{version\}", r"(?P<version>.+)", 1);
        let matcher = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| VersionError::config(format!("invalid tag pattern '{}': {}", pattern, e)))?;

        Ok(TagPattern { pattern, matcher })
    }

    /// The pattern as written
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Extract the version portion of `tag`, or `None` if the tag doesn't match
    ///
    /// Example: pattern="release-{version}", tag="release-1.2.3" -> "1.2.3"
    pub fn extract<'t>(&self, tag: &'t str) -> Option<&'t str> {
        self.matcher
            .captures(tag)
            .and_then(|caps| caps.name("version"))
            .map(|m| m.as_str())
    }
}
