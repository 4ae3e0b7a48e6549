//! Search filtering of heading text.

use regex::Regex;
use tracing::warn;

#[derive(Clone, Debug)]
/// A compiled heading filter.
pub enum HeadingFilter {
    /// Matches every heading (empty pattern, or a regex that failed to compile).
    All,
    /// Case-insensitive substring match; holds the lowercased pattern.
    Literal(String),
    /// Regular-expression match.
    Regex(Regex),
}

impl HeadingFilter {
    #[must_use]
    /// Compiles `pattern` as a literal or, with `regex` set, as a regular expression.
    ///
    /// An invalid regular expression degrades to matching everything.
    pub fn new(pattern: &str, regex: bool) -> Self {
        if pattern.is_empty() {
            return Self::All;
        }
        if !regex {
            return Self::Literal(pattern.to_lowercase());
        }
        match Regex::new(pattern) {
            Ok(re) => Self::Regex(re),
            Err(e) => {
                warn!(pattern, error = %e, "invalid search pattern, matching all headings");
                Self::All
            }
        }
    }

    #[must_use]
    /// Whether a heading's text passes the filter.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::All => true,
            Self::Literal(needle) => text.to_lowercase().contains(needle.as_str()),
            Self::Regex(re) => re.is_match(text),
        }
    }
}

#[must_use]
/// One-shot form of [`HeadingFilter`]: whether `text` matches `pattern`.
pub fn filter(pattern: &str, text: &str, regex: bool) -> bool {
    HeadingFilter::new(pattern, regex).matches(text)
}

#[cfg(test)]
#[path = "tests/filter.rs"]
mod tests;
