//! Clickbait phrase detection for headlines.
//!
//! A headline is flagged when it matches any pattern in a configurable,
//! case-insensitive list. This is a heuristic demonstration with a handful
//! of stock phrases, not a calibrated classifier.

use regex::RegexSetBuilder;

use crate::{NewsprobeError, Result};

/// Default clickbait phrase patterns.
///
/// Matching is substring-style: a pattern anywhere in the headline counts.
pub const DEFAULT_CLICKBAIT_PATTERNS: &[&str] = &[
    r"you won't believe",
    r"shocking",
    r"OMG",
    r"this changed everything",
    r"top \d+ things",
];

/// Compiled clickbait matcher.
///
/// Patterns are compiled once into a [`regex::RegexSet`]; an invalid pattern
/// surfaces as a [`NewsprobeError::ConfigError`] at construction time rather
/// than at match time.
#[derive(Debug, Clone)]
pub struct ClickbaitDetector {
    patterns: regex::RegexSet,
}

impl ClickbaitDetector {
    /// Compiles a detector from a pattern list.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = RegexSetBuilder::new(patterns)
            .case_insensitive(true)
            .build()
            .map_err(|e| NewsprobeError::ConfigError(format!("invalid clickbait pattern: {}", e)))?;

        Ok(Self { patterns })
    }

    /// Tests a headline against the pattern list.
    ///
    /// Returns true on the first match, false when nothing matches or the
    /// headline is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use newsprobe_core::ClickbaitDetector;
    ///
    /// let detector = ClickbaitDetector::default();
    /// assert!(detector.is_clickbait("SHOCKING new report"));
    /// assert!(!detector.is_clickbait("Quarterly results published"));
    /// ```
    pub fn is_clickbait(&self, headline: &str) -> bool {
        !headline.is_empty() && self.patterns.is_match(headline)
    }
}

impl Default for ClickbaitDetector {
    /// Detector compiled from [`DEFAULT_CLICKBAIT_PATTERNS`].
    fn default() -> Self {
        Self::new(DEFAULT_CLICKBAIT_PATTERNS).expect("default clickbait patterns are valid")
    }
}
