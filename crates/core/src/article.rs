//! Article data types: the scraped fields and the final analysis report.
//!
//! This module defines [`ScrapedArticle`], the transient headline/body pair
//! produced by extraction, and [`AnalysisReport`], the complete result of
//! one analysis shaped for the JSON wire format.

use serde::Serialize;

use crate::credibility::Credibility;
use crate::sentiment::Sentiment;

/// Status message attached to every successful report.
pub const SUCCESS_MESSAGE: &str = "Article analyzed successfully";

/// The headline and body text recovered from one page.
///
/// Lives only for the duration of a single request; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScrapedArticle {
    /// Extracted headline, possibly empty.
    pub headline: String,
    /// Concatenated paragraph text, possibly empty.
    pub body: String,
}

impl ScrapedArticle {
    /// Whether the article carries enough text to analyze.
    ///
    /// Both fields must be non-empty. A page that yields a headline with no
    /// paragraphs (or paragraphs under an unrecoverable title) is treated as
    /// a failed scrape rather than analyzed half-blind.
    pub fn has_content(&self) -> bool {
        !self.headline.is_empty() && !self.body.is_empty()
    }
}

/// The complete result of analyzing one article.
///
/// Field names and label spellings follow the JSON contract of the
/// `/analyze` endpoint.
///
/// # Example
///
/// ```rust
/// use newsprobe_core::{AnalysisReport, Credibility, ScrapedArticle, Sentiment};
///
/// let article = ScrapedArticle { headline: "Hi".into(), body: "Text.".into() };
/// let report = AnalysisReport::new(
///     "https://example.com/a".into(),
///     article,
///     Sentiment::Neutral,
///     false,
///     Credibility::Unreliable,
/// );
/// assert_eq!(report.message, "Article analyzed successfully");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// The URL that was analyzed.
    pub url: String,

    /// Extracted headline.
    pub headline: String,

    /// Extracted article body text.
    #[serde(rename = "article_text")]
    pub body: String,

    /// Sentiment label for the body text.
    pub sentiment: Sentiment,

    /// Whether the headline matched a clickbait pattern.
    pub clickbait: bool,

    /// Trust label for the publishing domain.
    pub source_credibility: Credibility,

    /// Human-readable status message.
    pub message: String,
}

impl AnalysisReport {
    /// Assembles a report from the scraped article and the three annotations.
    pub fn new(
        url: String,
        article: ScrapedArticle,
        sentiment: Sentiment,
        clickbait: bool,
        source_credibility: Credibility,
    ) -> Self {
        Self {
            url,
            headline: article.headline,
            body: article.body,
            sentiment,
            clickbait,
            source_credibility,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Gets the report as structured JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> AnalysisReport {
        AnalysisReport::new(
            "https://example.com/story".to_string(),
            ScrapedArticle { headline: "Headline".to_string(), body: "Body text.".to_string() },
            Sentiment::Positive,
            true,
            Credibility::Unreliable,
        )
    }

    #[test]
    fn test_has_content_requires_both_fields() {
        let both = ScrapedArticle { headline: "h".into(), body: "b".into() };
        let headline_only = ScrapedArticle { headline: "h".into(), body: String::new() };
        let body_only = ScrapedArticle { headline: String::new(), body: "b".into() };
        let neither = ScrapedArticle::default();

        assert!(both.has_content());
        assert!(!headline_only.has_content());
        assert!(!body_only.has_content());
        assert!(!neither.has_content());
    }

    #[test]
    fn test_report_wire_field_names() {
        let json = sample_report().to_json();

        assert_eq!(json["url"], "https://example.com/story");
        assert_eq!(json["headline"], "Headline");
        assert_eq!(json["article_text"], "Body text.");
        assert_eq!(json["sentiment"], "Positive");
        assert_eq!(json["clickbait"], true);
        assert_eq!(json["source_credibility"], "Unreliable");
        assert_eq!(json["message"], SUCCESS_MESSAGE);
    }

    #[test]
    fn test_report_has_no_body_field_on_wire() {
        let json = sample_report().to_json();
        assert!(json.get("body").is_none());
    }
}
