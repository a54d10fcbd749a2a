//! The analysis pipeline: fetch, extract, annotate.
//!
//! [`Analyzer`] is the main entry point. One instance is built from an
//! [`AnalyzerConfig`] at startup and shared across requests; it holds no
//! mutable state, so concurrent requests need no coordination.
//!
//! # Example
//!
//! ```rust
//! use newsprobe_core::{Analyzer, AnalyzerConfig};
//!
//! let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
//! let report = analyzer
//!     .analyze_html(
//!         "https://example.com/a",
//!         "<title>Shocking!</title><p>I love this.</p>",
//!     )
//!     .unwrap();
//! assert!(report.clickbait);
//! ```

use crate::article::{AnalysisReport, ScrapedArticle};
use crate::clickbait::ClickbaitDetector;
use crate::config::AnalyzerConfig;
use crate::credibility::check_source;
use crate::extract::extract_article;
use crate::sentiment::analyze_sentiment;
use crate::{NewsprobeError, Result};

/// Stateless article analyzer.
///
/// Construction compiles the clickbait pattern set once; everything else is
/// plain configuration data.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    clickbait: ClickbaitDetector,
}

impl Analyzer {
    /// Builds an analyzer from configuration.
    ///
    /// Fails with [`NewsprobeError::ConfigError`] when a clickbait pattern
    /// is not a valid regular expression.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let clickbait = ClickbaitDetector::new(&config.clickbait_patterns)?;
        Ok(Self { config, clickbait })
    }

    /// The configuration this analyzer was built from.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Fetches `url` and runs the full pipeline on the response body.
    ///
    /// The pipeline is strictly linear: fetch, extract, then the three
    /// annotations. Any fetch failure or an empty extraction ends the
    /// request with an error; there are no retries and no partial results.
    #[cfg(feature = "fetch")]
    pub async fn analyze_url(&self, url: &str) -> Result<AnalysisReport> {
        let html = crate::fetch::fetch_url(url, &self.config.fetch).await?;
        self.analyze_html(url, &html)
    }

    /// Runs the pipeline on already-fetched HTML.
    ///
    /// Used by the CLI for local files and stdin, and anywhere the fetch
    /// step is not wanted. `url` still feeds the credibility check and the
    /// report.
    pub fn analyze_html(&self, url: &str, html: &str) -> Result<AnalysisReport> {
        let article = extract_article(html);

        if !article.has_content() {
            tracing::debug!(url = %url, "extraction yielded no usable headline/body pair");
            return Err(NewsprobeError::EmptyArticle);
        }

        Ok(self.annotate(url, article))
    }

    /// Runs the three independent annotations and assembles the report.
    fn annotate(&self, url: &str, article: ScrapedArticle) -> AnalysisReport {
        let sentiment = analyze_sentiment(&article.body);
        let clickbait = self.clickbait.is_clickbait(&article.headline);
        let credibility = check_source(url, &self.config.unreliable_domains);

        tracing::info!(
            url = %url,
            sentiment = %sentiment,
            clickbait,
            credibility = %credibility,
            "article analyzed"
        );

        AnalysisReport::new(url.to_string(), article, sentiment, clickbait, credibility)
    }
}
