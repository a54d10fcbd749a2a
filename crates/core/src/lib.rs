pub mod analyzer;
pub mod article;
pub mod clickbait;
pub mod config;
pub mod credibility;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod sentiment;

pub use analyzer::Analyzer;
pub use article::{AnalysisReport, SUCCESS_MESSAGE, ScrapedArticle};
pub use clickbait::{ClickbaitDetector, DEFAULT_CLICKBAIT_PATTERNS};
pub use config::{AnalyzerConfig, default_config_path};
pub use credibility::{Credibility, DEFAULT_UNRELIABLE_DOMAINS, check_source};
pub use error::{NewsprobeError, Result};
pub use extract::extract_article;
pub use fetch::FetchConfig;
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use fetch::{fetch_file, fetch_stdin};
pub use sentiment::{
    NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, Sentiment, analyze_sentiment, classify, compound_score,
};
