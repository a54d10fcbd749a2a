//! Error types for Newsprobe operations.
//!
//! This module defines the main error type [`NewsprobeError`] which represents
//! all possible errors that can occur during article fetching, extraction,
//! and analysis.
//!
//! # Example
//!
//! ```rust
//! use newsprobe_core::{NewsprobeError, Result};
//!
//! fn require_body(body: &str) -> Result<()> {
//!     if body.is_empty() {
//!         return Err(NewsprobeError::EmptyArticle);
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for article analysis operations.
///
/// This enum represents all possible errors that can occur during
/// HTTP fetching, HTML extraction, and analyzer configuration.
///
/// Fetch failures are deliberately coarse: a connection error, a timeout,
/// and a non-2xx status all end the pipeline the same way, and the HTTP
/// boundary collapses them into a single error record.
#[derive(Error, Debug)]
pub enum NewsprobeError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other transport-level problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Non-success HTTP status.
    ///
    /// Returned when the remote server answers with anything outside 2xx.
    #[error("Server responded with HTTP status {status}")]
    HttpStatus { status: u16 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is missing a scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The page yielded no usable headline/body pair.
    ///
    /// Extraction itself never fails; this error is raised by the analyzer
    /// when both the headline and the body came back empty so no meaningful
    /// annotation is possible.
    #[error("No usable headline or article text could be extracted")]
    EmptyArticle,

    /// Analyzer configuration errors.
    ///
    /// Returned when a configuration file cannot be parsed or a clickbait
    /// pattern is not a valid regular expression.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File and stdin read errors.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for NewsprobeError.
///
/// This is a convenience alias for `std::result::Result<T, NewsprobeError>`.
pub type Result<T> = std::result::Result<T, NewsprobeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NewsprobeError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_timeout_error() {
        let err = NewsprobeError::Timeout { timeout: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_http_status_error() {
        let err = NewsprobeError::HttpStatus { status: 404 };
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_empty_article_error() {
        let err = NewsprobeError::EmptyArticle;
        assert!(err.to_string().contains("headline"));
    }
}
