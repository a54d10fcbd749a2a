//! Article fetching from URLs, files, and stdin.
//!
//! This module provides functions for retrieving HTML content from
//! various sources: HTTP/HTTPS URLs, local files, and standard input.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Default fetch timeout in seconds.
///
/// The upstream behavior had no bound at all; a fixed bound keeps a stuck
/// fetch from hanging a request indefinitely.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Browser-like User-Agent sent with every fetch.
///
/// Basic bot filters reject obviously non-browser agents, so the default
/// identifies as a common desktop Chrome build.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
/// It is serde-derived so it can live inside an analyzer configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: DEFAULT_TIMEOUT_SECS, user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}

/// Fetches HTML content from a URL.
///
/// This function performs a single HTTP GET request and returns the response
/// body as text. It follows redirects, respects the configured timeout, and
/// uses a browser-like User-Agent for better compatibility. There is no
/// retry: any transport error, timeout, or non-2xx status is a failed fetch.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    use crate::NewsprobeError;
    use reqwest::Client;
    use std::time::Duration;
    use url::Url;

    let parsed_url = Url::parse(url).map_err(|e| NewsprobeError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(NewsprobeError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    tracing::debug!(url = %parsed_url, "fetching article");

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(NewsprobeError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                NewsprobeError::Timeout { timeout: config.timeout }
            } else {
                NewsprobeError::HttpError(e)
            }
        })?;

    let status = response.status();
    tracing::debug!(url = %url, status = %status, "fetch completed");

    if !status.is_success() {
        return Err(NewsprobeError::HttpStatus { status: status.as_u16() });
    }

    let content = response.text().await?;

    Ok(content)
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    use crate::NewsprobeError;

    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(NewsprobeError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("file not found: {}", path_buf.display()),
        )))
    } else {
        fs::read_to_string(&path_buf).map_err(NewsprobeError::from)
    }
}

/// Reads HTML content from standard input.
///
/// This function reads all available input from stdin until EOF.
/// Useful for piping content from other commands.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NewsprobeError;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
        assert!(config.user_agent.contains("Mozilla/5.0"));
    }

    #[test]
    fn test_fetch_config_deserialize_partial() {
        let config: FetchConfig = serde_json::from_str(r#"{"timeout": 5}"#).unwrap();
        assert_eq!(config.timeout, 5);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_invalid() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_url("not-a-url", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(NewsprobeError::InvalidUrl(_))));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_non_2xx_is_http_status() {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            stream
                .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .unwrap();
        });

        let config = FetchConfig::default();
        let url = format!("http://{}/missing", addr);
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_url(&url, &config))
        })
        .join()
        .unwrap();

        server.join().unwrap();
        assert!(matches!(result, Err(NewsprobeError::HttpStatus { status: 404 })));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_stalled_response_is_timeout() {
        use std::io::Read;

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        // Accept the request, then hold the socket open without answering
        // until the client hangs up.
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let mut rest = Vec::new();
            let _ = stream.read_to_end(&mut rest);
        });

        let config = FetchConfig { timeout: 1, ..FetchConfig::default() };
        let url = format!("http://{}/slow", addr);
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_url(&url, &config))
        })
        .join()
        .unwrap();

        server.join().unwrap();
        assert!(matches!(result, Err(NewsprobeError::Timeout { timeout: 1 })));
    }

    #[test]
    fn test_fetch_file_not_found() {
        let result = fetch_file("/nonexistent/path/file.html");
        assert!(matches!(result, Err(NewsprobeError::IoError(_))));
    }

    #[test]
    fn test_fetch_file_reads_content() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("page.html");
        std::fs::write(&path, "<html></html>").unwrap();

        let content = fetch_file(path.to_str().unwrap()).unwrap();
        assert_eq!(content, "<html></html>");
    }

    #[test]
    fn test_error_timeout_message() {
        let err = NewsprobeError::Timeout { timeout: 10 };
        assert!(err.to_string().contains("10"));
    }
}
