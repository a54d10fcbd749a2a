//! Source credibility lookup for publishing domains.
//!
//! A coarse trust label from static deny-list membership. The list is
//! illustrative configuration, not a real credibility database.

use std::fmt;

use serde::Serialize;
use url::Url;

/// Default deny-list of known-unreliable domains.
pub const DEFAULT_UNRELIABLE_DOMAINS: &[&str] = &["example.com", "another-fake-news.net"];

/// Trust label for a publishing domain.
///
/// Serialized with the wire spellings of the `/analyze` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Credibility {
    /// The host matched the deny-list.
    Unreliable,
    /// The host matched nothing on the deny-list.
    #[serde(rename = "Likely Reliable")]
    LikelyReliable,
    /// The URL could not be parsed, so no host was available to check.
    #[serde(rename = "Source Credibility Unknown")]
    Unknown,
}

impl fmt::Display for Credibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credibility::Unreliable => write!(f, "Unreliable"),
            Credibility::LikelyReliable => write!(f, "Likely Reliable"),
            Credibility::Unknown => write!(f, "Source Credibility Unknown"),
        }
    }
}

/// Labels the credibility of `url`'s host against a deny-list.
///
/// Matching is a case-sensitive substring test on the host, so an entry
/// `example.com` also catches `news.example.com`. A URL that fails to parse
/// or has no host yields [`Credibility::Unknown`] rather than failing the
/// request.
///
/// # Example
///
/// ```rust
/// use newsprobe_core::{Credibility, check_source};
///
/// let deny = ["example.com".to_string()];
/// assert_eq!(check_source("https://example.com/story1", &deny), Credibility::Unreliable);
/// assert_eq!(check_source("https://reuters.com/story1", &deny), Credibility::LikelyReliable);
/// assert_eq!(check_source("not a url", &deny), Credibility::Unknown);
/// ```
pub fn check_source(url: &str, unreliable_domains: &[String]) -> Credibility {
    let Ok(parsed) = Url::parse(url) else {
        return Credibility::Unknown;
    };

    let Some(host) = parsed.host_str() else {
        return Credibility::Unknown;
    };

    if unreliable_domains.iter().any(|domain| host.contains(domain.as_str())) {
        Credibility::Unreliable
    } else {
        Credibility::LikelyReliable
    }
}
