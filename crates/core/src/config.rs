//! Analyzer configuration loading.
//!
//! The clickbait phrase list and the unreliable-domain list are plain
//! string lists that ship with built-in defaults but can be overridden from
//! a JSON file, so deployments can tune them without recompiling. Fetch
//! settings ride along in the same file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::clickbait::DEFAULT_CLICKBAIT_PATTERNS;
use crate::credibility::DEFAULT_UNRELIABLE_DOMAINS;
use crate::fetch::FetchConfig;
use crate::{NewsprobeError, Result};

/// File name looked up inside the platform config directory.
const CONFIG_FILE_NAME: &str = "config.json";

/// Directory under the platform config root.
const CONFIG_DIR_NAME: &str = "newsprobe";

/// Complete analyzer configuration.
///
/// Every field defaults independently, so a config file may override just
/// one list and inherit the rest.
///
/// # Example
///
/// ```rust
/// use newsprobe_core::AnalyzerConfig;
///
/// let config: AnalyzerConfig =
///     serde_json::from_str(r#"{"unreliable_domains": ["tabloid.example"]}"#).unwrap();
/// assert_eq!(config.unreliable_domains, vec!["tabloid.example"]);
/// assert!(!config.clickbait_patterns.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Case-insensitive regex patterns flagging clickbait headlines.
    pub clickbait_patterns: Vec<String>,

    /// Domains treated as unreliable (substring match on the URL host).
    pub unreliable_domains: Vec<String>,

    /// HTTP fetch settings.
    pub fetch: FetchConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            clickbait_patterns: DEFAULT_CLICKBAIT_PATTERNS.iter().map(|s| s.to_string()).collect(),
            unreliable_domains: DEFAULT_UNRELIABLE_DOMAINS.iter().map(|s| s.to_string()).collect(),
            fetch: FetchConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Loads configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            NewsprobeError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            NewsprobeError::ConfigError(format!("cannot parse {}: {}", path.display(), e))
        })
    }

    /// Loads configuration from the platform config directory, falling back
    /// to defaults when no file exists.
    ///
    /// The lookup path is `<config_dir>/newsprobe/config.json` (for example
    /// `~/.config/newsprobe/config.json` on Linux).
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}

/// Standard location of the config file, when a platform config dir exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists_populated() {
        let config = AnalyzerConfig::default();
        assert!(config.clickbait_patterns.iter().any(|p| p.contains("shocking")));
        assert!(config.unreliable_domains.contains(&"example.com".to_string()));
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "clickbait_patterns": ["doctors hate"],
                "unreliable_domains": ["tabloid.example"],
                "fetch": {"timeout": 3}
            }"#,
        )
        .unwrap();

        let config = AnalyzerConfig::load(&path).unwrap();
        assert_eq!(config.clickbait_patterns, vec!["doctors hate"]);
        assert_eq!(config.unreliable_domains, vec!["tabloid.example"]);
        assert_eq!(config.fetch.timeout, 3);
    }

    #[test]
    fn test_partial_file_inherits_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{"unreliable_domains": ["only.this"]}"#).unwrap();

        let config = AnalyzerConfig::load(&path).unwrap();
        assert_eq!(config.unreliable_domains, vec!["only.this"]);
        assert_eq!(config.clickbait_patterns, AnalyzerConfig::default().clickbait_patterns);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = AnalyzerConfig::load("/nonexistent/config.json");
        assert!(matches!(result, Err(NewsprobeError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, "{ nope").unwrap();

        let result = AnalyzerConfig::load(&path);
        assert!(matches!(result, Err(NewsprobeError::ConfigError(_))));
    }
}
