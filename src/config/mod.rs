//! Configuration management for newsrelay.
//!
//! Configuration is built once at startup from built-in defaults, an optional
//! TOML file and a handful of environment variables, then handed to each
//! component explicitly.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Webhook URL for publishing.
pub const ENV_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";
/// Token for the remote state document.
pub const ENV_STATE_TOKEN: &str = "GIST_TOKEN";
/// Identifier of the remote state document.
pub const ENV_STATE_ID: &str = "GIST_ID";
/// Overrides the source feed URL.
pub const ENV_FEED_URL: &str = "NEWSRELAY_FEED_URL";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub webhook: WebhookConfig,
    pub state: StateConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub url: String,
    /// Entries taken from the head of the feed per run
    pub max_articles: usize,
    /// Summary length in characters before the ellipsis is appended
    pub summary_max_chars: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: "https://gigazine.net/news/rss_2.0/".to_string(),
            max_articles: 10,
            summary_max_chars: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Publishing is disabled when unset.
    pub url: Option<String>,
    pub color: u32,
    pub footer: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            color: 0xFF6600,
            footer: "GIGAZINE".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    pub token: Option<String>,
    pub gist_id: Option<String>,
    pub filename: String,
    pub api_base: String,
    /// Maximum number of posted IDs kept in the state document
    pub history_limit: usize,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            token: None,
            gist_id: None,
            filename: "gigazine_state.json".to_string(),
            api_base: "https://api.github.com".to_string(),
            history_limit: 100,
        }
    }
}

impl StateConfig {
    /// Token and document ID, if both are present.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.token.as_deref(), self.gist_id.as_deref()) {
            (Some(token), Some(id)) => Some((token, id)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("newsrelay/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default path is read
    /// when present and skipped otherwise. Environment variables are applied
    /// last and the result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/newsrelay/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("newsrelay").join("config.toml"))
    }

    /// Override fields from environment-style lookups. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_WEBHOOK_URL) {
            self.webhook.url = Some(url);
        }
        if let Some(token) = get(ENV_STATE_TOKEN) {
            self.state.token = Some(token);
        }
        if let Some(id) = get(ENV_STATE_ID) {
            self.state.gist_id = Some(id);
        }
        if let Some(url) = get(ENV_FEED_URL) {
            self.feed.url = url;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.max_articles == 0 {
            return Err(ConfigError::Invalid("feed.max_articles must be at least 1".into()));
        }
        if self.state.history_limit == 0 {
            return Err(ConfigError::Invalid("state.history_limit must be at least 1".into()));
        }

        check_url("feed.url", &self.feed.url)?;
        check_url("state.api_base", &self.state.api_base)?;
        if let Some(url) = &self.webhook.url {
            check_url("webhook.url", url)?;
        }

        Ok(())
    }
}

fn check_url(field: &str, value: &str) -> Result<(), ConfigError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::Invalid(format!("{} is not a valid URL ({}): {}", field, value, e)))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.feed.max_articles, 10);
        assert_eq!(config.feed.summary_max_chars, 200);
        assert_eq!(config.webhook.color, 0xFF6600);
        assert_eq!(config.state.history_limit, 100);
        assert_eq!(config.state.filename, "gigazine_state.json");
        assert!(config.webhook.url.is_none());
        assert!(config.state.credentials().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[webhook]
color = 0x00FF00
footer = "Example News"

[state]
history_limit = 50
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.webhook.color, 0x00FF00);
        assert_eq!(config.webhook.footer, "Example News");
        assert_eq!(config.state.history_limit, 50);
        // Default value
        assert_eq!(config.feed.max_articles, 10);
        assert_eq!(config.state.api_base, "https://api.github.com");
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.feed.url, FeedConfig::default().url);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env(lookup_from(&[
            (ENV_WEBHOOK_URL, "https://discord.com/api/webhooks/1/abc"),
            (ENV_STATE_TOKEN, "secret"),
            (ENV_STATE_ID, "deadbeef"),
        ]));

        assert_eq!(
            config.webhook.url.as_deref(),
            Some("https://discord.com/api/webhooks/1/abc")
        );
        assert_eq!(config.state.credentials(), Some(("secret", "deadbeef")));
    }

    #[test]
    fn test_empty_env_values_are_unset() {
        let mut config = Config::default();
        config.apply_env(lookup_from(&[(ENV_WEBHOOK_URL, ""), (ENV_STATE_TOKEN, "  ")]));

        assert!(config.webhook.url.is_none());
        assert!(config.state.token.is_none());
    }

    #[test]
    fn test_credentials_require_both() {
        let mut config = Config::default();
        config.apply_env(lookup_from(&[(ENV_STATE_TOKEN, "secret")]));
        assert!(config.state.credentials().is_none());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[feed]\nurl = \"https://example.com/rss\"\nmax_articles = 5").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.feed.url, "https://example.com/rss");
        assert_eq!(config.feed.max_articles, 5);
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[feed\nurl = ").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = Config::default();
        config.feed.max_articles = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.state.history_limit = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_bad_webhook_url() {
        let mut config = Config::default();
        config.webhook.url = Some("not a url".into());
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
