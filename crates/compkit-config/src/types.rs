//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/mcp";

/// Environment variable holding the component API base URL.
pub const API_URL_ENV: &str = "COMPKIT_API_URL";

/// Environment variable holding the component API bearer token.
pub const API_TOKEN_ENV: &str = "COMPKIT_API_TOKEN";

/// Environment variable holding the per-request timeout in seconds.
pub const API_TIMEOUT_ENV: &str = "COMPKIT_API_TIMEOUT_SECS";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompkitConfig {
    /// Component API connection.
    pub api: ApiConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

impl CompkitConfig {
    /// Parse a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply `COMPKIT_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|var| std::env::var(var).ok())
    }

    /// Apply overrides using a custom variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(API_URL_ENV) {
            self.api.base_url = url;
        }
        if let Some(token) = get(API_TOKEN_ENV) {
            self.api.auth_token = Some(token);
        }
        if let Some(raw) = get(API_TIMEOUT_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidEnv {
                var: API_TIMEOUT_ENV.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            })?;
            self.api.timeout_secs = Some(secs);
        }
        Ok(())
    }
}

/// Component API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL all endpoints are resolved against.
    pub base_url: String,

    /// Bearer token. Prefer `COMPKIT_API_TOKEN` over storing it here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// Per-request timeout. Unset means wait indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            auth_token: None,
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Timeout as a duration. Zero is treated as unset.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// Log output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for the rotating JSON log. Defaults to `<config dir>/logs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = CompkitConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert!(config.api.auth_token.is_none());
        assert!(config.api.timeout().is_none());
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = CompkitConfig::from_toml(
            r#"
            [api]
            timeout_secs = 15
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_parse_full_toml() {
        let config = CompkitConfig::from_toml(
            r#"
            [api]
            base_url = "https://components.example.com/api/mcp"
            auth_token = "abc"

            [logging]
            directory = "/tmp/compkit-logs"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://components.example.com/api/mcp");
        assert_eq!(config.api.auth_token.as_deref(), Some("abc"));
        assert_eq!(
            config.logging.directory,
            Some(PathBuf::from("/tmp/compkit-logs"))
        );
    }

    #[test]
    fn test_parse_error() {
        let err = CompkitConfig::from_toml("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_timeout_is_unset() {
        let api = ApiConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(api.timeout().is_none());
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            (API_URL_ENV, "https://api.example.com"),
            (API_TOKEN_ENV, "tok"),
            (API_TIMEOUT_ENV, "20"),
        ]);
        let mut config = CompkitConfig::default();
        config.apply_env_with(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.auth_token.as_deref(), Some("tok"));
        assert_eq!(config.api.timeout_secs, Some(20));
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let vars = env(&[(API_URL_ENV, "  ")]);
        let mut config = CompkitConfig::default();
        config.apply_env_with(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_invalid_timeout_env() {
        let vars = env(&[(API_TIMEOUT_ENV, "soon")]);
        let mut config = CompkitConfig::default();
        let err = config
            .apply_env_with(|k| vars.get(k).cloned())
            .unwrap_err();
        assert!(err.to_string().contains(API_TIMEOUT_ENV));
    }
}
