//! Config file discovery.
//!
//! Resolution order (later overrides earlier):
//! 1. `config.toml` in the config directory (`COMPKIT_CONFIG_DIR` or the
//!    platform default), or an explicit path
//! 2. `COMPKIT_*` environment variables
//! 3. CLI arguments (handled externally)

use std::path::{Path, PathBuf};

use crate::{CompkitConfig, ConfigError, Result};

/// Default config filename within the config directory.
const USER_CONFIG_FILE: &str = "config.toml";

/// Application name for platform directory resolution.
const APP_NAME: &str = "compkit";

/// Environment variable to override the config directory.
const CONFIG_DIR_ENV: &str = "COMPKIT_CONFIG_DIR";

/// Where the file layer was looked for.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the config file.
    pub path: PathBuf,
    /// Whether the file was found and loaded.
    pub loaded: bool,
}

/// Result of config discovery and loading.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The resolved configuration, environment overrides included.
    pub config: CompkitConfig,
    /// The file layer, if a path could be determined.
    pub source: Option<ConfigSource>,
    /// Warnings generated during loading (e.g., plaintext tokens).
    pub warnings: Vec<String>,
}

/// Load configuration.
///
/// With `path`, that file is read. A missing explicit file is an error.
/// Without it, `config.toml` in [`xdg_config_dir`] is read if present.
/// Environment overrides are applied last in both cases.
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig> {
    let mut warnings = Vec::new();

    let (mut config, source) = match path {
        Some(path) => {
            let config = load_config_file(path)?;
            let source = ConfigSource {
                path: path.to_path_buf(),
                loaded: true,
            };
            (config, Some(source))
        }
        None => match xdg_config_path() {
            Some(path) if path.is_file() => {
                let config = load_config_file(&path)?;
                (config, Some(ConfigSource { path, loaded: true }))
            }
            Some(path) => (
                CompkitConfig::default(),
                Some(ConfigSource {
                    path,
                    loaded: false,
                }),
            ),
            None => (CompkitConfig::default(), None),
        },
    };

    if config.api.auth_token.is_some()
        && let Some(source) = source.as_ref().filter(|s| s.loaded)
    {
        warnings.push(format!(
            "{} stores api.auth_token in plaintext; consider {} instead",
            source.path.display(),
            crate::API_TOKEN_ENV
        ));
    }

    config.apply_env()?;

    Ok(LoadedConfig {
        config,
        source,
        warnings,
    })
}

/// Load config from a specific file path (no discovery, no env overrides).
pub fn load_config_file(path: &Path) -> Result<CompkitConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    CompkitConfig::from_toml(&contents)
}

/// Get the config file path for compkit.
///
/// `$COMPKIT_CONFIG_DIR/config.toml`, falling back to the platform config
/// directory (`~/.config/compkit/config.toml` on Linux).
pub fn xdg_config_path() -> Option<PathBuf> {
    xdg_config_dir().map(|d| d.join(USER_CONFIG_FILE))
}

/// Get the config directory for compkit.
pub fn xdg_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|d| d.join(APP_NAME))
}
