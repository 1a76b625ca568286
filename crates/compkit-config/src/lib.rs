//! Configuration for the compkit MCP server.
//!
//! Settings come from a TOML file, then environment variables, then CLI
//! flags (applied by the binary):
//!
//! ```toml
//! [api]
//! base_url = "https://components.example.com/api/mcp"
//! timeout_secs = 30
//!
//! [logging]
//! directory = "/var/log/compkit"
//! ```
//!
//! # Environment Variables
//!
//! - `COMPKIT_CONFIG_DIR` - Directory holding `config.toml`
//! - `COMPKIT_API_URL` - Base URL of the component API
//! - `COMPKIT_API_TOKEN` - Bearer token for the component API
//! - `COMPKIT_API_TIMEOUT_SECS` - Per-request timeout in seconds

pub mod discovery;
pub mod error;
pub mod types;

pub use discovery::{
    ConfigSource, LoadedConfig, load_config, load_config_file, xdg_config_dir, xdg_config_path,
};
pub use error::{ConfigError, Result};
pub use types::*;
