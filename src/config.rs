//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-normalizer.toml` in current directory
//! 4. `~/.config/sql-normalizer/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [handlers]
//! # Skip pipeline stages by name. The remaining stages keep their
//! # fixed execution order.
//! disabled = ["regexp-like"]
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_NORMALIZER_CONFIG` | Explicit config file path (`--config`) |
//! | `SQL_NORMALIZER_DISABLED` | Comma-separated disabled stage names |

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub handlers: HandlersConfig
}

/// Handler pipeline configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct HandlersConfig {
    /// Disabled stage names
    #[serde(default)]
    pub disabled: Vec<String>
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` (from `--config` or `SQL_NORMALIZER_CONFIG`) wins
    /// over the search locations and must exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let mut config = if let Some(path) = path {
            Self::read_file(path)?
        } else {
            let mut config = Self::default();

            // Home directory config first, current directory overrides it
            if let Some(home) = env::var_os("HOME") {
                let home_config = PathBuf::from(home)
                    .join(".config")
                    .join("sql-normalizer")
                    .join("config.toml");
                if home_config.exists() {
                    config = Self::read_file(&home_config)?;
                }
            }

            let local_config = PathBuf::from(".sql-normalizer.toml");
            if local_config.exists() {
                config = Self::read_file(&local_config)?;
            }

            config
        };

        // Override with environment variables
        if let Ok(disabled) = env::var("SQL_NORMALIZER_DISABLED") {
            config.handlers.disabled = disabled
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        Ok(config)
    }

    fn read_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            config_error(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| config_error(format!("Invalid config file '{}': {}", path.display(), e)))
    }
}
