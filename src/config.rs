//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-style.toml` in current directory
//! 4. `~/.config/sql-style/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [rules]
//! disabled = ["Q449"]
//! excepted_names = ["name", "value"]
//!
//! [rules.severity]
//! Q440 = "error"
//! Q441 = "info"
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_STYLE_EXCEPTED_NAMES` | Comma separated keywords exempt from casing |
//! | `SQL_STYLE_DISABLED` | Comma separated codes to disable |

use std::{
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{AppResult, config_error},
    rules::ExceptedNames
};

/// Local configuration file name
pub const LOCAL_CONFIG: &str = ".sql-style.toml";

/// Environment variable holding excepted names
pub const ENV_EXCEPTED_NAMES: &str = "SQL_STYLE_EXCEPTED_NAMES";

/// Environment variable holding disabled codes
pub const ENV_DISABLED: &str = "SQL_STYLE_DISABLED";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub rules: RulesConfig
}

/// Rules configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RulesConfig {
    /// Disabled codes
    #[serde(default)]
    pub disabled:       Vec<String>,
    /// Severity overrides (code -> severity)
    #[serde(default)]
    pub severity:       HashMap<String, String>,
    /// Keywords exempt from the uppercase check
    #[serde(default)]
    pub excepted_names: Vec<String>
}

impl RulesConfig {
    /// Build the excepted name set used by the casing check
    pub fn excepted_names(&self) -> ExceptedNames {
        ExceptedNames::new(&self.excepted_names)
    }
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sql-style.toml)
    /// 3. Config file in home directory (~/.config/sql-style/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-style")
                .join("config.toml");
            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        let local_config = PathBuf::from(LOCAL_CONFIG);
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        if let Ok(names) = env::var(ENV_EXCEPTED_NAMES) {
            config.rules.excepted_names = split_list(&names);
        }

        if let Ok(disabled) = env::var(ENV_DISABLED) {
            config.rules.disabled = split_list(&disabled);
        }

        Ok(config)
    }

    /// Load configuration from one TOML file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }
}

/// Split a comma separated list, dropping blank entries
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a, b,,c "), vec!["a", "b", "c"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_parse_rules() {
        let config = Config::parse(
            r#"
[rules]
disabled = ["Q449"]
excepted_names = ["value"]

[rules.severity]
Q440 = "error"
"#
        )
        .unwrap();
        assert_eq!(config.rules.disabled, vec!["Q449"]);
        assert!(config.rules.excepted_names().contains("VALUE"));
        assert_eq!(
            config.rules.severity.get("Q440").map(String::as_str),
            Some("error")
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Config::parse("[rules\n").is_err());
    }
}
