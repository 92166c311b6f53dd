//! Desk configuration management.
//!
//! Handles loading of desk configuration from TOML files with environment
//! variable override support.

use advisor_inputs::portfolio::DEFAULT_PORTFOLIO_NOTIONAL_USD;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::session::RESERVED_GROUP;

/// Default configuration file location, relative to the workspace root
pub const DEFAULT_CONFIG_PATH: &str = "demo/data/config/desk_config.toml";

/// A group created at session start
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GroupConfig {
    /// Group name
    pub name: String,

    /// Member client names
    #[serde(default)]
    pub members: Vec<String>,
}

/// Desk configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DeskConfig {
    /// Advisor signing proposal drafts
    #[serde(default = "default_advisor_name")]
    pub advisor_name: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Notional used to value portfolio allocations
    #[serde(default = "default_notional")]
    pub portfolio_notional_usd: f64,

    /// Seed the standard desk groups at session start
    #[serde(default = "default_seed_groups")]
    pub seed_default_groups: bool,

    /// Additional groups created at session start
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

fn default_advisor_name() -> String {
    "John Doe".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_notional() -> f64 {
    DEFAULT_PORTFOLIO_NOTIONAL_USD
}

fn default_seed_groups() -> bool {
    true
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            advisor_name: default_advisor_name(),
            log_level: default_log_level(),
            portfolio_notional_usd: default_notional(),
            seed_default_groups: default_seed_groups(),
            groups: Vec::new(),
        }
    }
}

impl DeskConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, falling back to the default config.
    ///
    /// The load error, if any, is returned alongside the fallback so the
    /// caller can report it.
    pub fn load_or_default(path: &Path) -> (Self, Option<ConfigError>) {
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// Path of the default configuration file
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_PATH)
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(name) = std::env::var("DESK_ADVISOR_NAME") {
            self.advisor_name = name;
        }

        if let Ok(log_level) = std::env::var("DESK_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(notional) = std::env::var("DESK_PORTFOLIO_NOTIONAL") {
            if let Ok(v) = notional.parse() {
                self.portfolio_notional_usd = v;
            }
        }

        if let Ok(seed) = std::env::var("DESK_SEED_GROUPS") {
            self.seed_default_groups = match seed.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => self.seed_default_groups,
            };
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.advisor_name.trim().is_empty() {
            errors.push("advisor_name cannot be empty".to_string());
        }

        if !(self.portfolio_notional_usd.is_finite() && self.portfolio_notional_usd > 0.0) {
            errors.push(format!(
                "portfolio_notional_usd must be a positive amount, got {}",
                self.portfolio_notional_usd
            ));
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.name.trim().is_empty() {
                errors.push("group name cannot be empty".to_string());
            } else if group.name == RESERVED_GROUP {
                errors.push(format!("group name '{}' is reserved", RESERVED_GROUP));
            } else if !seen.insert(group.name.as_str()) {
                errors.push(format!("duplicate group '{}'", group.name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load configuration from file and validate
    pub fn load_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_errors(config: &DeskConfig) -> Vec<String> {
        match config.validate() {
            Err(ConfigError::Validation(errors)) => errors,
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config() {
        let config = DeskConfig::default();
        assert_eq!(config.advisor_name, "John Doe");
        assert_eq!(config.portfolio_notional_usd, 10_000_000.0);
        assert!(config.seed_default_groups);
        assert!(config.groups.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("DESK_ADVISOR_NAME", "Jane Roe");
        std::env::set_var("DESK_SEED_GROUPS", "no");
        let config = DeskConfig::default().with_env_override();
        assert_eq!(config.advisor_name, "Jane Roe");
        assert!(!config.seed_default_groups);
        std::env::remove_var("DESK_ADVISOR_NAME");
        std::env::remove_var("DESK_SEED_GROUPS");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: DeskConfig = toml::from_str(
            r#"
            advisor_name = "Kay Sir"

            [[groups]]
            name = "Round Table"
            members = ["Arthur Pendragon"]
            "#,
        )
        .unwrap();
        assert_eq!(config.advisor_name, "Kay Sir");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.groups.len(), 1);
        assert_eq!(config.groups[0].members, vec!["Arthur Pendragon"]);
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = DeskConfig::default();
        config.log_level = "loud".to_string();
        assert!(validation_errors(&config).iter().any(|e| e.contains("log_level")));
    }

    #[test]
    fn test_validate_notional() {
        for bad in [0.0, -1.0, f64::NAN] {
            let mut config = DeskConfig::default();
            config.portfolio_notional_usd = bad;
            assert!(validation_errors(&config)
                .iter()
                .any(|e| e.contains("portfolio_notional_usd")));
        }
    }

    #[test]
    fn test_validate_groups() {
        let mut config = DeskConfig::default();
        config.groups = vec![
            GroupConfig { name: "".to_string(), members: vec![] },
            GroupConfig { name: RESERVED_GROUP.to_string(), members: vec![] },
            GroupConfig { name: "Watch".to_string(), members: vec![] },
            GroupConfig { name: "Watch".to_string(), members: vec![] },
        ];
        let errors = validation_errors(&config);
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("reserved")));
        assert!(errors.iter().any(|e| e.contains("duplicate")));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = format!("{}", error);
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }
}
