//! Configuration for the hosting binary
//!
//! Holds the application identity shown in help and version output and the
//! logging verbosity. Only the environment is consulted; there are no
//! configuration files.

use crate::error::CliError;
use std::env;

/// Environment variable that turns on debug logging
pub const DEBUG_ENV: &str = "VOID_DEBUG";

/// Name of the binary, shown in help and version text
pub const BIN_NAME: &str = "void";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Application name used in help and version text
    pub app_name: String,
    /// Application version used in help and version text
    pub app_version: String,
    /// Enable debug logging
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: BIN_NAME.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            debug: false,
        }
    }
}

impl Config {
    /// Create the default configuration, overridden by the environment
    pub fn from_env() -> Result<Self, CliError> {
        let config = Self {
            debug: env::var(DEBUG_ENV).is_ok_and(|value| is_truthy(&value)),
            ..Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), CliError> {
        if self.app_name.trim().is_empty() {
            return Err(CliError::config("application name cannot be empty"));
        }

        if self.app_version.trim().is_empty() {
            return Err(CliError::config("application version cannot be empty"));
        }

        Ok(())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.app_name, BIN_NAME);
        assert_eq!(config.app_version, env!("CARGO_PKG_VERSION"));
        assert!(!config.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_identity_rejected() {
        let blank_name = Config {
            app_name: "  ".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            blank_name.validate(),
            Err(CliError::Config { .. })
        ));

        let blank_version = Config {
            app_version: String::new(),
            ..Config::default()
        };
        assert!(matches!(
            blank_version.validate(),
            Err(CliError::Config { .. })
        ));
    }

    #[test]
    fn test_truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy("TRUE"));
        assert!(is_truthy(" on "));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
    }
}
