use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::validation::LintConfig;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Print every parsed entry before linting (parser debugging)
    #[serde(default)]
    pub show_parsed_entries: bool,

    /// Token-class switches for the linter
    #[serde(default)]
    pub lint: LintConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if !self.lint.flag_tokens && !self.lint.format_tokens {
            return Err(anyhow!(
                "Every token class is disabled; enable flag_tokens or format_tokens"
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            show_parsed_entries: false,
            lint: LintConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
