//! Project Configuration (slp.toml)
//!
//! Handles per-directory configuration stored in `slp.toml`.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Log levels accepted by `[logging] level` and `SLP_LOG_LEVEL`
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Project configuration from slp.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Run settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<RunConfig>,

    /// Logging settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
}

/// `[run]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Print the maxargs line before running (default: true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_maxargs: Option<bool>,

    /// Sample executed when `slp run` gets no program name (default: "prog")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_program: Option<String>,
}

/// `[logging]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace (default: warn)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl ProjectConfig {
    /// Load project configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the project configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(run) = &self.run {
            run.validate()?;
        }
        if let Some(logging) = &self.logging {
            logging.validate()?;
        }
        Ok(())
    }

    pub fn report_maxargs(&self) -> Option<bool> {
        self.run.as_ref().and_then(|r| r.report_maxargs)
    }

    pub fn default_program(&self) -> Option<&str> {
        self.run.as_ref().and_then(|r| r.default_program.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    /// Merge another project config into this one
    /// Other config takes precedence for non-None values
    pub fn merge(&mut self, other: &ProjectConfig) {
        if let Some(run) = &other.run {
            self.run.get_or_insert_with(Default::default).merge(run);
        }
        if let Some(logging) = &other.logging {
            self.logging
                .get_or_insert_with(Default::default)
                .merge(logging);
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(program) = &self.default_program {
            validate_program_name("run.default_program", program)?;
        }
        Ok(())
    }

    pub fn merge(&mut self, other: &RunConfig) {
        if other.report_maxargs.is_some() {
            self.report_maxargs = other.report_maxargs;
        }
        if other.default_program.is_some() {
            self.default_program = other.default_program.clone();
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(level) = &self.level {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }

    pub fn merge(&mut self, other: &LoggingConfig) {
        if other.level.is_some() {
            self.level = other.level.clone();
        }
    }
}

/// Reject anything outside [`LOG_LEVELS`]
pub(crate) fn validate_log_level(field: &str, level: &str) -> ConfigResult<()> {
    if !LOG_LEVELS.contains(&level) {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("must be one of {}, got '{}'", LOG_LEVELS.join(", "), level),
        });
    }
    Ok(())
}

pub(crate) fn validate_program_name(field: &str, program: &str) -> ConfigResult<()> {
    if program.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: "program name cannot be empty".to_string(),
        });
    }
    Ok(())
}
