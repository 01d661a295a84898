//! Configuration Loader
//!
//! Handles loading and merging configuration from multiple sources with proper precedence.

use crate::global::GlobalConfig;
use crate::project::{validate_log_level, validate_program_name, ProjectConfig};
use crate::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};

/// Project configuration file name
pub const PROJECT_CONFIG_FILE: &str = "slp.toml";

pub const ENV_REPORT_MAXARGS: &str = "SLP_REPORT_MAXARGS";
pub const ENV_LOG_LEVEL: &str = "SLP_LOG_LEVEL";
pub const ENV_DEFAULT_PROGRAM: &str = "SLP_DEFAULT_PROGRAM";

pub const DEFAULT_REPORT_MAXARGS: bool = true;
pub const DEFAULT_PROGRAM: &str = "prog";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration loader
///
/// Loads configuration from multiple sources and merges them with proper precedence:
/// 1. Global config (~/.slp/config.toml) - lowest priority
/// 2. Project config (./slp.toml) - overrides global
/// 3. Environment variables (SLP_*) - overrides project
/// 4. CLI flags - highest priority (handled by caller)
pub struct ConfigLoader {
    /// Cached global config path
    global_config_path: Option<PathBuf>,
}

/// Merged configuration result
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Project configuration, with environment overrides applied
    pub project: ProjectConfig,

    /// Global configuration
    pub global: GlobalConfig,

    /// Project root directory (where slp.toml was found)
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            global_config_path: None,
        }
    }

    /// Create a loader that reads the global layer from `path` instead of the home directory
    pub fn with_global_config_path(path: impl Into<PathBuf>) -> Self {
        Self {
            global_config_path: Some(path.into()),
        }
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find slp.toml, then loads and merges
    /// global config if it exists.
    pub fn load_from_directory(&mut self, start_dir: &Path) -> ConfigResult<Config> {
        let (project_root, project_config) = self.find_project_config(start_dir)?;
        let global_config = self.load_global_config()?;
        let project_config = self.apply_env_overrides(project_config)?;

        Ok(Config {
            project: project_config,
            global: global_config,
            project_root,
        })
    }

    /// Load configuration from a specific project config file
    pub fn load_from_file(&mut self, config_path: &Path) -> ConfigResult<Config> {
        let project_config = ProjectConfig::load_from_file(config_path)?;
        let global_config = self.load_global_config()?;
        let project_config = self.apply_env_overrides(project_config)?;

        let project_root = config_path.parent().map(|p| p.to_path_buf());

        Ok(Config {
            project: project_config,
            global: global_config,
            project_root,
        })
    }

    /// Find project configuration by walking up directory tree
    ///
    /// Returns (project_root, project_config); both default when nothing is found
    fn find_project_config(
        &self,
        start_dir: &Path,
    ) -> ConfigResult<(Option<PathBuf>, ProjectConfig)> {
        for dir in start_dir.ancestors() {
            let config_path = dir.join(PROJECT_CONFIG_FILE);
            if config_path.is_file() {
                let project_config = ProjectConfig::load_from_file(&config_path)?;
                return Ok((Some(dir.to_path_buf()), project_config));
            }
        }
        Ok((None, ProjectConfig::default()))
    }

    /// Load global configuration from ~/.slp/config.toml
    ///
    /// A missing file or home directory yields the default; a malformed file is an error.
    fn load_global_config(&mut self) -> ConfigResult<GlobalConfig> {
        let path = match &self.global_config_path {
            Some(path) => path.clone(),
            None => match GlobalConfig::global_config_path() {
                Ok(path) => {
                    self.global_config_path = Some(path.clone());
                    path
                }
                Err(ConfigError::HomeNotFound) => return Ok(GlobalConfig::default()),
                Err(e) => return Err(e),
            },
        };

        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        GlobalConfig::load_from_file(&path)
    }

    /// Apply environment variable overrides to project config
    ///
    /// Recognised: SLP_REPORT_MAXARGS, SLP_LOG_LEVEL, SLP_DEFAULT_PROGRAM
    fn apply_env_overrides(&self, mut config: ProjectConfig) -> ConfigResult<ProjectConfig> {
        if let Ok(value) = env::var(ENV_REPORT_MAXARGS) {
            let report = parse_bool(ENV_REPORT_MAXARGS, &value)?;
            config.run.get_or_insert_with(Default::default).report_maxargs = Some(report);
        }

        if let Ok(level) = env::var(ENV_LOG_LEVEL) {
            let level = level.to_lowercase();
            validate_log_level(ENV_LOG_LEVEL, &level)?;
            config.logging.get_or_insert_with(Default::default).level = Some(level);
        }

        if let Ok(program) = env::var(ENV_DEFAULT_PROGRAM) {
            validate_program_name(ENV_DEFAULT_PROGRAM, &program)?;
            config.run.get_or_insert_with(Default::default).default_program = Some(program);
        }

        Ok(config)
    }

    /// Get the global configuration directory (~/.slp)
    pub fn global_config_dir() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(home.join(".slp"))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Whether to print the maxargs line (env/project > global > default)
    pub fn report_maxargs(&self) -> bool {
        self.project
            .report_maxargs()
            .or_else(|| self.global.report_maxargs())
            .unwrap_or(DEFAULT_REPORT_MAXARGS)
    }

    /// Sample used when no program name is given
    pub fn default_program(&self) -> &str {
        self.project
            .default_program()
            .or_else(|| self.global.default_program())
            .unwrap_or(DEFAULT_PROGRAM)
    }

    /// Effective log level
    pub fn log_level(&self) -> &str {
        self.project
            .log_level()
            .or_else(|| self.global.log_level())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Get the project root directory
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// Check if an slp.toml was found
    pub fn is_project(&self) -> bool {
        self.project_root.is_some()
    }
}

fn parse_bool(field: &str, value: &str) -> ConfigResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("expected true/false, got '{}'", other),
        }),
    }
}
