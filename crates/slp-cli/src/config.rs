//! CLI configuration
//!
//! Loads the layered `slp-config` settings (global file, `slp.toml`, `SLP_*`
//! variables) and folds in the command line flags, which win over all of them.

use anyhow::{Context, Result};
use slp_config::ConfigLoader;
use slp_runtime::RunOptions;
use std::path::{Path, PathBuf};

/// Effective settings for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    pub report_maxargs: bool,
    pub default_program: String,
    pub log_level: String,
    /// Directory holding the `slp.toml` in effect, if any
    pub project_root: Option<PathBuf>,
}

impl Config {
    /// Load configuration for the given working directory
    pub fn load(cwd: &Path) -> Result<Self> {
        let layered = ConfigLoader::new()
            .load_from_directory(cwd)
            .context("Failed to load configuration")?;
        Ok(Self::from_layers(&layered))
    }

    pub fn from_layers(layered: &slp_config::Config) -> Self {
        Self {
            report_maxargs: layered.report_maxargs(),
            default_program: layered.default_program().to_string(),
            log_level: layered.log_level().to_string(),
            project_root: layered.project_root().map(Path::to_path_buf),
        }
    }

    /// Run options after `--no-maxargs`
    pub fn run_options(&self, no_maxargs: bool) -> RunOptions {
        RunOptions {
            report_maxargs: self.report_maxargs && !no_maxargs,
        }
    }

    /// Program to use when none is named on the command line
    pub fn program_or_default(&self, program: Option<String>) -> String {
        program.unwrap_or_else(|| self.default_program.clone())
    }

    /// Log level after `-v` flags (each one raises the level a step)
    pub fn effective_log_level(&self, verbose: u8) -> &str {
        match verbose {
            0 => &self.log_level,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_layers(&slp_config::Config::default())
    }
}
