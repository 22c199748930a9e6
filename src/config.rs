//! Runtime configuration: YAML file plus command-line overrides

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_API_BASE_URL, DEFAULT_GRID_COLUMNS,
    DEFAULT_LOG_LEVEL, DEFAULT_TIMEOUT_SECS,
};

/// Command-line arguments
#[derive(Debug, Default, Parser)]
#[command(name = "mealdb-tui", version, about = "Browse TheMealDB categories and meals in your terminal")]
pub struct Cli {
    /// Path to a YAML config file (default: ~/.mealdb-tui/config.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the meal API
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Tracing filter, e.g. "debug" or "mealdb_tui=trace"
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub grid_columns: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            grid_columns: DEFAULT_GRID_COLUMNS,
            log_level: String::from(DEFAULT_LOG_LEVEL),
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Read a config file. A missing file is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config.normalized())
    }

    /// Resolve the effective config: file (explicit or default) then CLI
    /// overrides. An absent default file yields defaults.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    Config::default()
                }
            }
        };
        Ok(config.with_overrides(cli))
    }

    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.api_base_url {
            self.api_base_url = url.clone();
        }
        if let Some(timeout) = cli.timeout {
            self.request_timeout_secs = timeout;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        while self.api_base_url.ends_with('/') {
            self.api_base_url.pop();
        }
        self.grid_columns = self.grid_columns.max(1);
        self
    }
}
