//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Storage database path
    pub db: Option<PathBuf>,

    /// Directory export files are written to
    pub export_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/linknotes/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("linknotes")
            .join("config.toml")
    }

    /// Resolve the storage database, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument (or `LINKNOTES_DB`)
    /// 2. Config file `db` setting
    /// 3. `<data_dir>/linknotes/storage.db`
    pub fn db_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.db.clone())
            .unwrap_or_else(|| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("linknotes")
                    .join("storage.db")
            })
    }

    /// Resolve the export directory.
    ///
    /// Precedence order:
    /// 1. CLI `--out` argument
    /// 2. Config file `export_dir` setting
    /// 3. Current working directory
    pub fn export_dir(&self, cli_out: Option<&PathBuf>) -> PathBuf {
        cli_out
            .cloned()
            .or_else(|| self.export_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
