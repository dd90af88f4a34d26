//! Configuration management

use crate::error::{JournalError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const JOURNAL_DIR: &str = ".aroma";
pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_STORE_NAME: &str = "aroma-journal";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the key-value store holding the entries
    #[serde(default = "default_store_name")]
    pub store: String,
    /// Where `aroma export` writes CSV files when no --output is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    pub created: DateTime<Utc>,
}

fn default_store_name() -> String {
    DEFAULT_STORE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            store: default_store_name(),
            export_dir: None,
            created: Utc::now(),
        }
    }

    /// Load config from .aroma/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(JOURNAL_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JournalError::NotJournalDirectory(path.to_path_buf())
            } else {
                JournalError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| JournalError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .aroma/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journal_dir = path.join(JOURNAL_DIR);
        let config_path = journal_dir.join(CONFIG_FILE);

        if !journal_dir.exists() {
            fs::create_dir(&journal_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| JournalError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Directory for CSV exports, relative paths resolved against the journal root
    pub fn export_dir_for(&self, root: &Path) -> PathBuf {
        match &self.export_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => root.join(dir),
            None => root.to_path_buf(),
        }
    }
}
