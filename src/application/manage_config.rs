//! Config management use case

use crate::error::{JournalError, Result};
use crate::infrastructure::repository::validate_store_name;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::path::PathBuf;

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "store" => Ok(config.store),
            "export_dir" => Ok(config
                .export_dir
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(JournalError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: store, export_dir, created",
                key
            ))),
        }
    }

    /// Set a config value. An empty `export_dir` resets it to the journal root.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "store" => {
                validate_store_name(value)?;
                config.store = value.to_string();
            }
            "export_dir" => {
                config.export_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "created" => {
                return Err(JournalError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(JournalError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: store, export_dir",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
