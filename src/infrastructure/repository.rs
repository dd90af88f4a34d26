//! File system repository: locating and initializing a journal root

use crate::error::{JournalError, Result};
use crate::infrastructure::config::{Config, JOURNAL_DIR};
use crate::infrastructure::store::{FileKeyValueStore, RecordStore};
use std::fs;
use std::path::{Path, PathBuf};

pub const ROOT_ENV_VAR: &str = "AROMA_ROOT";

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .aroma/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .aroma/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .aroma directory exists
    fn is_initialized(&self) -> bool;

    /// Create .aroma directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory.
    /// First checks AROMA_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV_VAR) {
            let path = PathBuf::from(root_path);
            if Self::has_journal_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(JournalError::Config(format!(
                    "AROMA_ROOT is set to '{}' but no .aroma directory found. \
                    Run 'aroma init' in that directory or unset AROMA_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_journal_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(JournalError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_journal_dir(path: &Path) -> bool {
        path.join(JOURNAL_DIR).is_dir()
    }

    /// Directory of the named key-value store
    pub fn store_dir(&self, store_name: &str) -> PathBuf {
        self.root.join(JOURNAL_DIR).join(store_name)
    }

    /// Record store for the store named in the config
    pub fn record_store(&self, config: &Config) -> Result<RecordStore<FileKeyValueStore>> {
        validate_store_name(&config.store)?;
        Ok(RecordStore::new(FileKeyValueStore::new(
            self.store_dir(&config.store),
        )))
    }
}

/// Store names become a single directory component under .aroma
pub fn validate_store_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if valid {
        Ok(())
    } else {
        Err(JournalError::Config(format!(
            "Invalid store name: '{}'. Use letters, digits, '-', '_' or '.'",
            name
        )))
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_journal_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let journal_dir = self.root.join(JOURNAL_DIR);

        if journal_dir.exists() {
            return Err(JournalError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&journal_dir)?;
        Ok(())
    }
}
