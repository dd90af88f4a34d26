//! Handing exported files to the user

use crate::error::{JournalError, Result};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

/// Makes a finished export available to the user
pub trait FileSaver {
    /// Save `bytes` under `filename`, returning where they ended up
    fn save(&self, filename: &str, mime_type: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Writes exports into a fixed directory. A file of the same name is
/// replaced, so a second export on the same day supersedes the first.
#[derive(Debug, Clone)]
pub struct DirectoryFileSaver {
    dir: PathBuf,
}

impl DirectoryFileSaver {
    pub fn new(dir: PathBuf) -> Self {
        DirectoryFileSaver { dir }
    }
}

impl FileSaver for DirectoryFileSaver {
    fn save(&self, filename: &str, mime_type: &str, bytes: &[u8]) -> Result<PathBuf> {
        if !self.dir.is_dir() {
            return Err(JournalError::Export(format!(
                "Output directory does not exist: {}",
                self.dir.display()
            )));
        }

        let path = self.dir.join(filename);
        if path.exists() {
            warn!("Replacing existing export {}", path.display());
        }
        fs::write(&path, bytes).map_err(|e| {
            JournalError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;

        info!(
            "Saved {} ({}, {} bytes)",
            path.display(),
            mime_type,
            bytes.len()
        );
        Ok(path)
    }
}
