//! Error types for aroma-journal

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the journal
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Not an aroma journal directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Invalid entry: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JournalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalError::NotJournalDirectory(_) => 2,
            JournalError::Validation(_) => 3,
            JournalError::Storage(_) => 4,
            JournalError::Export(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalError::NotJournalDirectory(path) => {
                format!(
                    "Not an aroma journal directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'aroma init' in this directory to create a new journal\n\
                    • Navigate to an existing journal directory\n\
                    • Set AROMA_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            JournalError::Validation(msg) => {
                if msg.contains("scent") {
                    format!(
                        "Invalid entry: {}\n\n\
                        Example:\n\
                        aroma add \"lemon peel\" --source food --intensity 4",
                        msg
                    )
                } else {
                    format!(
                        "Invalid entry: {}\n\n\
                        Numeric fields take whole numbers:\n\
                        • intensity 0–5\n\
                        • valence -3–3\n\
                        • arousal 1–5",
                        msg
                    )
                }
            }
            JournalError::Storage(msg) => {
                format!(
                    "Storage error: {}\n\n\
                    Nothing was changed. Check that the journal directory is writable \
                    and try the command again.",
                    msg
                )
            }
            JournalError::Export(msg) => {
                format!(
                    "Export error: {}\n\n\
                    Suggestions:\n\
                    • Check that the output directory exists and is writable\n\
                    • Use 'aroma export --stdout' to print the CSV instead",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;
