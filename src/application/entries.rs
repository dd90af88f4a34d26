//! Entry use cases: add, list, export and clear

use crate::application::session::JournalSession;
use crate::domain::{FormFields, FormMapper, JournalEntry, SystemClock};
use crate::error::Result;
use crate::infrastructure::{
    Config, DirectoryFileSaver, FileKeyValueStore, FileSystemRepository, JournalRepository,
};
use std::path::PathBuf;

/// Service running entry commands against a journal on disk
pub struct EntryService {
    repository: FileSystemRepository,
    config: Config,
    session: JournalSession<FileKeyValueStore>,
}

impl EntryService {
    /// Load config and the persisted entries for `repository`
    pub fn open(repository: FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let store = repository.record_store(&config)?;
        let session = JournalSession::open(store)?;
        Ok(EntryService {
            repository,
            config,
            session,
        })
    }

    /// Record one entry from submitted fields
    pub fn add(&mut self, fields: &FormFields) -> Result<&JournalEntry> {
        let mapper = FormMapper::system();
        self.session.add(&mapper, fields)
    }

    /// Entries newest first, optionally limited
    pub fn list(&self, limit: Option<usize>) -> &[JournalEntry] {
        let entries = self.session.entries();
        match limit {
            Some(n) if n < entries.len() => &entries[..n],
            _ => entries,
        }
    }

    /// CSV text for every entry
    pub fn csv(&self) -> String {
        self.session.to_csv()
    }

    /// Write today's (UTC) CSV export into `output`, else the configured export
    /// directory, else the journal root
    pub fn export(&self, output: Option<PathBuf>) -> Result<PathBuf> {
        let dir = output.unwrap_or_else(|| self.config.export_dir_for(self.repository.root()));
        let saver = DirectoryFileSaver::new(dir);
        self.session.export_now(&saver, &SystemClock)
    }

    /// Remove every entry, returning how many were removed
    pub fn clear(&mut self) -> Result<usize> {
        self.session.clear()
    }
}
