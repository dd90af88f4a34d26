//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod saver;
pub mod store;

pub use config::Config;
pub use repository::{FileSystemRepository, JournalRepository};
pub use saver::{DirectoryFileSaver, FileSaver};
pub use store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, RecordStore};
