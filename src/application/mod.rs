//! Application layer - Use cases and orchestration

pub mod entries;
pub mod init;
pub mod manage_config;
pub mod session;

pub use entries::EntryService;
pub use manage_config::ConfigService;
pub use session::JournalSession;
