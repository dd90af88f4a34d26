//! aroma-journal - Scent and mood journal
//!
//! Records scent perceptions (what, where, how strong, how it felt) in a
//! local store and exports them as CSV.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JournalError;
