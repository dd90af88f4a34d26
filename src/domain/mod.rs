//! Domain layer - Entry model, form mapping and CSV projection

pub mod csv;
pub mod entry;
pub mod form;

pub use csv::{entries_to_csv, export_filename, CSV_MIME_TYPE};
pub use entry::{JournalEntry, Source, MOOD_VOCABULARY};
pub use form::{Clock, FormFields, FormMapper, IdGenerator, SystemClock, UuidGenerator};
