//! Journal session: the single owner of the in-memory entry list

use crate::domain::{
    entries_to_csv, export_filename, Clock, FormFields, FormMapper, IdGenerator, JournalEntry,
    CSV_MIME_TYPE,
};
use crate::error::Result;
use crate::infrastructure::{FileSaver, KeyValueStore, RecordStore};
use chrono::NaiveDate;
use log::{info, warn};
use std::path::PathBuf;

/// Loaded journal state with explicit load / add / persist transitions.
///
/// The in-memory list only changes after the store confirms a write.
pub struct JournalSession<K> {
    store: RecordStore<K>,
    entries: Vec<JournalEntry>,
}

impl<K: KeyValueStore> JournalSession<K> {
    /// Open a session by loading the persisted collection
    pub fn open(store: RecordStore<K>) -> Result<Self> {
        let entries = store.load()?;
        info!("Loaded {} entries", entries.len());
        Ok(JournalSession { store, entries })
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn store(&self) -> &RecordStore<K> {
        &self.store
    }

    /// Map the submitted fields to a new entry, persist the collection with it
    /// prepended, then adopt the new collection.
    pub fn add<G, C>(
        &mut self,
        mapper: &FormMapper<G, C>,
        fields: &FormFields,
    ) -> Result<&JournalEntry>
    where
        G: IdGenerator,
        C: Clock,
    {
        let entry = mapper.map(fields)?;
        let out_of_range = entry.out_of_range_fields();
        if !out_of_range.is_empty() {
            warn!(
                "Entry {} has values outside the usual range: {}",
                entry.id,
                out_of_range.join(", ")
            );
        }
        self.insert(entry)
    }

    /// Persist `entry` at the front of the collection
    pub fn insert(&mut self, entry: JournalEntry) -> Result<&JournalEntry> {
        let mut updated = Vec::with_capacity(self.entries.len() + 1);
        updated.push(entry);
        updated.extend(self.entries.iter().cloned());

        self.store.save(&updated)?;
        self.entries = updated;

        info!("Added entry {}", self.entries[0].id);
        Ok(&self.entries[0])
    }

    /// Remove every entry from the store and from memory
    pub fn clear(&mut self) -> Result<usize> {
        self.store.clear()?;
        let removed = self.entries.len();
        self.entries.clear();
        info!("Cleared {} entries", removed);
        Ok(removed)
    }

    /// CSV text for the current collection
    pub fn to_csv(&self) -> String {
        entries_to_csv(&self.entries)
    }

    /// Export through `saver`, naming the file after the UTC date of the
    /// clock's current instant
    pub fn export_now<S: FileSaver, C: Clock>(&self, saver: &S, clock: &C) -> Result<PathBuf> {
        self.export(saver, clock.now().date_naive())
    }

    /// Export the collection through `saver` as `aroma_journal_<date>.csv`
    pub fn export<S: FileSaver>(&self, saver: &S, date: NaiveDate) -> Result<PathBuf> {
        let filename = export_filename(date);
        let csv = self.to_csv();
        saver.save(&filename, CSV_MIME_TYPE, csv.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournalError;
    use crate::infrastructure::MemoryKeyValueStore;
    use chrono::{DateTime, TimeZone, Utc};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSaver {
        saved: RefCell<Vec<(String, String, Vec<u8>)>>,
    }

    impl FileSaver for RecordingSaver {
        fn save(&self, filename: &str, mime_type: &str, bytes: &[u8]) -> Result<PathBuf> {
            self.saved
                .borrow_mut()
                .push((filename.to_string(), mime_type.to_string(), bytes.to_vec()));
            Ok(PathBuf::from(filename))
        }
    }

    struct RefusingSaver;

    impl FileSaver for RefusingSaver {
        fn save(&self, _: &str, _: &str, _: &[u8]) -> Result<PathBuf> {
            Err(JournalError::Export("download refused".to_string()))
        }
    }

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn scent(name: &str) -> FormFields {
        FormFields::new().with("scent", name)
    }

    fn new_session() -> JournalSession<MemoryKeyValueStore> {
        JournalSession::open(RecordStore::new(MemoryKeyValueStore::new())).unwrap()
    }

    #[test]
    fn test_open_empty() {
        let session = new_session();
        assert!(session.entries().is_empty());
    }

    #[test]
    fn test_add_prepends() {
        let mut session = new_session();
        let mapper = FormMapper::system();

        session.add(&mapper, &scent("A")).unwrap();
        session.add(&mapper, &scent("B")).unwrap();

        let scents: Vec<&str> = session.entries().iter().map(|e| e.scent.as_str()).collect();
        assert_eq!(scents, vec!["B", "A"]);
        assert_eq!(session.store().load().unwrap(), session.entries());
    }

    #[test]
    fn test_add_rejected_leaves_state() {
        let mut session = new_session();
        let mapper = FormMapper::system();
        session.add(&mapper, &scent("A")).unwrap();

        let result = session.add(&mapper, &scent("  "));
        assert!(matches!(result, Err(JournalError::Validation(_))));
        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.store().load().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_save_keeps_previous_entries() {
        let mut session = new_session();
        let mapper = FormMapper::system();
        session.add(&mapper, &scent("A")).unwrap();
        let before = session.entries().to_vec();

        session.store().backend().set_fail_writes(true);
        let result = session.add(&mapper, &scent("B"));

        assert!(matches!(result, Err(JournalError::Storage(_))));
        assert_eq!(session.entries(), before.as_slice());

        // Retrying once the store recovers works
        session.store().backend().set_fail_writes(false);
        session.add(&mapper, &scent("B")).unwrap();
        assert_eq!(session.entries().len(), 2);
    }

    #[test]
    fn test_reopen_sees_persisted_entries() {
        let mut session = new_session();
        let mapper = FormMapper::system();
        session.add(&mapper, &scent("A")).unwrap();
        session.add(&mapper, &scent("B")).unwrap();
        let expected = session.entries().to_vec();

        let JournalSession { store, .. } = session;
        let reopened = JournalSession::open(store).unwrap();
        assert_eq!(reopened.entries(), expected.as_slice());
    }

    #[test]
    fn test_clear() {
        let mut session = new_session();
        let mapper = FormMapper::system();
        session.add(&mapper, &scent("A")).unwrap();

        assert_eq!(session.clear().unwrap(), 1);
        assert!(session.entries().is_empty());
        assert!(session.store().load().unwrap().is_empty());
    }

    #[test]
    fn test_failed_clear_keeps_entries() {
        let mut session = new_session();
        let mapper = FormMapper::system();
        session.add(&mapper, &scent("A")).unwrap();

        session.store().backend().set_fail_writes(true);
        assert!(session.clear().is_err());
        assert_eq!(session.entries().len(), 1);
    }

    #[test]
    fn test_export_hands_csv_to_saver() {
        let mut session = new_session();
        let mapper = FormMapper::system();
        session.add(&mapper, &scent("cedar")).unwrap();

        let saver = RecordingSaver::default();
        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let path = session.export(&saver, date).unwrap();

        assert_eq!(path, PathBuf::from("aroma_journal_2025-04-01.csv"));
        let saved = saver.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].1, "text/csv;charset=utf-8;");
        assert_eq!(String::from_utf8(saved[0].2.clone()).unwrap(), session.to_csv());
    }

    #[test]
    fn test_export_now_names_file_by_utc_date() {
        let session = new_session();
        let saver = RecordingSaver::default();

        // 23:30 UTC is already the next day east of Greenwich and still the
        // same day west of it; the name must follow UTC either way
        let late = FixedClock(Utc.with_ymd_and_hms(2026, 10, 15, 23, 30, 0).unwrap());
        let early = FixedClock(Utc.with_ymd_and_hms(2026, 10, 15, 0, 30, 0).unwrap());

        assert_eq!(
            session.export_now(&saver, &late).unwrap(),
            PathBuf::from("aroma_journal_2026-10-15.csv")
        );
        assert_eq!(
            session.export_now(&saver, &early).unwrap(),
            PathBuf::from("aroma_journal_2026-10-15.csv")
        );
    }

    #[test]
    fn test_insert_keeps_memory_and_store_equal_for_precise_timestamps() {
        let mut session = new_session();
        let mut entry = FormMapper::system().map(&scent("neroli")).unwrap();
        entry.timestamp = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();

        session.insert(entry).unwrap();
        assert_eq!(session.store().load().unwrap(), session.entries());
    }

    #[test]
    fn test_export_failure_does_not_touch_store() {
        let mut session = new_session();
        let mapper = FormMapper::system();
        session.add(&mapper, &scent("cedar")).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let result = session.export(&RefusingSaver, date);
        assert!(matches!(result, Err(JournalError::Export(_))));
        assert_eq!(session.store().load().unwrap().len(), 1);
    }
}
