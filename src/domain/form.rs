//! Mapping raw form fields to a journal entry

use crate::domain::entry::{JournalEntry, Source};
use crate::error::{JournalError, Result};
use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

pub const FIELD_SCENT: &str = "scent";
pub const FIELD_SOURCE: &str = "source";
pub const FIELD_INTENSITY: &str = "intensity";
pub const FIELD_VALENCE: &str = "valence";
pub const FIELD_AROUSAL: &str = "arousal";
pub const FIELD_MOOD: &str = "mood";
pub const FIELD_PLACE: &str = "place";
pub const FIELD_NOTES: &str = "notes";

const DEFAULT_INTENSITY: i64 = 0;
const DEFAULT_VALENCE: i64 = 0;
const DEFAULT_AROUSAL: i64 = 3;

/// Untyped submitted field values. A name may carry several values
/// (checkbox groups); submission order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        FormFields::default()
    }

    /// Append one value under `name`
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Builder-style variant of [`FormFields::push`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted under `name`, in submission order
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

impl<N, V> FromIterator<(N, V)> for FormFields
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut fields = FormFields::new();
        for (name, value) in iter {
            fields.push(name, value);
        }
        fields
    }
}

/// Produces entry identifiers
pub trait IdGenerator {
    fn generate(&self) -> String;
}

/// Random 128-bit identifiers (UUID v4)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Source of the creation timestamp
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Turns submitted fields into a complete [`JournalEntry`]
pub struct FormMapper<G = UuidGenerator, C = SystemClock> {
    ids: G,
    clock: C,
}

impl FormMapper {
    /// Mapper backed by UUID v4 ids and the system clock
    pub fn system() -> Self {
        FormMapper::new(UuidGenerator, SystemClock)
    }
}

impl<G: IdGenerator, C: Clock> FormMapper<G, C> {
    pub fn new(ids: G, clock: C) -> Self {
        FormMapper { ids, clock }
    }

    /// Validate and map the fields. Either every field is filled or an error
    /// is returned; no entry is produced for a rejected submission.
    pub fn map(&self, fields: &FormFields) -> Result<JournalEntry> {
        let scent = fields.get(FIELD_SCENT).unwrap_or_default().trim();
        if scent.is_empty() {
            return Err(JournalError::Validation(
                "scent must not be empty".to_string(),
            ));
        }

        // Unknown sources fall back to the default rather than failing
        let source = fields
            .get(FIELD_SOURCE)
            .and_then(|s| s.parse::<Source>().ok())
            .unwrap_or_default();

        let intensity = parse_number(fields, FIELD_INTENSITY, DEFAULT_INTENSITY)?;
        let valence = parse_number(fields, FIELD_VALENCE, DEFAULT_VALENCE)?;
        let arousal = parse_number(fields, FIELD_AROUSAL, DEFAULT_AROUSAL)?;

        let mood_tags = fields
            .get_all(FIELD_MOOD)
            .into_iter()
            .map(str::to_string)
            .collect();

        Ok(JournalEntry {
            id: self.ids.generate(),
            timestamp: self.clock.now().trunc_subsecs(3),
            scent: scent.to_string(),
            source,
            intensity,
            valence,
            arousal,
            mood_tags,
            place: non_empty(fields.get(FIELD_PLACE)),
            notes: non_empty(fields.get(FIELD_NOTES)),
        })
    }
}

fn parse_number(fields: &FormFields, name: &str, default: i64) -> Result<i64> {
    match fields.get(name).map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => raw.parse::<i64>().map_err(|_| {
            JournalError::Validation(format!(
                "{} must be a whole number, got '{}'",
                name, raw
            ))
        }),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
