//! Journal entry model and its persisted shape

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Suggested mood tags offered by the CLI. Not enforced at the data layer.
pub const MOOD_VOCABULARY: [&str; 7] = [
    "focus", "calm", "positive", "tired", "anxious", "sleepy", "excited",
];

pub const INTENSITY_RANGE: RangeInclusive<i64> = 0..=5;
pub const VALENCE_RANGE: RangeInclusive<i64> = -3..=3;
pub const AROUSAL_RANGE: RangeInclusive<i64> = 1..=5;

/// Where a scent came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// The user's own perfume
    Perfume,
    /// Food or drink
    Food,
    /// Surroundings (rain, a room, a street)
    #[default]
    Environment,
    Other,
}

impl Source {
    pub const ALL: [Source; 4] = [
        Source::Perfume,
        Source::Food,
        Source::Environment,
        Source::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Perfume => "perfume",
            Source::Food => "food",
            Source::Environment => "environment",
            Source::Other => "other",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perfume" => Ok(Source::Perfume),
            "food" => Ok(Source::Food),
            "environment" => Ok(Source::Environment),
            "other" => Ok(Source::Other),
            _ => Err(format!(
                "Invalid source: '{}'. Valid sources are: perfume, food, environment, other",
                s
            )),
        }
    }
}

/// One recorded scent perception.
///
/// The serialized field names are the persisted wire contract; absent
/// `place`/`notes` are omitted from the JSON rather than written as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub scent: String,
    pub source: Source,
    pub intensity: i64,
    pub valence: i64,
    pub arousal: i64,
    pub mood_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl JournalEntry {
    /// Timestamp in the persisted text form, e.g. `2025-01-17T09:30:00.000Z`
    pub fn timestamp_string(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// Names of numeric fields whose values fall outside their documented range.
    ///
    /// Values are stored as given; this only lets callers warn about them.
    pub fn out_of_range_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if !INTENSITY_RANGE.contains(&self.intensity) {
            fields.push("intensity");
        }
        if !VALENCE_RANGE.contains(&self.valence) {
            fields.push("valence");
        }
        if !AROUSAL_RANGE.contains(&self.arousal) {
            fields.push("arousal");
        }
        fields
    }
}

/// ISO-8601 text with millisecond precision (`.000Z`), widened to micro- or
/// nanoseconds only when the value carries finer digits so nothing is lost.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    let format = if timestamp.timestamp_subsec_nanos() % 1_000_000 == 0 {
        SecondsFormat::Millis
    } else {
        SecondsFormat::AutoSi
    };
    timestamp.to_rfc3339_opts(format, true)
}

mod iso_millis {
    use super::format_timestamp;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(timestamp))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
