//! CSV projection of the entry list

use crate::domain::entry::JournalEntry;
use chrono::NaiveDate;

pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

pub const CSV_HEADER: [&str; 9] = [
    "timestamp",
    "scent",
    "source",
    "intensity",
    "valence",
    "arousal",
    "moodTags",
    "place",
    "notes",
];

const MOOD_SEPARATOR: &str = "|";

/// Render entries as CSV text, header first, in the given order.
///
/// Every field is quoted and embedded quotes are doubled. Newlines in notes
/// are flattened to spaces. Rows are joined with `\n` and there is no trailing
/// newline.
pub fn entries_to_csv(entries: &[JournalEntry]) -> String {
    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(format_row(CSV_HEADER.iter().map(|h| h.to_string())));

    for entry in entries {
        let fields = [
            entry.timestamp_string(),
            entry.scent.clone(),
            entry.source.to_string(),
            entry.intensity.to_string(),
            entry.valence.to_string(),
            entry.arousal.to_string(),
            entry.mood_tags.join(MOOD_SEPARATOR),
            entry.place.clone().unwrap_or_default(),
            entry.notes.as_deref().unwrap_or_default().replace('\n', " "),
        ];
        rows.push(format_row(fields));
    }

    rows.join("\n")
}

/// File name for an export made on `date`
pub fn export_filename(date: NaiveDate) -> String {
    format!("aroma_journal_{}.csv", date.format("%Y-%m-%d"))
}

fn format_row<I>(fields: I) -> String
where
    I: IntoIterator<Item = String>,
{
    fields
        .into_iter()
        .map(|field| quote(&field))
        .collect::<Vec<_>>()
        .join(",")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
