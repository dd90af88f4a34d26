//! Output formatting utilities

use crate::domain::{JournalEntry, Source, MOOD_VOCABULARY};
use chrono::Local;

/// Format entries for display, one block per entry
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_entry(entry));
        output.push('\n');
    }
    output
}

fn format_entry(entry: &JournalEntry) -> String {
    let mut block = format!(
        "{}  {} ({}, intensity {})\n    valence {} / arousal {}\n",
        entry
            .timestamp
            .with_timezone(&Local)
            .format("%d-%m-%Y %H:%M"),
        entry.scent,
        entry.source,
        entry.intensity,
        entry.valence,
        entry.arousal
    );
    if !entry.mood_tags.is_empty() {
        block.push_str(&format!("    mood: {}\n", entry.mood_tags.join(", ")));
    }
    if let Some(place) = &entry.place {
        block.push_str(&format!("    place: {}\n", place));
    }
    if let Some(notes) = &entry.notes {
        block.push_str(&format!("    notes: {}\n", notes));
    }
    block
}

/// Suggested mood tags and the source categories
pub fn format_vocabulary() -> String {
    let sources: Vec<&str> = Source::ALL.iter().map(|s| s.as_str()).collect();
    format!(
        "Sources: {}\nMood tags: {}\n",
        sources.join(", "),
        MOOD_VOCABULARY.join(", ")
    )
}
