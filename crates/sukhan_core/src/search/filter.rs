//! Linear substring filter over the loaded collection.
//!
//! # Responsibility
//! - Derive the filtered view for one query without touching the store.
//!
//! # Invariants
//! - Output is a subsequence of the input in original order.
//! - Empty query returns every record.
//! - `title`, `poet` and `poem` match case-insensitively; `theme` entries
//!   match case-sensitively.

use crate::model::poem::PoemRecord;

/// Normalized query text taken from the search input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Trims raw input; whitespace-only input becomes the empty query.
    pub fn normalize(raw: &str) -> Self {
        Self {
            text: raw.trim().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the text to emphasize, `None` for the empty query.
    pub fn highlight_term(&self) -> Option<&str> {
        if self.is_empty() {
            None
        } else {
            Some(self.text.as_str())
        }
    }
}

/// Returns records matching `query`, preserving input order.
pub fn filter_poems<'a>(records: &'a [PoemRecord], query: &str) -> Vec<&'a PoemRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_lowered(record, query, &needle))
        .collect()
}

/// Returns whether one record matches `query`.
pub fn poem_matches(record: &PoemRecord, query: &str) -> bool {
    query.is_empty() || matches_lowered(record, query, &query.to_lowercase())
}

fn matches_lowered(record: &PoemRecord, query: &str, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.poet.to_lowercase().contains(needle)
        || record.poem.to_lowercase().contains(needle)
        || record.theme.iter().any(|tag| tag.contains(query))
}
