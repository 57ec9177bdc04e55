//! Poem domain model.
//!
//! # Responsibility
//! - Define the canonical poem record decoded from the external dataset.
//! - Validate slug rules used by fragment navigation.
//!
//! # Invariants
//! - `slug` is unique across one loaded collection.
//! - `slug` is non-blank and never contains `/` or `#`.
//! - Records are read-only after load; views are derived, never written back.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier assigned by the dataset.
pub type PoemId = i64;

/// Publication year as found in the dataset.
///
/// The dataset mixes numeric years and free text (`"1857"`, `"c. 1900"`),
/// so both shapes are accepted and only used for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PoemYear {
    Number(i64),
    Text(String),
}

impl Display for PoemYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(year) => write!(f, "{year}"),
            Self::Text(year) => write!(f, "{year}"),
        }
    }
}

/// One entry of the poetry dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemRecord {
    pub id: PoemId,
    /// URL-safe key used in `#poem/<slug>` fragments.
    pub slug: String,
    pub title: String,
    pub poet: String,
    pub year: PoemYear,
    /// Full text, lines separated by `\n`.
    pub poem: String,
    /// Display-only tags. Missing or `null` in some dataset entries.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub theme: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl PoemRecord {
    /// Joins theme tags with `separator` in dataset order.
    pub fn themes_joined(&self, separator: &str) -> String {
        self.theme.join(separator)
    }

    /// Returns the fragment that selects this record's single view.
    pub fn fragment(&self) -> String {
        format!("#poem/{}", self.slug)
    }

    /// Validates per-record invariants.
    ///
    /// # Errors
    /// - Returns [`PoemValidationError::BlankSlug`] for empty/whitespace slugs.
    /// - Returns [`PoemValidationError::InvalidSlug`] when the slug would
    ///   break fragment parsing.
    pub fn validate(&self) -> Result<(), PoemValidationError> {
        if self.slug.trim().is_empty() {
            return Err(PoemValidationError::BlankSlug { id: self.id });
        }
        if self.slug.contains(['/', '#']) {
            return Err(PoemValidationError::InvalidSlug {
                id: self.id,
                slug: self.slug.clone(),
            });
        }
        Ok(())
    }
}

/// Validation failures for poem records and collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoemValidationError {
    BlankSlug { id: PoemId },
    InvalidSlug { id: PoemId, slug: String },
    /// Two records share the same slug; navigation would be ambiguous.
    DuplicateSlug { slug: String },
}

impl Display for PoemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankSlug { id } => write!(f, "poem {id} has a blank slug"),
            Self::InvalidSlug { id, slug } => {
                write!(f, "poem {id} has slug `{slug}` that is not fragment-safe")
            }
            Self::DuplicateSlug { slug } => write!(f, "slug `{slug}` is used more than once"),
        }
    }
}

impl Error for PoemValidationError {}

/// Validates every record and slug uniqueness across the collection.
pub fn validate_collection(records: &[PoemRecord]) -> Result<(), PoemValidationError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        record.validate()?;
        if !seen.insert(record.slug.as_str()) {
            return Err(PoemValidationError::DuplicateSlug {
                slug: record.slug.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_collection, PoemRecord, PoemValidationError, PoemYear};

    fn record(id: i64, slug: &str) -> PoemRecord {
        PoemRecord {
            id,
            slug: slug.to_string(),
            title: format!("title {id}"),
            poet: "poet".to_string(),
            year: PoemYear::Number(1900),
            poem: "line".to_string(),
            theme: Vec::new(),
        }
    }

    #[test]
    fn year_accepts_number_and_text() {
        let number: PoemYear = serde_json::from_str("1869").unwrap();
        let text: PoemYear = serde_json::from_str("\"c. 1900\"").unwrap();
        assert_eq!(number.to_string(), "1869");
        assert_eq!(text.to_string(), "c. 1900");
    }

    #[test]
    fn missing_theme_defaults_to_empty() {
        let json = r#"{"id":1,"slug":"a","title":"t","poet":"p","year":1900,"poem":"x"}"#;
        let parsed: PoemRecord = serde_json::from_str(json).unwrap();
        assert!(parsed.theme.is_empty());
    }

    #[test]
    fn slug_with_separator_is_rejected() {
        let err = record(3, "a/b").validate().unwrap_err();
        assert!(matches!(err, PoemValidationError::InvalidSlug { id: 3, .. }));
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let err = validate_collection(&[record(1, "a"), record(2, "b"), record(3, "a")])
            .unwrap_err();
        assert_eq!(
            err,
            PoemValidationError::DuplicateSlug {
                slug: "a".to_string()
            }
        );
    }

    #[test]
    fn null_theme_reads_as_empty() {
        let json = r#"{"id":1,"slug":"a","title":"t","poet":"p","year":1900,"poem":"x","theme":null}"#;
        let parsed: PoemRecord = serde_json::from_str(json).unwrap();
        assert!(parsed.theme.is_empty());
    }

    #[test]
    fn slug_with_inner_space_is_accepted() {
        assert!(record(4, "dil e nadaan").validate().is_ok());
        assert!(matches!(
            record(5, "  ").validate(),
            Err(PoemValidationError::BlankSlug { id: 5 })
        ));
    }
}
