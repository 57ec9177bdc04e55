//! In-memory poem store.
//!
//! # Responsibility
//! - Load the dataset once per session from a [`PoemSource`].
//! - Expose read-only access to the ordered record sequence.
//!
//! # Invariants
//! - A successful load replaces the sequence with a single assignment.
//! - A failed load leaves the store empty; nothing is retried.
//! - Record order is the dataset order and never changes after load.

mod source;

pub use source::{FilePoemSource, PoemSource, StaticPoemSource};

use crate::model::poem::{validate_collection, PoemRecord, PoemValidationError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Failure while fetching or decoding the poem dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The source could not be read (missing file, network/IO failure).
    Unreachable {
        source_name: String,
        message: String,
    },
    /// The payload is not a JSON array of poem records.
    Malformed {
        source_name: String,
        message: String,
    },
    /// The payload decoded but violates record invariants.
    InvalidRecord(PoemValidationError),
}

impl LoadError {
    /// Stable code used in diagnostic log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unreachable { .. } => "source_unreachable",
            Self::Malformed { .. } => "payload_malformed",
            Self::InvalidRecord(_) => "record_invalid",
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable {
                source_name,
                message,
            } => write!(f, "poem source `{source_name}` is unreachable: {message}"),
            Self::Malformed {
                source_name,
                message,
            } => write!(f, "poem source `{source_name}` is malformed: {message}"),
            Self::InvalidRecord(err) => write!(f, "invalid poem record: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRecord(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PoemValidationError> for LoadError {
    fn from(value: PoemValidationError) -> Self {
        Self::InvalidRecord(value)
    }
}

/// Decodes and validates a dataset payload.
///
/// `source_name` is only used to label errors.
pub fn parse_poems(source_name: &str, payload: &str) -> Result<Vec<PoemRecord>, LoadError> {
    let records: Vec<PoemRecord> =
        serde_json::from_str(payload).map_err(|err| LoadError::Malformed {
            source_name: source_name.to_string(),
            message: err.to_string(),
        })?;
    validate_collection(&records)?;
    Ok(records)
}

/// Ordered, session-lived poem collection.
#[derive(Debug, Default)]
pub struct PoemStore {
    records: Vec<PoemRecord>,
}

impl PoemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the dataset from `source`, replacing the current sequence.
    ///
    /// Returns the number of loaded records.
    ///
    /// # Errors
    /// - Any [`LoadError`]; the store is left empty in that case.
    pub fn load(&mut self, source: &dyn PoemSource) -> Result<usize, LoadError> {
        let started_at = Instant::now();
        info!("event=poems_load module=store status=start");

        let loaded = source
            .fetch()
            .and_then(|payload| parse_poems(&source.describe(), &payload));

        match loaded {
            Ok(records) => {
                self.records = records;
                info!(
                    "event=poems_load module=store status=ok duration_ms={} count={}",
                    started_at.elapsed().as_millis(),
                    self.records.len()
                );
                Ok(self.records.len())
            }
            Err(err) => {
                self.records = Vec::new();
                error!(
                    "event=poems_load module=store status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    pub fn records(&self) -> &[PoemRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PoemRecord> {
        self.records.get(index)
    }

    /// Finds the record addressed by a fragment slug (exact match).
    pub fn find_by_slug(&self, slug: &str) -> Option<&PoemRecord> {
        self.records.iter().find(|record| record.slug == slug)
    }
}
