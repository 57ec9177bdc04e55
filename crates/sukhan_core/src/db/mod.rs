//! SQLite storage for the persisted display preference.
//!
//! # Responsibility
//! - Open the preference file and bring its schema up to date.
//! - Label every failure with the database it happened on.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Preferences are never read or written before migrations succeed.
//! - A file written by a newer binary is rejected, never downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
pub use rusqlite::Connection;

pub type DbResult<T> = Result<T, DbError>;

/// Where a preference database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    File(PathBuf),
    Memory,
}

impl DbLocation {
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Log-safe label: `file` or `memory`.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Memory => "memory",
        }
    }
}

impl Display for DbLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Memory => f.write_str(":memory:"),
        }
    }
}

#[derive(Debug)]
pub enum DbError {
    /// The preference file could not be opened or created.
    Open {
        location: DbLocation,
        source: rusqlite::Error,
    },
    /// Schema setup failed on an opened connection.
    Migrate {
        location: DbLocation,
        source: rusqlite::Error,
    },
    /// The file carries a schema newer than this binary knows.
    UnsupportedSchemaVersion {
        location: DbLocation,
        db_version: u32,
        latest_supported: u32,
    },
    /// Statement failure on a ready connection.
    Query(rusqlite::Error),
}

impl DbError {
    /// Database the failure happened on; `None` for plain statement errors.
    pub fn location(&self) -> Option<&DbLocation> {
        match self {
            Self::Open { location, .. }
            | Self::Migrate { location, .. }
            | Self::UnsupportedSchemaVersion { location, .. } => Some(location),
            Self::Query(_) => None,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { location, source } => {
                write!(f, "cannot open preference database `{location}`: {source}")
            }
            Self::Migrate { location, source } => {
                write!(f, "cannot prepare preference database `{location}`: {source}")
            }
            Self::UnsupportedSchemaVersion {
                location,
                db_version,
                latest_supported,
            } => write!(
                f,
                "preference database `{location}` has schema {db_version}, newest known is {latest_supported}"
            ),
            Self::Query(err) => write!(f, "preference query failed: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Migrate { source, .. } => Some(source),
            Self::Query(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}
