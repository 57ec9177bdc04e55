//! Dataset sources for the poem store.
//!
//! # Responsibility
//! - Fetch the raw JSON payload from wherever the dataset lives.
//! - Map transport failures into [`LoadError::Unreachable`].

use super::LoadError;
use std::path::{Path, PathBuf};

/// Read-only origin of the poem dataset.
///
/// Implementations return the raw payload; parsing and validation happen in
/// the store so every source gets the same rules.
pub trait PoemSource {
    /// Short human-readable location used in errors and logs.
    fn describe(&self) -> String;
    /// Fetches the full JSON payload.
    fn fetch(&self) -> Result<String, LoadError>;
}

impl<S: PoemSource + ?Sized> PoemSource for &S {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        (**self).fetch()
    }
}

/// Dataset stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FilePoemSource {
    path: PathBuf,
}

impl FilePoemSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PoemSource for FilePoemSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        std::fs::read_to_string(&self.path).map_err(|err| LoadError::Unreachable {
            source_name: self.describe(),
            message: err.to_string(),
        })
    }
}

/// Dataset already held in memory, e.g. embedded at build time.
#[derive(Debug, Clone)]
pub struct StaticPoemSource {
    name: String,
    payload: String,
}

impl StaticPoemSource {
    pub fn new(name: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
        }
    }
}

impl PoemSource for StaticPoemSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.payload.clone())
    }
}
