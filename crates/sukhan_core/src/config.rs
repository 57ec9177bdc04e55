//! Host configuration resolved from the environment.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Resolution never fails; every field has a default.
//! - `log_dir` is absolute; relative values resolve against the working
//!   directory.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

pub const DATA_PATH_ENV: &str = "SUKHAN_DATA_PATH";
pub const PREFS_DB_ENV: &str = "SUKHAN_PREFS_DB";
pub const LOG_LEVEL_ENV: &str = "SUKHAN_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "SUKHAN_LOG_DIR";

const DEFAULT_DATA_PATH: &str = "assets/data/poems.json";
const DEFAULT_PREFS_DB_FILE_NAME: &str = "sukhan_prefs.sqlite3";

/// Paths and levels a host needs to run one page session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// JSON dataset read once per session.
    pub data_path: PathBuf,
    /// SQLite file holding the display preference.
    pub prefs_db_path: PathBuf,
    pub log_level: String,
    /// Rolling log directory; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl PageConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            data_path: read(DATA_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            prefs_db_path: read(PREFS_DB_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_PREFS_DB_FILE_NAME)),
            log_level: read(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_ENV).map(|dir| absolute_log_dir(Path::new(&dir))),
        }
    }

    /// Overrides the log directory, resolving relative paths.
    pub fn set_log_dir(&mut self, dir: impl AsRef<Path>) {
        self.log_dir = Some(absolute_log_dir(dir.as_ref()));
    }
}

fn absolute_log_dir(dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(dir),
        Err(_) => dir.to_path_buf(),
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
