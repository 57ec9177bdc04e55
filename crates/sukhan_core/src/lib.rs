//! Core logic for the Sukhan poetry page.
//! Hosts (CLI, UI shells) drive [`PageController`] and render its content.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod page;
pub mod render;
pub mod repo;
pub mod search;
pub mod service;
pub mod store;

pub use config::PageConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::poem::{PoemId, PoemRecord, PoemValidationError, PoemYear};
pub use page::{
    parse_fragment, poem_of_the_day_index, Calendar, FixedCalendar, LocalCalendar, PageContent,
    PageController, PageEvent, Route,
};
pub use render::{
    render_list, render_single, HtmlPresenter, ListView, PoemCard, PoemDetailView, Presenter,
    TextPresenter,
};
pub use repo::preference_repo::{
    PreferenceRepository, RepoError, RepoResult, SqlitePreferenceRepository,
};
pub use search::filter::{filter_poems, poem_matches, SearchQuery};
pub use search::highlight::{highlight, Highlighter, PoemLine, TextSpan};
pub use service::theme_service::{Theme, ThemeService, DARK_MODE_KEY};
pub use store::{
    parse_poems, FilePoemSource, LoadError, PoemSource, PoemStore, StaticPoemSource,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
