//! Page orchestration over store, search and renderer.
//!
//! # Responsibility
//! - React to page-ready, query-change and fragment-change events.
//! - Own the session state instead of sharing it ambiently.
//!
//! # Invariants
//! - Each event is handled to completion and replaces the whole content.
//! - The record sequence changes only on activation.
//! - The poem of the day is chosen from the unfiltered sequence.
//! - Query text is never logged; only its length and hit counts are.

use super::daily::{poem_of_the_day_index, Calendar, LocalCalendar};
use super::route::{parse_fragment, Route};
use crate::model::poem::PoemRecord;
use crate::render::labels::LOAD_FAILED_MESSAGE;
use crate::render::{render_list, render_single, ListView, PoemDetailView, Presenter};
use crate::search::filter::{filter_poems, SearchQuery};
use crate::store::{LoadError, PoemSource, PoemStore};
use log::{debug, error, info};

/// External events the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Ready,
    QueryChanged(String),
    HashChanged(String),
}

/// What the content region currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageContent {
    /// Nothing rendered yet (before activation).
    #[default]
    Blank,
    LoadFailed { message: &'static str },
    List(ListView),
    Single(PoemDetailView),
}

impl PageContent {
    /// Renders the content region with a host presenter.
    pub fn present(&self, presenter: &dyn Presenter) -> String {
        match self {
            Self::Blank => String::new(),
            Self::LoadFailed { message } => presenter.notice(message),
            Self::List(view) => presenter.list(view),
            Self::Single(view) => presenter.detail(view),
        }
    }
}

/// Session state owned by the controller.
#[derive(Debug, Default)]
pub struct PageState {
    store: PoemStore,
    query: SearchQuery,
    content: PageContent,
    load_error: Option<LoadError>,
}

/// Drives one page session.
pub struct PageController<S: PoemSource, C: Calendar = LocalCalendar> {
    source: S,
    calendar: C,
    state: PageState,
}

impl<S: PoemSource> PageController<S, LocalCalendar> {
    /// Creates a controller that picks the poem of the day from the local date.
    pub fn new(source: S) -> Self {
        Self::with_calendar(source, LocalCalendar)
    }
}

impl<S: PoemSource, C: Calendar> PageController<S, C> {
    pub fn with_calendar(source: S, calendar: C) -> Self {
        Self {
            source,
            calendar,
            state: PageState::default(),
        }
    }

    /// Dispatches one event and returns the resulting content.
    pub fn handle(&mut self, event: PageEvent) -> &PageContent {
        match event {
            PageEvent::Ready => self.activate(),
            PageEvent::QueryChanged(raw) => self.search(&raw),
            PageEvent::HashChanged(fragment) => self.navigate(&fragment),
        }
    }

    /// Loads the dataset and renders the unfiltered list.
    ///
    /// A failed load shows the fixed failure message; the store stays empty
    /// and no retry happens until the next activation.
    pub fn activate(&mut self) -> &PageContent {
        self.state.query = SearchQuery::default();
        match self.state.store.load(&self.source) {
            Ok(count) => {
                self.state.load_error = None;
                self.state.content = self.unfiltered_content();
                info!(
                    "event=page_activate module=page status=ok count={} featured={}",
                    count,
                    self.poem_of_the_day_index()
                        .map_or_else(|| "none".to_string(), |index| index.to_string())
                );
            }
            Err(err) => {
                error!(
                    "event=page_activate module=page status=error error_code={} source={}",
                    err.code(),
                    self.source.describe()
                );
                self.state.load_error = Some(err);
                self.state.content = self.unfiltered_content();
            }
        }
        &self.state.content
    }

    /// Re-derives the list for new search input.
    ///
    /// Whitespace-only input clears the filter and restores the unfiltered
    /// list in place, poem of the day included.
    pub fn search(&mut self, raw_query: &str) -> &PageContent {
        self.state.query = SearchQuery::normalize(raw_query);
        self.state.content = self.content_for_query();
        debug!(
            "event=page_search module=page status=ok query_len={} hits={}",
            self.state.query.as_str().chars().count(),
            match &self.state.content {
                PageContent::List(view) => view.cards().len(),
                _ => 0,
            }
        );
        &self.state.content
    }

    /// Applies a fragment change.
    ///
    /// - `poem/<slug>` with a known slug shows that poem; unknown slugs
    ///   leave the view untouched.
    /// - The empty fragment returns to the list for the current query.
    /// - Other fragments are ignored.
    pub fn navigate(&mut self, fragment: &str) -> &PageContent {
        match parse_fragment(fragment) {
            Route::Poem(slug) => match self.state.store.find_by_slug(&slug) {
                Some(record) => {
                    self.state.content = PageContent::Single(render_single(record));
                    debug!("event=page_navigate module=page status=ok route=poem");
                }
                None => {
                    debug!("event=page_navigate module=page status=miss route=poem");
                }
            },
            Route::List => {
                if self.state.content != PageContent::Blank {
                    self.state.content = self.content_for_query();
                    debug!("event=page_navigate module=page status=ok route=list");
                }
            }
            Route::Unknown => {
                debug!("event=page_navigate module=page status=ignored route=unknown");
            }
        }
        &self.state.content
    }

    pub fn content(&self) -> &PageContent {
        &self.state.content
    }

    pub fn records(&self) -> &[PoemRecord] {
        self.state.store.records()
    }

    /// Current normalized query text.
    pub fn query(&self) -> &str {
        self.state.query.as_str()
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        self.state.load_error.as_ref()
    }

    pub fn poem_of_the_day_index(&self) -> Option<usize> {
        poem_of_the_day_index(self.calendar.day_of_month(), self.state.store.len())
    }

    pub fn poem_of_the_day(&self) -> Option<&PoemRecord> {
        self.poem_of_the_day_index()
            .and_then(|index| self.state.store.get(index))
    }

    fn content_for_query(&self) -> PageContent {
        if self.state.query.is_empty() {
            return self.unfiltered_content();
        }

        let hits = filter_poems(self.state.store.records(), self.state.query.as_str());
        PageContent::List(render_list(hits, self.state.query.highlight_term()))
    }

    fn unfiltered_content(&self) -> PageContent {
        if self.state.load_error.is_some() {
            return PageContent::LoadFailed {
                message: LOAD_FAILED_MESSAGE,
            };
        }

        let mut view = render_list(self.state.store.records(), None);
        if let Some(index) = self.poem_of_the_day_index() {
            view.mark_featured(index);
        }
        PageContent::List(view)
    }
}
