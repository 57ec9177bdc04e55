//! View models for the list and single-poem displays.
//!
//! # Responsibility
//! - Shape poem records into card/detail descriptors.
//! - Keep data shaping independent from markup syntax.
//!
//! # Invariants
//! - Rendering is pure: same input, same view.
//! - An empty input always yields [`ListView::Empty`].

use super::labels::{NO_RESULTS_MESSAGE, THEME_SEPARATOR};
use crate::model::poem::{PoemId, PoemRecord};
use crate::search::highlight::{Highlighter, PoemLine};

/// Fragment the "go back" affordance points to.
pub const BACK_FRAGMENT: &str = "#";

/// Card descriptor for one record in the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemCard {
    pub id: PoemId,
    pub slug: String,
    pub title: String,
    pub poet: String,
    pub year: String,
    pub lines: Vec<PoemLine>,
    /// `#poem/<slug>` link behind the "read more" affordance.
    pub link: String,
    /// Set on the poem-of-the-day card only.
    pub featured: bool,
}

/// Content of the list region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Zero records; the placeholder message replaces every card.
    Empty { message: &'static str },
    Cards(Vec<PoemCard>),
}

impl ListView {
    pub fn cards(&self) -> &[PoemCard] {
        match self {
            Self::Empty { .. } => &[],
            Self::Cards(cards) => cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Marks the card at `index` as featured.
    ///
    /// Returns `false` when no card exists at that position.
    pub fn mark_featured(&mut self, index: usize) -> bool {
        match self {
            Self::Empty { .. } => false,
            Self::Cards(cards) => match cards.get_mut(index) {
                Some(card) => {
                    card.featured = true;
                    true
                }
                None => false,
            },
        }
    }

    pub fn featured_index(&self) -> Option<usize> {
        self.cards().iter().position(|card| card.featured)
    }
}

/// Full-page descriptor for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemDetailView {
    pub id: PoemId,
    pub slug: String,
    pub title: String,
    pub poet: String,
    pub year: String,
    pub lines: Vec<PoemLine>,
    /// Theme tags joined with [`THEME_SEPARATOR`].
    pub themes: String,
    pub back_link: &'static str,
}

/// Builds the list view for `records`.
///
/// `highlight_query` emphasizes query occurrences in poem text; `None` or an
/// empty query renders lines unmarked.
pub fn render_list<'a, I>(records: I, highlight_query: Option<&str>) -> ListView
where
    I: IntoIterator<Item = &'a PoemRecord>,
{
    let highlighter = Highlighter::new(highlight_query.unwrap_or_default());
    let cards = records
        .into_iter()
        .map(|record| PoemCard {
            id: record.id,
            slug: record.slug.clone(),
            title: record.title.clone(),
            poet: record.poet.clone(),
            year: record.year.to_string(),
            lines: highlighter.highlight(&record.poem),
            link: record.fragment(),
            featured: false,
        })
        .collect::<Vec<_>>();

    if cards.is_empty() {
        ListView::Empty {
            message: NO_RESULTS_MESSAGE,
        }
    } else {
        ListView::Cards(cards)
    }
}

/// Builds the single-poem view.
pub fn render_single(record: &PoemRecord) -> PoemDetailView {
    PoemDetailView {
        id: record.id,
        slug: record.slug.clone(),
        title: record.title.clone(),
        poet: record.poet.clone(),
        year: record.year.to_string(),
        lines: Highlighter::new("").highlight(&record.poem),
        themes: record.themes_joined(THEME_SEPARATOR),
        back_link: BACK_FRAGMENT,
    }
}
