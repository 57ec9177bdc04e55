//! Poem-of-the-day selection.
//!
//! # Invariants
//! - Selection is `day_of_month % record_count` over the unfiltered sequence.
//! - Empty collections select nothing.

use chrono::{Datelike, Local};

/// Source of the current calendar day.
pub trait Calendar {
    /// Day of month, `1..=31`.
    fn day_of_month(&self) -> u32;
}

impl<C: Calendar + ?Sized> Calendar for Box<C> {
    fn day_of_month(&self) -> u32 {
        (**self).day_of_month()
    }
}

/// Host-local calendar backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCalendar;

impl Calendar for LocalCalendar {
    fn day_of_month(&self) -> u32 {
        Local::now().day()
    }
}

/// Calendar pinned to one day; used by tests and reproducible renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCalendar(pub u32);

impl Calendar for FixedCalendar {
    fn day_of_month(&self) -> u32 {
        self.0
    }
}

/// Returns the poem-of-the-day position, or `None` for an empty collection.
pub fn poem_of_the_day_index(day_of_month: u32, record_count: usize) -> Option<usize> {
    if record_count == 0 {
        return None;
    }
    Some(day_of_month as usize % record_count)
}
