//! Page controller and its helpers.
//!
//! # Responsibility
//! - Orchestrate load, search and fragment navigation for one session.
//! - Select the poem of the day.
//!
//! # Invariants
//! - The controller holds no business rules beyond dispatch; filtering and
//!   rendering live in `search` and `render`.

pub mod controller;
pub mod daily;
pub mod route;

pub use controller::{PageContent, PageController, PageEvent, PageState};
pub use daily::{poem_of_the_day_index, Calendar, FixedCalendar, LocalCalendar};
pub use route::{parse_fragment, Route};
