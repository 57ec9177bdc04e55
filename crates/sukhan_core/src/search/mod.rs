//! Live search entry points.
//!
//! # Responsibility
//! - Filter the loaded collection by query text.
//! - Produce highlighted line spans for result rendering.

pub mod filter;
pub mod highlight;
