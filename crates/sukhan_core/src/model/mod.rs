//! Domain model for the poetry dataset.
//!
//! # Responsibility
//! - Define the record shape decoded from the external JSON dataset.
//!
//! # Invariants
//! - Every record is identified by a stable `PoemId` and a unique slug.

pub mod poem;
