//! Repository layer for persisted state.
//!
//! # Responsibility
//! - Define storage contracts used by services.
//! - Isolate SQLite query details from service orchestration.

pub mod preference_repo;
