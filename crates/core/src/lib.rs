//! Domain logic for the YogaFlow backend.
//!
//! This crate is pure (no I/O, no database): shared types, the error
//! taxonomy, position-planning for sequence reordering, and search query
//! construction. The `db` and `api` crates build on it.

pub mod catalog;
pub mod error;
pub mod search;
pub mod sequencing;
pub mod types;
