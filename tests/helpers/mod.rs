//! Shared helpers for integration tests.

pub mod analysis_helpers;
pub mod source_fixtures;
