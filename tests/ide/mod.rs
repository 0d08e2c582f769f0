//! IDE feature tests
//!
//! Tests for:
//! - Diagnostics
//! - Code completion
//! - Hover information
//! - Document symbols
//! - Find references and rename
//! - Semantic tokens
//! - The analysis host lifecycle

pub mod tests_analysis;
pub mod tests_completion;
pub mod tests_diagnostics;
pub mod tests_hover;
pub mod tests_properties;
pub mod tests_references;
pub mod tests_semantic_tokens;
pub mod tests_symbols;
