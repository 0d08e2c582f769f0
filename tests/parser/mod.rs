//! Parser tests
//!
//! Tests for:
//! - Tree shapes of the expression grammar
//! - Error recovery on incomplete documents

pub mod tests_expressions;
pub mod tests_recovery;
