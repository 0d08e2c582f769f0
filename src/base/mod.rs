//! Foundation types for the analysis engine.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`Position`], [`Range`] - Editor coordinates (zero-based, UTF-16 columns)
//!
//! This module has NO dependencies on other crate modules.

mod position;
mod span;

pub use position::{Position, Range};
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
