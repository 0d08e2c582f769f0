//! # scrap-analysis
//!
//! Tree-driven language intelligence for Scrapscript: diagnostics,
//! completion, hover, outline, references, rename and semantic tokens.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide         → Analysis host, completion, hover, symbols, rename, tokens
//!   ↓
//! diagnostics → Syntax error reporting and structural checks
//!   ↓
//! catalog     → Built-in functions, operators, tags, types, modules
//! config      → Settings and the per-document settings cache
//!   ↓
//! syntax      → Owned parse trees and position queries
//!   ↓
//! parser      → Logos lexer, recursive-descent parser, rowan CST
//!   ↓
//! base        → Primitives (Position, Range, LineIndex, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → catalog/config → diagnostics → ide)
// ============================================================================

/// Foundation types: Position, Range, LineIndex
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, rowan syntax tree
pub mod parser;

/// Syntax: owned trees and navigation
pub mod syntax;

/// Static documentation tables
pub mod catalog;

/// Client configuration
pub mod config;

/// Diagnostics: syntax errors and structural checks
pub mod diagnostics;

/// IDE features: completion, hover, symbols, references, rename
pub mod ide;

// Re-export commonly needed items
pub use parser::keywords;

// Re-export foundation types
pub use base::{LineCol, LineIndex, Position, Range, TextRange, TextSize};
