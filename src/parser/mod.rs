//! Rowan-based parser for Scrapscript
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! This is the rust-analyzer approach: we build a lossless CST that preserves
//! all whitespace and comments, then read it through typed wrappers.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//! ```
//!
//! The parser never fails: malformed input produces `ERROR` nodes and a list
//! of [`SyntaxError`]s alongside a complete tree.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod grammar;
pub mod keywords;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use keywords::{KEYWORDS, is_keyword};
pub use lexer::{Lexer, NumberKind, Token, tokenize};
pub use parser::{MAX_DEPTH, Parse, SyntaxError, parse};
pub use syntax_kind::{
    ScrapLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
