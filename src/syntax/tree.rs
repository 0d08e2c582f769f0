//! Owned parse tree for a single document.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::warn;

use crate::base::{LineIndex, Position, Range, TextRange, TextSize};
use crate::parser::{MAX_DEPTH, Parse, SyntaxError, SyntaxNode, SyntaxToken, parse};

/// The parser could not produce a tree at all.
///
/// Recoverable syntax errors never produce this; they become `ERROR` nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// Offsets would not fit the tree's 32-bit text positions.
    #[error("document is too large to parse ({len} bytes)")]
    TooLarge { len: usize },

    /// Expressions nest deeper than the parser descends.
    #[error("expressions are nested more than {limit} levels deep")]
    TooDeep { limit: usize },

    /// The parser aborted.
    #[error("parser aborted: {0}")]
    Aborted(String),
}

/// A parsed document: the CST, its parse errors, the source text and the
/// line index used to convert between byte offsets and editor positions.
///
/// Built fresh for every request and never mutated.
#[derive(Debug, Clone)]
pub struct Tree {
    parse: Parse,
    text: String,
    line_index: LineIndex,
}

impl Tree {
    /// Parse a document.
    pub fn parse(text: &str) -> Result<Self, ParseFailure> {
        if u32::try_from(text.len()).is_err() {
            warn!(len = text.len(), "document exceeds parser limits");
            return Err(ParseFailure::TooLarge { len: text.len() });
        }

        let parse = panic::catch_unwind(AssertUnwindSafe(|| parse(text))).map_err(|payload| {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown error".to_string());
            warn!(%reason, "parser aborted");
            ParseFailure::Aborted(reason)
        })?;
        if parse.too_deep {
            warn!(limit = MAX_DEPTH, "document nests too deeply");
            return Err(ParseFailure::TooDeep { limit: MAX_DEPTH });
        }

        Ok(Self {
            parse,
            text: text.to_string(),
            line_index: LineIndex::new(text),
        })
    }

    /// Root node of the tree
    pub fn root(&self) -> SyntaxNode {
        self.parse.syntax()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Parse errors in the order they were encountered
    pub fn errors(&self) -> &[SyntaxError] {
        &self.parse.errors
    }

    /// Whether the tree contains any `ERROR` node
    pub fn has_errors(&self) -> bool {
        super::has_error(&self.root())
    }

    /// Editor range of a node
    pub fn node_range(&self, node: &SyntaxNode) -> Range {
        self.line_index.range(node.text_range())
    }

    /// Editor range of a token
    pub fn token_range(&self, token: &SyntaxToken) -> Range {
        self.line_index.range(token.text_range())
    }

    pub fn range(&self, range: TextRange) -> Range {
        self.line_index.range(range)
    }

    /// Byte offset of an editor position, if it lies within the document
    pub fn offset(&self, position: Position) -> Option<TextSize> {
        self.line_index.offset(position)
    }

    /// Text of the line containing `position`, up to the position
    pub fn line_prefix(&self, position: Position) -> &str {
        let Some(end) = self.offset(position) else {
            return "";
        };
        let line_start = self.line_index.offset(Position::new(position.line, 0));
        let start = line_start.map(usize::from).unwrap_or(0);
        self.text.get(start..usize::from(end)).unwrap_or("")
    }
}
