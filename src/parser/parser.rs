//! Recursive descent parser for Scrapscript
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.

use super::grammar::{ExpressionParser, at_expression_start, parse_item};
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Deepest nesting of functions and operator operands the parser descends
/// into. Anything deeper is consumed as a single error.
pub const MAX_DEPTH: usize = 256;

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
    /// Parsing stopped at [`MAX_DEPTH`]
    pub too_deep: bool,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse Scrapscript source code into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_source_file();
    parser.finish()
}

/// The parser state
///
/// `pos` indexes the raw token stream, trivia included. Trivia between `pos`
/// and the next significant token has not been added to the tree yet.
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
    depth: usize,
    too_deep: bool,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
            depth: 0,
            too_deep: false,
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
            too_deep: self.too_deep,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    /// Index of the nth significant token at or after `pos`
    fn nth_index(&self, n: usize) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .skip(self.pos)
            .filter(|(_, t)| !t.kind.is_trivia())
            .nth(n)
            .map(|(idx, _)| idx)
    }

    fn current(&self) -> Option<&Token<'a>> {
        self.nth_index(0).map(|idx| &self.tokens[idx])
    }

    /// End offset of the last token added to the tree
    fn last_end(&self) -> TextSize {
        self.pos
            .checked_sub(1)
            .and_then(|idx| self.tokens.get(idx))
            .map(|t| t.offset + TextSize::of(t.text))
            .unwrap_or_default()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    /// Add pending trivia to the current node
    fn flush_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn error(&mut self, message: impl Into<String>, range: TextRange) {
        self.errors.push(SyntaxError::new(message, range));
    }

    /// Consume everything left in one `ERROR` node
    fn skip_rest(&mut self, message: &str) {
        let start = self.current().map(|t| t.offset).unwrap_or_else(|| self.last_end());
        self.start_node(SyntaxKind::ERROR);
        while !self.at_eof() {
            self.bump();
        }
        self.finish_node();
        self.error(message, TextRange::new(start, self.last_end().max(start)));
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// SourceFile = Item*
    fn parse_source_file(&mut self) {
        // The root must be open before any token, leading trivia included.
        self.builder.start_node(SyntaxKind::SOURCE_FILE.into());

        while !self.at_eof() {
            let pos_before = self.pos;
            if at_expression_start(self) {
                parse_item(self);
            } else {
                let message = match self.current() {
                    Some(t) => format!("unexpected '{}'", t.text),
                    None => "unexpected token".to_string(),
                };
                self.recover_one(&message);
            }
            // Safety: if we didn't make progress, force-skip a token
            if self.pos == pos_before && !self.at_eof() {
                self.recover_one("unexpected token");
            }
        }

        self.flush_trivia();
        self.builder.finish_node();
    }
}

impl ExpressionParser for Parser<'_> {
    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        !self.at_eof() && self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        !self.at_eof() && kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.current().is_none()
    }

    fn peek_kind(&self, n: usize) -> SyntaxKind {
        self.nth_index(n)
            .map(|idx| self.tokens[idx].kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    fn newline_before(&self) -> bool {
        let end = self.nth_index(0).unwrap_or(self.tokens.len());
        self.tokens[self.pos..end]
            .iter()
            .any(|t| t.kind == SyntaxKind::WHITESPACE && t.text.contains('\n'))
    }

    fn bump(&mut self) {
        self.flush_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn expect(&mut self, kind: SyntaxKind, message: &str) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            self.missing(message);
            false
        }
    }

    fn enter(&mut self) -> bool {
        if self.too_deep {
            return false;
        }
        if self.depth >= MAX_DEPTH {
            self.too_deep = true;
            self.skip_rest("expression is nested too deeply");
            return false;
        }
        self.depth += 1;
        true
    }

    fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.flush_trivia();
        self.builder.checkpoint()
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.builder.start_node(kind.into());
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn missing(&mut self, message: &str) {
        // Pending trivia stays outside so the node sits right after the
        // previous token.
        let at = self.last_end();
        self.error(message, TextRange::empty(at));
        self.builder.start_node(SyntaxKind::ERROR.into());
        self.builder.finish_node();
    }

    fn recover_one(&mut self, message: &str) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(self.last_end()));
        self.error(message, range);
        self.start_node(SyntaxKind::ERROR);
        self.bump();
        self.finish_node();
    }
}
