//! Grammar rules for Scrapscript parsing
//!
//! - `expressions` - the precedence chain (where, annotation, function, binary
//!   operators, application, record access)
//! - `atoms` - literals, tags, collections and pattern-matching functions
//!
//! The parsing functions are generic over [`ExpressionParser`] so the grammar
//! does not depend on how tokens are stored or how the tree is built.

pub mod atoms;
pub mod expressions;

use rowan::Checkpoint;

use crate::parser::syntax_kind::SyntaxKind;

pub use atoms::parse_atom;
pub use expressions::{parse_expression, parse_item};

/// Trait for expression parsing operations
///
/// This trait defines the interface between the grammar rules and the main
/// parser. All lookahead skips trivia; trivia is attached to the tree lazily
/// when the next significant token is consumed or a node is started.
pub trait ExpressionParser {
    // Token inspection
    fn current_kind(&self) -> SyntaxKind;
    fn at(&self, kind: SyntaxKind) -> bool;
    fn at_any(&self, kinds: &[SyntaxKind]) -> bool;
    fn at_eof(&self) -> bool;

    /// Peek at the kind of the nth significant token ahead
    fn peek_kind(&self, n: usize) -> SyntaxKind;

    /// Whether a line break separates the previous token from the current one
    fn newline_before(&self) -> bool;

    // Token consumption
    fn bump(&mut self);
    fn expect(&mut self, kind: SyntaxKind, message: &str) -> bool;

    // Nesting
    /// Enter a nested construct. Returns false once the nesting limit is
    /// reached; the rest of the input has then been consumed as an error.
    fn enter(&mut self) -> bool;
    /// Leave a construct entered with [`ExpressionParser::enter`]
    fn exit(&mut self);

    // Node building
    fn checkpoint(&mut self) -> Checkpoint;
    fn start_node(&mut self, kind: SyntaxKind);
    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind);
    fn finish_node(&mut self);

    // Error reporting
    /// Insert an empty `ERROR` node where something was required but absent
    fn missing(&mut self, message: &str);
    /// Wrap the current token in an `ERROR` node
    fn recover_one(&mut self, message: &str);
}

/// Tokens that can begin an application argument.
///
/// `|` and `-` are excluded: a pattern match needs parentheses to be passed
/// as an argument, and `f -1` reads as subtraction.
pub const ATOM_START: &[SyntaxKind] = &[
    SyntaxKind::IDENT,
    SyntaxKind::UNDERSCORE,
    SyntaxKind::INT_NUMBER,
    SyntaxKind::FLOAT_NUMBER,
    SyntaxKind::STRING,
    SyntaxKind::BYTES_LIT,
    SyntaxKind::BYTE_LIT,
    SyntaxKind::HASH,
    SyntaxKind::L_PAREN,
    SyntaxKind::L_BRACKET,
    SyntaxKind::L_BRACE,
];

/// Whether the current token can begin an expression
pub fn at_expression_start<P: ExpressionParser>(p: &P) -> bool {
    p.at_any(ATOM_START) || p.at(SyntaxKind::PIPE) || at_negative_number(p)
}

pub(crate) fn at_negative_number<P: ExpressionParser>(p: &P) -> bool {
    p.at(SyntaxKind::MINUS)
        && matches!(
            p.peek_kind(1),
            SyntaxKind::INT_NUMBER | SyntaxKind::FLOAT_NUMBER
        )
}
