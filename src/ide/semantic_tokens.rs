//! Semantic tokens: syntax highlighting classes for the tokens of a document.

use tracing::debug;

use crate::base::TextSize;
use crate::catalog::Catalog;
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken, is_keyword};
use crate::syntax::{Tree, parent_is};

/// Token type for semantic highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Comment,
    Number,
    String,
    EnumMember,
    Operator,
    Function,
    Keyword,
    Variable,
}

impl TokenType {
    /// Convert to LSP token type index, an index into [`TOKEN_TYPES`].
    pub fn to_lsp_index(self) -> u32 {
        match self {
            TokenType::Comment => 0,
            TokenType::Number => 1,
            TokenType::String => 2,
            TokenType::EnumMember => 3,
            TokenType::Operator => 4,
            TokenType::Function => 5,
            TokenType::Keyword => 6,
            TokenType::Variable => 7,
        }
    }
}

/// Token type legend advertised to the client.
pub const TOKEN_TYPES: &[&str] = &[
    "comment",
    "number",
    "string",
    "enumMember",
    "operator",
    "function",
    "keyword",
    "variable",
];

/// Token modifier legend; bit 0 marks the name bound by a declaration.
pub const TOKEN_MODIFIERS: &[&str] = &["declaration"];

/// A semantic token for syntax highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticToken {
    /// Line number (0-indexed)
    pub line: u32,
    /// Column number (0-indexed, UTF-16)
    pub col: u32,
    /// Length of the token in UTF-16 code units
    pub length: u32,
    /// The token type
    pub token_type: TokenType,
    /// Whether the token is the name a declaration binds
    pub is_declaration: bool,
}

impl SemanticToken {
    /// Modifier bitset for the LSP encoding
    pub fn modifiers(&self) -> u32 {
        u32::from(self.is_declaration)
    }
}

/// Get semantic tokens for a document, in document order.
///
/// Tokens spanning several lines are split into one token per line.
pub fn semantic_tokens(tree: &Tree, catalog: &Catalog) -> Vec<SemanticToken> {
    let mut tokens = Vec::new();

    for token in tree
        .root()
        .descendants_with_tokens()
        .filter_map(|e| e.into_token())
    {
        let Some((token_type, is_declaration)) = classify(catalog, &token) else {
            continue;
        };
        push_lines(tree, &token, token_type, is_declaration, &mut tokens);
    }

    debug!(count = tokens.len(), "semantic tokens");
    tokens
}

fn classify(catalog: &Catalog, token: &SyntaxToken) -> Option<(TokenType, bool)> {
    let kind = token.kind();
    let in_parent = |parent: SyntaxKind| token.parent().is_some_and(|p| p.kind() == parent);

    let token_type = match kind {
        SyntaxKind::COMMENT => TokenType::Comment,
        SyntaxKind::INT_NUMBER | SyntaxKind::FLOAT_NUMBER => TokenType::Number,
        SyntaxKind::MINUS if in_parent(SyntaxKind::NUMBER) => TokenType::Number,
        SyntaxKind::STRING | SyntaxKind::BYTES_LIT | SyntaxKind::BYTE_LIT => TokenType::String,
        SyntaxKind::HASH => TokenType::EnumMember,
        SyntaxKind::IDENT => return Some(classify_identifier(catalog, token)),
        SyntaxKind::ARROW
        | SyntaxKind::EQ
        | SyntaxKind::COLON
        | SyntaxKind::PIPE
        | SyntaxKind::QUESTION
        | SyntaxKind::DOT_DOT => TokenType::Operator,
        _ if kind.is_binary_operator() => TokenType::Operator,
        _ => return None,
    };
    Some((token_type, false))
}

fn classify_identifier(catalog: &Catalog, token: &SyntaxToken) -> (TokenType, bool) {
    let Some(identifier) = token.parent() else {
        return (TokenType::Variable, false);
    };
    if parent_is(&identifier, SyntaxKind::TAG) {
        return (TokenType::EnumMember, false);
    }
    let name = token.text();
    if catalog.is_builtin(name) {
        return (TokenType::Function, false);
    }
    if is_keyword(name) {
        return (TokenType::Keyword, false);
    }
    (TokenType::Variable, is_declared_name(&identifier))
}

/// The identifier is the pattern of a declaration, possibly annotated
fn is_declared_name(identifier: &SyntaxNode) -> bool {
    let Some(parent) = identifier.parent() else {
        return false;
    };
    let pattern = match parent.kind() {
        SyntaxKind::DECLARATION => parent.first_child(),
        SyntaxKind::TYPE_ANNOTATION if parent_is(&parent, SyntaxKind::DECLARATION) => {
            let is_pattern = parent
                .parent()
                .and_then(|decl| decl.first_child())
                .is_some_and(|first| first == parent);
            if !is_pattern {
                return false;
            }
            parent.first_child()
        }
        _ => None,
    };
    pattern.is_some_and(|p| &p == identifier)
}

fn push_lines(
    tree: &Tree,
    token: &SyntaxToken,
    token_type: TokenType,
    is_declaration: bool,
    out: &mut Vec<SemanticToken>,
) {
    let mut offset = token.text_range().start();
    for piece in token.text().split('\n') {
        let content = piece.strip_suffix('\r').unwrap_or(piece);
        if !content.is_empty() {
            let start = tree.line_index().position(offset);
            out.push(SemanticToken {
                line: start.line,
                col: start.character,
                length: content.encode_utf16().count() as u32,
                token_type,
                is_declaration,
            });
        }
        offset += TextSize::of(piece) + TextSize::of('\n');
    }
}
