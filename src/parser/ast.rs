//! Typed AST wrappers over the untyped rowan CST.
//!
//! Each struct wraps a SyntaxNode and provides methods to access children.
//! Named children are the child nodes; tokens are punctuation and trivia.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// First non-trivia token directly under a node
fn first_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| !t.kind().is_trivia())
}

/// First direct token child of the given kind
fn token_of_kind(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == kind)
}

// ============================================================================
// Bindings
// ============================================================================

ast_node!(Declaration, DECLARATION);

impl Declaration {
    /// The bound pattern (left-hand side)
    pub fn pattern(&self) -> Option<SyntaxNode> {
        self.0.first_child()
    }

    /// The bound expression (last named child)
    pub fn value(&self) -> Option<SyntaxNode> {
        let mut children = self.0.children();
        let first = children.next()?;
        children.last().filter(|last| last != &first)
    }
}

ast_node!(Where, WHERE);

impl Where {
    /// The node following `;`, normally a declaration
    pub fn binding(&self) -> Option<SyntaxNode> {
        self.0.children().nth(1)
    }

    pub fn semicolon(&self) -> Option<SyntaxToken> {
        token_of_kind(&self.0, SyntaxKind::SEMICOLON)
    }
}

// ============================================================================
// Leaves
// ============================================================================

ast_node!(Identifier, IDENTIFIER);

impl Identifier {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn name(&self) -> Option<String> {
        self.token().map(|t| t.text().to_string())
    }
}

ast_node!(Operator, OPERATOR);

impl Operator {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }
}

/// Parsed value of a numeric literal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    Int(i64),
    Float(f64),
}

ast_node!(Number, NUMBER);

impl Number {
    /// Literal text without trivia, including a leading `-`
    pub fn literal(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_string())
            .collect()
    }

    pub fn is_float(&self) -> bool {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .any(|t| t.kind() == SyntaxKind::FLOAT_NUMBER)
    }

    /// None when an integer literal does not fit in i64
    pub fn value(&self) -> Option<NumberValue> {
        let literal = self.literal();
        if self.is_float() {
            literal.parse().ok().map(NumberValue::Float)
        } else {
            literal.parse().ok().map(NumberValue::Int)
        }
    }
}

ast_node!(Tag, TAG);

impl Tag {
    pub fn name(&self) -> Option<Identifier> {
        self.0.children().find_map(Identifier::cast)
    }
}

// ============================================================================
// Functions
// ============================================================================

ast_node!(Function, FUNCTION);

impl Function {
    pub fn arrow(&self) -> Option<SyntaxToken> {
        token_of_kind(&self.0, SyntaxKind::ARROW)
    }
}

ast_node!(PatternMatch, PATTERN_MATCH);

impl PatternMatch {
    pub fn cases(&self) -> impl Iterator<Item = PatternCase> + '_ {
        self.0.children().filter_map(PatternCase::cast)
    }
}

ast_node!(PatternCase, PATTERN_CASE);

impl PatternCase {
    pub fn pattern(&self) -> Option<SyntaxNode> {
        self.0.first_child().filter(|n| n.kind() != SyntaxKind::GUARD)
    }

    /// The `->` separating the pattern (and guard) from the body
    pub fn arrow(&self) -> Option<SyntaxToken> {
        token_of_kind(&self.0, SyntaxKind::ARROW)
    }
}

// ============================================================================
// Collections
// ============================================================================

ast_node!(List, LIST);

impl List {
    pub fn elements(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children().filter(|n| n.kind() != SyntaxKind::ERROR)
    }
}

ast_node!(Record, RECORD);

impl Record {
    pub fn fields(&self) -> impl Iterator<Item = RecordField> + '_ {
        self.0.children().filter_map(RecordField::cast)
    }
}

ast_node!(RecordField, RECORD_FIELD);

impl RecordField {
    pub fn name(&self) -> Option<Identifier> {
        self.0.first_child().and_then(Identifier::cast)
    }

    pub fn value(&self) -> Option<SyntaxNode> {
        self.0.children().nth(1)
    }
}

// ============================================================================
// Operators
// ============================================================================

ast_node!(Infix, INFIX);

impl Infix {
    pub fn operator(&self) -> Option<Operator> {
        self.0.children().find_map(Operator::cast)
    }
}
