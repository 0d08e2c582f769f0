//! Position and ancestry queries over the CST.

use rowan::{Direction, NodeOrToken, TokenAtOffset};

use crate::base::Position;
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken};

use super::Tree;

/// Find the token at a position.
///
/// At a boundary between two tokens the left one wins, unless it is trivia
/// and the right one is not.
pub fn token_at(tree: &Tree, position: Position) -> Option<SyntaxToken> {
    let offset = tree.offset(position)?;
    match tree.root().token_at_offset(offset) {
        TokenAtOffset::None => None,
        TokenAtOffset::Single(token) => Some(token),
        TokenAtOffset::Between(left, right) => {
            if left.kind().is_trivia() && !right.kind().is_trivia() {
                Some(right)
            } else {
                Some(left)
            }
        }
    }
}

/// The deepest node containing `position`.
///
/// Returns `None` only when the position lies outside the document.
pub fn locate(tree: &Tree, position: Position) -> Option<SyntaxNode> {
    tree.offset(position)?;
    match token_at(tree, position) {
        Some(token) => token.parent(),
        // Empty document
        None => Some(tree.root()),
    }
}

/// The node itself or its nearest ancestor of the given kind
pub fn ancestor_of_kind(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    node.ancestors().find(|n| n.kind() == kind)
}

/// Whether the parent of `node` has the given kind
pub fn parent_is(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.parent().is_some_and(|p| p.kind() == kind)
}

/// Source text covered by a node, sliced from the document by range
pub fn text<'a>(source: &'a str, node: &SyntaxNode) -> Option<&'a str> {
    let range = node.text_range();
    source.get(usize::from(range.start())..usize::from(range.end()))
}

/// Visit `node` and every descendant node in pre-order (document order).
pub fn walk(node: &SyntaxNode, mut visitor: impl FnMut(&SyntaxNode)) {
    for descendant in node.descendants() {
        visitor(&descendant);
    }
}

/// Whether the node is, or contains, an `ERROR` node
pub fn has_error(node: &SyntaxNode) -> bool {
    node.descendants().any(|n| n.kind() == SyntaxKind::ERROR)
}

/// The nearest non-trivia sibling before `node`, if it is a token
pub fn previous_sibling_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.siblings_with_tokens(Direction::Prev)
        .skip(1)
        .find(|e| !e.kind().is_trivia())
        .and_then(|e| match e {
            NodeOrToken::Token(t) => Some(t),
            NodeOrToken::Node(_) => None,
        })
}
