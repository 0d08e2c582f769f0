//! Semantic token tests.

use scrap::catalog::Catalog;
use scrap::ide::{TokenType, semantic_tokens};

use crate::helpers::analysis_helpers::tree;
use crate::helpers::source_fixtures::*;

#[test]
fn test_tokens_are_in_document_order() {
    let tokens = semantic_tokens(&tree(FACTORIAL), &Catalog::load());
    assert!(!tokens.is_empty());
    assert!(
        tokens
            .windows(2)
            .all(|w| (w[0].line, w[0].col) < (w[1].line, w[1].col))
    );
}

#[test]
fn test_declared_name_is_marked() {
    let tokens = semantic_tokens(&tree(FACTORIAL), &Catalog::load());
    let declared: Vec<_> = tokens.iter().filter(|t| t.is_declaration).collect();
    assert_eq!(declared.len(), 1);
    assert_eq!((declared[0].line, declared[0].col, declared[0].length), (1, 0, 9));
    assert_eq!(declared[0].modifiers(), 1);
}

#[test]
fn test_builtins_are_functions() {
    let tokens = semantic_tokens(&tree(PIPELINE), &Catalog::load());
    let functions = tokens
        .iter()
        .filter(|t| t.token_type == TokenType::Function)
        .count();
    assert_eq!(functions, 2);
}

#[test]
fn test_punctuation_is_not_highlighted() {
    let tokens = semantic_tokens(&tree("[1, 2]"), &Catalog::load());
    assert!(tokens.iter().all(|t| t.token_type == TokenType::Number));
    assert_eq!(tokens.len(), 2);
}
