//! Document symbol tests.

use scrap::Range;
use scrap::ide::{SymbolKind, symbols};

use crate::helpers::analysis_helpers::tree;
use crate::helpers::source_fixtures::*;

#[test]
fn test_three_declarations_in_source_order() {
    let symbols = symbols(&tree(THREE_DECLARATIONS));
    let names: Vec<_> = symbols.iter().map(|s| s.name.as_ref()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    let kinds: Vec<_> = symbols.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![SymbolKind::Number, SymbolKind::String, SymbolKind::Array]);
}

#[test]
fn test_expression_without_declarations_has_no_symbols() {
    assert!(symbols(&tree(ARITHMETIC)).is_empty());
}

#[test]
fn test_pattern_matching_function() {
    let symbols = symbols(&tree(FACTORIAL));
    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].name.as_ref(), "factorial");
    assert_eq!(symbols[0].kind, SymbolKind::Function);
    assert_eq!(symbols[0].detail.as_ref(), "Pattern matching function");
    assert_eq!(symbols[0].selection_range, Range::from_coords(1, 0, 1, 9));
}

#[test]
fn test_where_bindings_follow_their_declaration() {
    let names: Vec<_> = symbols(&tree(WHERE_BLOCK))
        .into_iter()
        .map(|s| s.name.to_string())
        .collect();
    assert_eq!(names, vec!["area", "width", "height"]);
}

#[test]
fn test_symbols_are_deterministic() {
    let first = symbols(&tree(RECORD));
    let second = symbols(&tree(RECORD));
    assert_eq!(first, second);
    assert_eq!(first[0].kind, SymbolKind::Object);
}

#[test]
fn test_declaration_with_syntax_error_still_listed() {
    let names: Vec<_> = symbols(&tree("a = [1, 2\nb = 3"))
        .into_iter()
        .map(|s| s.name.to_string())
        .collect();
    assert!(names.contains(&"a".to_string()));
}
