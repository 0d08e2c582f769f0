//! Tree shape tests for the expression grammar.

use rstest::rstest;
use scrap::parser::{SyntaxKind, SyntaxNode, parse};

/// Kinds of the nodes under the root, pre-order
fn shape(source: &str) -> Vec<SyntaxKind> {
    let parse = parse(source);
    assert!(parse.errors.is_empty(), "{source:?}: {:?}", parse.errors);
    parse.syntax().descendants().skip(1).map(|n| n.kind()).collect()
}

fn first_child(source: &str) -> SyntaxNode {
    parse(source).syntax().first_child().unwrap()
}

#[rstest]
#[case::identifier("x", SyntaxKind::IDENTIFIER)]
#[case::placeholder("_", SyntaxKind::PLACEHOLDER)]
#[case::int("42", SyntaxKind::NUMBER)]
#[case::float("3.14", SyntaxKind::NUMBER)]
#[case::negative("-1", SyntaxKind::NUMBER)]
#[case::text("\"hi\"", SyntaxKind::TEXT)]
#[case::bytes("~~aGVsbG8=", SyntaxKind::BYTES)]
#[case::byte("~2a", SyntaxKind::BYTES)]
#[case::tag("#true", SyntaxKind::TAG)]
#[case::hole("()", SyntaxKind::HOLE)]
#[case::parenthesized("(x)", SyntaxKind::PARENTHESIZED)]
#[case::list("[1, 2]", SyntaxKind::LIST)]
#[case::record("{ a = 1 }", SyntaxKind::RECORD)]
#[case::pattern_match("| x -> x", SyntaxKind::PATTERN_MATCH)]
#[case::function("x -> x", SyntaxKind::FUNCTION)]
#[case::apply("f x", SyntaxKind::APPLY)]
#[case::infix("a + b", SyntaxKind::INFIX)]
#[case::pipeline("a |> f", SyntaxKind::PIPELINE)]
#[case::access("r.a", SyntaxKind::RECORD_ACCESS)]
#[case::annotation("x : int", SyntaxKind::TYPE_ANNOTATION)]
#[case::where_clause("a ; a = 1", SyntaxKind::WHERE)]
#[case::declaration("a = 1", SyntaxKind::DECLARATION)]
fn test_top_level_kind(#[case] source: &str, #[case] kind: SyntaxKind) {
    let parse = parse(source);
    assert!(parse.errors.is_empty(), "{:?}", parse.errors);
    assert_eq!(parse.syntax().first_child().unwrap().kind(), kind);
}

#[test]
fn test_pipeline_binds_loosest() {
    let node = first_child("xs |> list/map f >> g");
    assert_eq!(node.kind(), SyntaxKind::PIPELINE);
}

#[test]
fn test_power_is_right_associative() {
    let node = first_child("2 ^ 3 ^ 2");
    let children: Vec<_> = node.children().map(|n| n.kind()).collect();
    assert_eq!(
        children,
        vec![SyntaxKind::NUMBER, SyntaxKind::OPERATOR, SyntaxKind::INFIX]
    );
}

#[test]
fn test_function_is_curried() {
    let node = first_child("a -> b -> a + b");
    assert_eq!(node.kind(), SyntaxKind::FUNCTION);
    assert_eq!(node.children().nth(1).unwrap().kind(), SyntaxKind::FUNCTION);
}

#[test]
fn test_guarded_pattern_case() {
    assert_eq!(
        shape("| n ? n > 0 -> n"),
        vec![
            SyntaxKind::PATTERN_MATCH,
            SyntaxKind::PATTERN_CASE,
            SyntaxKind::IDENTIFIER,
            SyntaxKind::GUARD,
            SyntaxKind::INFIX,
            SyntaxKind::IDENTIFIER,
            SyntaxKind::OPERATOR,
            SyntaxKind::NUMBER,
            SyntaxKind::IDENTIFIER,
        ]
    );
}

#[test]
fn test_list_spread() {
    assert_eq!(
        shape("[x, ..xs]"),
        vec![
            SyntaxKind::LIST,
            SyntaxKind::IDENTIFIER,
            SyntaxKind::SPREAD,
            SyntaxKind::IDENTIFIER,
        ]
    );
}

#[test]
fn test_comments_are_trivia() {
    let parse = parse("-- header\nx = 1 -- trailing");
    assert!(parse.errors.is_empty());
    let declarations = parse
        .syntax()
        .children()
        .filter(|n| n.kind() == SyntaxKind::DECLARATION)
        .count();
    assert_eq!(declarations, 1);
}

#[test]
fn test_multiline_application_continues() {
    let node = first_child("f\n  x\n  y");
    assert_eq!(node.kind(), SyntaxKind::APPLY);
    assert_eq!(node.text().to_string(), "f\n  x\n  y");
}
