//! Error recovery tests: incomplete documents still produce a full tree.

use rstest::rstest;
use scrap::parser::{SyntaxKind, parse};
use scrap::syntax::has_error;

#[rstest]
#[case::missing_value("x =")]
#[case::missing_operand("x = 1 +")]
#[case::unclosed_paren("x = (1")]
#[case::unclosed_record("r = { a = 1")]
#[case::missing_arrow("f = | x x")]
#[case::dangling_hash("t = #")]
#[case::stray_closer("x = 1 )")]
#[case::missing_binding("a ;")]
fn test_errors_are_recovered(#[case] source: &str) {
    let parse = parse(source);
    assert!(!parse.errors.is_empty());
    assert!(has_error(&parse.syntax()));
    assert_eq!(parse.syntax().text().to_string(), source);
}

#[test]
fn test_recovery_keeps_following_declarations() {
    let parse = parse("a = (1\nb = 2");
    assert!(!parse.errors.is_empty());
    let text = parse.syntax().text().to_string();
    assert_eq!(text, "a = (1\nb = 2");
}

#[test]
fn test_error_ranges_lie_within_document() {
    let source = "x = [1, 2\ny = { a";
    let parse = parse(source);
    let len = u32::try_from(source.len()).unwrap();
    for error in &parse.errors {
        assert!(u32::from(error.range.end()) <= len);
    }
}

#[test]
fn test_missing_closer_reports_expected_token() {
    let parse = parse("x = [1, 2");
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].message, "expected ']'");
    let error_nodes = parse
        .syntax()
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::ERROR)
        .count();
    assert_eq!(error_nodes, 1);
}
