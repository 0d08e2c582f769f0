//! Hover tests.

use rstest::rstest;
use scrap::Position;
use scrap::catalog::Catalog;
use scrap::ide::hover;

use crate::helpers::analysis_helpers::{position_of, tree};
use crate::helpers::source_fixtures::*;

fn hover_text(source: &str, position: Position) -> Option<String> {
    hover(&tree(source), &Catalog::load(), position).map(|h| h.contents)
}

#[test]
fn test_hover_on_plus_describes_operator() {
    let contents = hover_text(ARITHMETIC, Position::new(0, 2)).unwrap();
    assert!(contents.contains("Addition"));
}

#[rstest]
#[case::pipe("x |> f", "|>", "Pipe")]
#[case::concat("a ++ b", "++", "Concatenate")]
#[case::cons("1 >+ xs", ">+", "Cons")]
#[case::power("2 ^ 8", "^", "Exponentiation")]
fn test_hover_operators(#[case] source: &str, #[case] op: &str, #[case] name: &str) {
    let contents = hover_text(source, position_of(source, op, 0)).unwrap();
    assert!(contents.contains(name), "{contents}");
}

#[test]
fn test_hover_builtin_in_pipeline() {
    let position = position_of(PIPELINE, "list/fold", 2);
    let contents = hover_text(PIPELINE, position).unwrap();
    assert!(contents.contains("list/fold"));
    assert!(contents.contains("Reduce a list"));
}

#[test]
fn test_hover_byte_literal_number() {
    let contents = hover_text("x = 255", Position::new(0, 5)).unwrap();
    assert!(contents.contains("0xff"));
    assert!(contents.contains("~ff"));
}

#[test]
fn test_hover_negative_integer_has_no_binary() {
    let contents = hover_text("x = -5", Position::new(0, 5)).unwrap();
    assert!(contents.contains("-5"));
    assert!(!contents.contains("Binary"));
}

#[test]
fn test_hover_where_names_binding() {
    let position = position_of(WHERE_BLOCK, "; width", 0);
    let contents = hover_text(WHERE_BLOCK, position).unwrap();
    assert!(contents.contains("Where clause"));
}

#[test]
fn test_hover_record() {
    let position = position_of(RECORD, "{", 0);
    let contents = hover_text(RECORD, position).unwrap();
    assert!(contents.contains("2 fields"));
}

#[test]
fn test_hover_text_literal() {
    let contents = hover_text("s = \"hello\"", Position::new(0, 6)).unwrap();
    assert!(contents.contains("5 characters"));
}

#[test]
fn test_hover_empty_document() {
    assert!(hover_text("", Position::new(0, 0)).is_none());
}
