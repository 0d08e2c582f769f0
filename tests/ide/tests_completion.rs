//! Code completion tests for the IDE layer.
//!
//! Completion runs while the user is typing, so most of these documents are
//! incomplete.

use rstest::rstest;
use scrap::Position;
use scrap::catalog::Catalog;
use scrap::ide::{CompletionContext, CompletionKind, ElementHint, complete, completion_context};

use crate::helpers::analysis_helpers::{position_of, tree};

fn labels(source: &str, position: Position) -> Vec<String> {
    complete(&tree(source), &Catalog::load(), position)
        .into_iter()
        .map(|item| item.label.to_string())
        .collect()
}

#[test]
fn test_cursor_after_hash_offers_tags() {
    let source = "status = #";
    let labels = labels(source, Position::new(0, 10));
    for tag in ["true", "false", "ok", "error"] {
        assert!(labels.contains(&tag.to_string()), "missing {tag} in {labels:?}");
    }
}

#[test]
fn test_tag_items_are_enum_members() {
    let items = complete(&tree("x = #o"), &Catalog::load(), Position::new(0, 6));
    assert!(items.iter().all(|i| i.kind == CompletionKind::EnumMember));
}

#[rstest]
#[case::tag("x = #", 0, 5, CompletionContext::Tag)]
#[case::where_prefix("x\n; ", 1, 2, CompletionContext::WhereClause)]
#[case::pattern("f =\n  | ", 1, 4, CompletionContext::PatternMatch)]
#[case::record_field("p.", 0, 2, CompletionContext::RecordField)]
#[case::annotation("x : ", 0, 4, CompletionContext::TypeAnnotation)]
#[case::import("use ", 0, 4, CompletionContext::Import)]
#[case::global("", 0, 0, CompletionContext::Global)]
fn test_context_classification(
    #[case] source: &str,
    #[case] line: u32,
    #[case] character: u32,
    #[case] expected: CompletionContext,
) {
    assert_eq!(
        completion_context(&tree(source), Position::new(line, character)),
        expected
    );
}

#[test]
fn test_pipe_operators_do_not_start_pattern_cases() {
    let source = "xs\n  |> ";
    assert_eq!(
        completion_context(&tree(source), Position::new(1, 5)),
        CompletionContext::Pipeline(ElementHint::Unknown)
    );
}

#[test]
fn test_pipeline_boosts_list_functions() {
    let source = "[1, 2] |> l";
    let items = complete(&tree(source), &Catalog::load(), Position::new(0, 11));
    assert!(items[0].label.starts_with("list/"));
    let first_other = items.iter().position(|i| !i.label.starts_with("list/")).unwrap();
    assert!(items[first_other..].iter().all(|i| !i.label.starts_with("list/")));
}

#[test]
fn test_pattern_snippets_are_ordered() {
    let source = "f =\n  | 0 -> 1\n  | ";
    let items = complete(&tree(source), &Catalog::load(), Position::new(2, 4));
    assert_eq!(items.len(), 10);
    assert!(items.iter().all(|i| i.is_snippet && i.kind == CompletionKind::Snippet));
    assert_eq!(items[1].label.as_ref(), "| _ -> default");
    let priorities: Vec<_> = items.iter().map(|i| i.sort_priority).collect();
    assert!(priorities.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_global_completion_has_no_duplicates() {
    let labels = labels("x", Position::new(0, 1));
    let mut sorted = labels.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), labels.len());
}

#[test]
fn test_where_clause_offers_snippet_first() {
    let source = "area = w * h\n; w";
    let items = complete(&tree(source), &Catalog::load(), position_of(source, "; w", 3));
    assert_eq!(items[0].label.as_ref(), "; identifier = expression");
    assert_eq!(items[0].insert_text.as_deref(), Some("; ${1:identifier} = ${2:expression}"));
}

#[test]
fn test_never_fails_outside_document() {
    let labels = labels("x = 1", Position::new(10, 10));
    assert!(labels.contains(&"list/map".to_string()));
}
