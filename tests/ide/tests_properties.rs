//! Property tests over arbitrary token soups.

use proptest::prelude::*;
use scrap::Position;
use scrap::diagnostics::diagnose;
use scrap::ide::symbols;
use scrap::syntax::{Tree, locate};

/// Sources assembled from fragments of the language, valid or not
fn source() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(vec![
        "x", "y", "list/map", "1", "2.5", "-3", "\"s\"", "~ff", "#ok", "_", "()", "=", "+", "*",
        "->", "|", "|>", ";", ":", ".", ",", "[", "]", "{", "}", "(", ")", "?", " ", "\n",
        "-- note\n",
    ]);
    prop::collection::vec(fragment, 0..40).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_diagnostics_truncate_to_a_prefix(text in source(), max in 0usize..8) {
        let all = diagnose(&text, 1000);
        let capped = diagnose(&text, max);
        prop_assert!(capped.len() <= max);
        prop_assert_eq!(&capped[..], &all[..capped.len()]);
    }

    #[test]
    fn prop_tree_is_lossless(text in source()) {
        let tree = Tree::parse(&text).unwrap();
        prop_assert_eq!(tree.root().text().to_string(), text);
    }

    #[test]
    fn prop_located_node_contains_position(text in source(), pick in any::<prop::sample::Index>()) {
        let tree = Tree::parse(&text).unwrap();
        let offset = pick.index(text.len() + 1);
        prop_assume!(text.is_char_boundary(offset));
        let position = tree.line_index().position(offset.try_into().unwrap());
        let node = locate(&tree, position).unwrap();
        let range = node.text_range();
        let offset: scrap::TextSize = offset.try_into().unwrap();
        prop_assert!(range.start() <= offset && offset <= range.end());
    }

    #[test]
    fn prop_symbols_are_idempotent(text in source()) {
        let tree = Tree::parse(&text).unwrap();
        prop_assert_eq!(symbols(&tree), symbols(&tree));
    }
}

#[test]
fn test_position_past_line_end_clamps() {
    let tree = Tree::parse("ab\ncd").unwrap();
    let node = locate(&tree, Position::new(0, 9)).unwrap();
    assert_eq!(node.text().to_string(), "ab");
    assert!(locate(&tree, Position::new(5, 0)).is_none());
}
