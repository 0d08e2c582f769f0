//! Find references and rename tests.

use scrap::catalog::Catalog;
use scrap::ide::{find_references, prepare_rename, rename};

use crate::helpers::analysis_helpers::{URI, position_of, tree};
use crate::helpers::source_fixtures::*;

#[test]
fn test_references_in_where_block() {
    let locations = find_references(&tree(WHERE_BLOCK), URI, position_of(WHERE_BLOCK, "width", 0));
    assert_eq!(locations.len(), 2);
    assert!(locations.iter().all(|l| l.uri.as_ref() == URI));
    assert!(locations[0].range.start < locations[1].range.start);
}

#[test]
fn test_references_are_textual() {
    // Two unrelated bindings named `x` are conflated
    let source = "f = x -> x\ng = x -> x + 1";
    let locations = find_references(&tree(source), URI, position_of(source, "x", 0));
    assert_eq!(locations.len(), 4);
}

#[test]
fn test_prepare_rename_rejects_builtins() {
    let catalog = Catalog::load();
    let position = position_of(PIPELINE, "list/map", 1);
    assert!(prepare_rename(&tree(PIPELINE), &catalog, position).is_none());
}

#[test]
fn test_prepare_rename_rejects_tags() {
    let source = "x = #ok";
    let catalog = Catalog::load();
    assert!(prepare_rename(&tree(source), &catalog, position_of(source, "ok", 1)).is_none());
}

#[test]
fn test_rename_recursive_function() {
    let position = position_of(FACTORIAL, "factorial", 0);
    let edit = rename(&tree(FACTORIAL), URI, position, "fact").unwrap();
    let edits = &edit.changes[URI];
    assert_eq!(edits.len(), 2);
    assert!(edits.iter().all(|e| e.new_text == "fact"));
}

#[test]
fn test_rename_inserts_name_verbatim() {
    let source = "a = 1";
    let edit = rename(&tree(source), URI, position_of(source, "a", 0), "not valid!").unwrap();
    assert_eq!(edit.changes[URI][0].new_text, "not valid!");
}
