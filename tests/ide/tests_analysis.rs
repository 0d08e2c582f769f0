//! Analysis host lifecycle tests.

use scrap::Position;
use scrap::config::Settings;
use scrap::ide::{AnalysisError, AnalysisHost};

use crate::helpers::analysis_helpers::{URI, analysis, initialized_host};
use crate::helpers::source_fixtures::*;

#[test]
fn test_uninitialized_host_refuses_requests() {
    let mut host = AnalysisHost::new();
    assert!(matches!(host.analysis(URI), Err(AnalysisError::NotInitialized)));
}

#[test]
fn test_end_to_end_requests() {
    let mut host = initialized_host();
    let analysis = analysis(&mut host);

    assert!(analysis.diagnostics(ARITHMETIC).is_empty());
    assert!(!analysis.diagnostics(MIXED_LIST).is_empty());

    let hover = analysis.hover(ARITHMETIC, Position::new(0, 2)).unwrap();
    assert!(hover.contents.contains("Addition"));

    let symbols = analysis.document_symbols(THREE_DECLARATIONS);
    assert_eq!(symbols.len(), 3);

    let items = analysis.completions("x = #", Position::new(0, 5));
    assert!(items.iter().any(|i| i.label.as_ref() == "ok"));

    let edit = analysis.rename("a = a", Position::new(0, 0), "b").unwrap();
    assert_eq!(edit.len(), 2);
}

#[test]
fn test_max_problems_from_document_settings() {
    let mut host = initialized_host();
    host.set_document_settings(URI, Settings::default().with_max_problems(1));
    let source = "a = [1, \"x\"]\nb = [1, \"x\"]";
    assert_eq!(analysis(&mut host).diagnostics(source).len(), 1);

    host.did_change_configuration(Settings::default());
    assert_eq!(analysis(&mut host).diagnostics(source).len(), 2);
}

#[test]
fn test_settings_from_client_json() {
    let settings =
        Settings::from_json(r#"{ "scrapscript": { "semanticTokens": false } }"#).unwrap();
    let mut host = AnalysisHost::new();
    host.initialize(settings);
    assert!(analysis(&mut host).semantic_tokens("x = 1").is_empty());
}

#[test]
fn test_deeply_nested_document_degrades_to_defaults() {
    let mut host = initialized_host();
    let analysis = analysis(&mut host);
    let text = "[".repeat(100_000);
    let at = Position::new(0, 10);

    let diagnostics = analysis.diagnostics(&text);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code.as_deref(), Some("E0000"));

    let items = analysis.completions(&text, at);
    assert!(items.iter().any(|i| i.label.as_ref() == "#true"));
    assert!(analysis.hover(&text, at).is_none());
    assert!(analysis.document_symbols(&text).is_empty());
    assert!(analysis.find_references(&text, at).is_empty());
    assert!(analysis.prepare_rename(&text, at).is_none());
    assert!(analysis.rename(&text, at, "y").is_none());
}
