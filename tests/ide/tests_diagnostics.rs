//! Diagnostics tests.

use rstest::rstest;
use scrap::config::Settings;
use scrap::diagnostics::{Severity, codes, diagnose, diagnose_with};

use crate::helpers::source_fixtures::*;

#[test]
fn test_clean_expression_has_no_diagnostics() {
    assert!(diagnose(ARITHMETIC, 100).is_empty());
}

#[test]
fn test_broken_where_reports_error_first() {
    let diagnostics = diagnose(BROKEN_WHERE, 100);
    assert!(!diagnostics.is_empty());
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(diagnostics[0].code.as_deref(), Some(codes::SYNTAX_ERROR));
}

#[test]
fn test_mixed_list_reports_element_types() {
    let diagnostics = diagnose(MIXED_LIST, 100);
    let mismatch = diagnostics
        .iter()
        .find(|d| d.code.as_deref() == Some(codes::LIST_TYPE_MISMATCH))
        .expect("list type mismatch reported");
    assert!(mismatch.message.contains("different types"));
    assert!(mismatch.message.contains("int, text, float"));
}

#[rstest]
#[case::catch_all_identifier("f =\n  | 0 -> 1\n  | n -> n", 0)]
#[case::catch_all_placeholder("f =\n  | 0 -> 1\n  | _ -> 2", 0)]
#[case::no_catch_all("f =\n  | 0 -> 1\n  | 1 -> 2", 1)]
fn test_exhaustiveness_warning(#[case] source: &str, #[case] warnings: usize) {
    let found = diagnose(source, 100)
        .into_iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    assert_eq!(found, warnings);
}

#[rstest]
#[case::leading("xs = [, 1]", "leading comma")]
#[case::trailing("xs = [1, ]", "trailing comma")]
#[case::empty("xs = [1, , 2]", "empty element")]
fn test_list_separator_messages(#[case] source: &str, #[case] fragment: &str) {
    let diagnostics = diagnose(source, 100);
    assert_eq!(diagnostics.len(), 1, "{diagnostics:?}");
    assert!(diagnostics[0].message.contains(fragment));
}

#[test]
fn test_record_field_without_value() {
    let diagnostics = diagnose("r = { a = 1, b }", 100);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message.as_ref(),
        "Record field 'b' has no value: expected 'b = value'"
    );
}

#[test]
fn test_where_binding_must_be_a_declaration() {
    let diagnostics = diagnose("a + b\n; b", 100);
    assert!(
        diagnostics
            .iter()
            .any(|d| d.code.as_deref() == Some(codes::MALFORMED_WHERE))
    );
}

#[test]
fn test_valid_where_block_is_clean() {
    assert!(diagnose(WHERE_BLOCK, 100).is_empty());
    assert!(diagnose(FACTORIAL, 100).is_empty());
    assert!(diagnose(PIPELINE, 100).is_empty());
    assert!(diagnose(RECORD, 100).is_empty());
}

#[test]
fn test_max_count_truncates() {
    let source = "a = [1, \"x\"]\nb = [1, \"x\"]\nc = [1, \"x\"]";
    assert_eq!(diagnose(source, 100).len(), 3);
    assert_eq!(diagnose(source, 2).len(), 2);
    assert!(diagnose(source, 0).is_empty());
}

#[test]
fn test_toggles_disable_checks() {
    let settings = Settings {
        type_checking: false,
        ..Settings::default()
    };
    assert!(diagnose_with(MIXED_LIST, &settings).is_empty());

    let settings = Settings {
        exhaustiveness_checking: false,
        ..Settings::default()
    };
    assert!(diagnose_with("f = | 0 -> 1", &settings).is_empty());
}

#[test]
fn test_diagnostics_carry_source() {
    let diagnostics = diagnose(MIXED_LIST, 100);
    assert!(diagnostics.iter().all(|d| d.source == "scrapscript"));
}
