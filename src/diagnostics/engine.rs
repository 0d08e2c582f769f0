//! The diagnostic pipeline: parse, report syntax errors, run checks, truncate.

use tracing::{debug, trace, warn};

use super::checks::{CHECKS, Check};
use super::{Diagnostic, DiagnosticCollector, codes, syntax_error_message};
use crate::base::Range;
use crate::config::Settings;
use crate::parser::SyntaxKind;
use crate::syntax::{Tree, walk};

/// Diagnose a document with the default checks, keeping at most `max_count`
/// diagnostics.
pub fn diagnose(text: &str, max_count: usize) -> Vec<Diagnostic> {
    diagnose_with(text, &Settings::default().with_max_problems(max_count))
}

/// Diagnose a document, honouring the settings' cap and check toggles.
pub fn diagnose_with(text: &str, settings: &Settings) -> Vec<Diagnostic> {
    let max = settings.max_number_of_problems;
    debug!(len = text.len(), max, "diagnose");
    if max == 0 {
        return Vec::new();
    }

    let tree = match Tree::parse(text) {
        Ok(tree) => tree,
        Err(failure) => {
            return vec![
                Diagnostic::error(
                    Range::zero(),
                    format!("Failed to parse document: {failure}"),
                )
                .with_code(codes::PARSE_FAILURE),
            ];
        }
    };

    let mut collector = DiagnosticCollector::new();
    if tree.has_errors() {
        collect_syntax_errors(&tree, &mut collector);
    }

    run_checks(&tree, settings, CHECKS, &mut collector);

    debug!(count = collector.len(), max, "diagnostics collected");
    collector.finish(max)
}

/// Run enabled checks in order. A failing check is logged and skipped.
fn run_checks(
    tree: &Tree,
    settings: &Settings,
    checks: &[Check],
    collector: &mut DiagnosticCollector,
) {
    for check in checks {
        if !(check.enabled)(settings) {
            trace!(check = check.name, "check disabled");
            continue;
        }
        match (check.run)(tree) {
            Ok(diagnostics) => collector.extend(diagnostics),
            Err(error) => warn!(check = check.name, %error, "check failed; skipping"),
        }
    }
}

fn collect_syntax_errors(tree: &Tree, collector: &mut DiagnosticCollector) {
    walk(&tree.root(), |node| {
        if node.kind() == SyntaxKind::ERROR {
            collector.add(
                Diagnostic::error(tree.node_range(node), syntax_error_message(node))
                    .with_code(codes::SYNTAX_ERROR),
            );
        }
    });
}
