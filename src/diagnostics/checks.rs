//! Structural checks run after parsing.
//!
//! Each check inspects the whole tree and returns its own diagnostics. A check
//! that cannot inspect a node returns [`CheckError`]; the engine logs it and
//! carries on with the remaining checks.

use rowan::NodeOrToken;
use thiserror::Error;

use super::{Diagnostic, codes};
use crate::base::TextRange;
use crate::config::Settings;
use crate::parser::{
    AstNode, Function, List, Number, PatternCase, PatternMatch, RecordField, SyntaxKind,
    SyntaxNode, Where,
};
use crate::syntax::{Tree, text, walk};

/// A check could not inspect part of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("node range {0:?} is outside the document")]
    RangeOutOfBounds(TextRange),
}

pub(crate) type CheckFn = fn(&Tree) -> Result<Vec<Diagnostic>, CheckError>;

/// A registered structural check.
pub(crate) struct Check {
    pub name: &'static str,
    pub enabled: fn(&Settings) -> bool,
    pub run: CheckFn,
}

/// Checks in registration order.
pub(crate) const CHECKS: &[Check] = &[
    Check {
        name: "pattern-exhaustiveness",
        enabled: |s| s.exhaustiveness_checking,
        run: check_pattern_exhaustiveness,
    },
    Check {
        name: "list-homogeneity",
        enabled: |s| s.type_checking,
        run: check_list_homogeneity,
    },
    Check {
        name: "where-clause",
        enabled: |s| s.enhanced_validation,
        run: check_where_clauses,
    },
    Check {
        name: "record-fields",
        enabled: |s| s.enhanced_validation,
        run: check_record_fields,
    },
    Check {
        name: "list-separators",
        enabled: |s| s.enhanced_validation,
        run: check_list_separators,
    },
    Check {
        name: "function-arrow",
        enabled: |s| s.enhanced_validation,
        run: check_function_arrows,
    },
];

/// All nodes of a kind, in document order
fn nodes_of_kind(tree: &Tree, kind: SyntaxKind) -> Vec<SyntaxNode> {
    let mut nodes = Vec::new();
    walk(&tree.root(), |n| {
        if n.kind() == kind {
            nodes.push(n.clone());
        }
    });
    nodes
}

// ============================================================================
// PATTERN EXHAUSTIVENESS
// ============================================================================

/// Patterns that match any value
fn is_catch_all(pattern: &SyntaxNode) -> bool {
    matches!(
        pattern.kind(),
        SyntaxKind::IDENTIFIER | SyntaxKind::PLACEHOLDER | SyntaxKind::HOLE
    )
}

fn check_pattern_exhaustiveness(tree: &Tree) -> Result<Vec<Diagnostic>, CheckError> {
    let mut diagnostics = Vec::new();
    for node in nodes_of_kind(tree, SyntaxKind::PATTERN_MATCH) {
        let Some(matcher) = PatternMatch::cast(node) else {
            continue;
        };
        let patterns: Vec<_> = matcher.cases().filter_map(|c| c.pattern()).collect();
        if !patterns.is_empty() && !patterns.iter().any(is_catch_all) {
            diagnostics.push(
                Diagnostic::warning(
                    tree.node_range(matcher.syntax()),
                    "Pattern match may not be exhaustive: \
                     consider adding a catch-all case '| _ -> ...'",
                )
                .with_code(codes::NON_EXHAUSTIVE_MATCH),
            );
        }
    }
    Ok(diagnostics)
}

// ============================================================================
// LIST HOMOGENEITY
// ============================================================================

/// Coarse syntactic type of a list element.
///
/// Elements whose type cannot be read off the syntax (identifiers,
/// applications of non-tags, operators) have none.
pub fn element_type(node: &SyntaxNode) -> Option<&'static str> {
    let ty = match node.kind() {
        SyntaxKind::NUMBER => match Number::cast(node.clone()) {
            Some(n) if n.is_float() => "float",
            _ => "int",
        },
        SyntaxKind::TEXT => "text",
        SyntaxKind::BYTES => "bytes",
        SyntaxKind::TAG => "tag",
        SyntaxKind::APPLY if node.first_child().is_some_and(|c| c.kind() == SyntaxKind::TAG) => {
            "tag"
        }
        SyntaxKind::LIST => "list",
        SyntaxKind::RECORD => "record",
        SyntaxKind::FUNCTION | SyntaxKind::PATTERN_MATCH => "function",
        SyntaxKind::HOLE => "hole",
        _ => return None,
    };
    Some(ty)
}

fn check_list_homogeneity(tree: &Tree) -> Result<Vec<Diagnostic>, CheckError> {
    let mut diagnostics = Vec::new();
    for node in nodes_of_kind(tree, SyntaxKind::LIST) {
        let Some(list) = List::cast(node) else {
            continue;
        };
        let mut types: Vec<&'static str> = Vec::new();
        for ty in list.elements().filter_map(|e| element_type(&e)) {
            if !types.contains(&ty) {
                types.push(ty);
            }
        }
        if types.len() > 1 {
            diagnostics.push(
                Diagnostic::error(
                    tree.node_range(list.syntax()),
                    format!(
                        "List contains elements of different types: {}",
                        types.join(", ")
                    ),
                )
                .with_code(codes::LIST_TYPE_MISMATCH),
            );
        }
    }
    Ok(diagnostics)
}

// ============================================================================
// WHERE CLAUSES
// ============================================================================

/// `; name = expression`, optionally with `name : type`
fn is_well_formed_binding(binding: &SyntaxNode) -> bool {
    if binding.kind() != SyntaxKind::DECLARATION {
        return false;
    }
    let mut children = binding.children();
    let name_ok = match children.next() {
        Some(pattern) if pattern.kind() == SyntaxKind::IDENTIFIER => true,
        Some(pattern) if pattern.kind() == SyntaxKind::TYPE_ANNOTATION => pattern
            .first_child()
            .is_some_and(|n| n.kind() == SyntaxKind::IDENTIFIER),
        _ => false,
    };
    let value_ok = children.next().is_some_and(|v| v.kind() != SyntaxKind::ERROR);
    name_ok && value_ok
}

fn check_where_clauses(tree: &Tree) -> Result<Vec<Diagnostic>, CheckError> {
    let mut diagnostics = Vec::new();
    for node in nodes_of_kind(tree, SyntaxKind::WHERE) {
        let Some(clause) = Where::cast(node) else {
            continue;
        };
        let well_formed = clause.semicolon().is_some()
            && clause.binding().is_some_and(|b| is_well_formed_binding(&b));
        if !well_formed {
            let range = clause
                .binding()
                .map(|b| tree.node_range(&b))
                .unwrap_or_else(|| tree.node_range(clause.syntax()));
            diagnostics.push(
                Diagnostic::error(
                    range,
                    "Where clause must have the form '; name = expression'",
                )
                .with_code(codes::MALFORMED_WHERE),
            );
        }
    }
    Ok(diagnostics)
}

// ============================================================================
// RECORD / LIST / FUNCTION SURFACE SYNTAX
// ============================================================================

fn check_record_fields(tree: &Tree) -> Result<Vec<Diagnostic>, CheckError> {
    let mut diagnostics = Vec::new();
    for node in nodes_of_kind(tree, SyntaxKind::RECORD_FIELD) {
        if node.children().count() >= 2 {
            continue;
        }
        let name = RecordField::cast(node.clone())
            .and_then(|f| f.name())
            .and_then(|n| n.name())
            .unwrap_or_default();
        diagnostics.push(
            Diagnostic::error(
                tree.node_range(&node),
                format!("Record field '{name}' has no value: expected '{name} = value'"),
            )
            .with_code(codes::RECORD_FIELD_WITHOUT_VALUE),
        );
    }
    Ok(diagnostics)
}

/// First separator problem among a list's own brackets and commas
fn separator_problem(list: &SyntaxNode) -> Option<&'static str> {
    let mut previous: Option<SyntaxKind> = None;
    for element in list.children_with_tokens() {
        let kind = match &element {
            NodeOrToken::Token(t) if t.kind().is_trivia() => continue,
            NodeOrToken::Token(t) => t.kind(),
            // Missing pieces are already reported as syntax errors
            NodeOrToken::Node(n) if n.kind() == SyntaxKind::ERROR => continue,
            NodeOrToken::Node(_) => SyntaxKind::LIST,
        };
        match (previous, kind) {
            (Some(SyntaxKind::COMMA), SyntaxKind::COMMA) => {
                return Some("Invalid list syntax: empty element between commas");
            }
            (Some(SyntaxKind::L_BRACKET), SyntaxKind::COMMA) => {
                return Some("Invalid list syntax: leading comma");
            }
            (Some(SyntaxKind::COMMA), SyntaxKind::R_BRACKET) => {
                return Some("Invalid list syntax: trailing comma");
            }
            _ => {}
        }
        previous = Some(kind);
    }
    None
}

fn check_list_separators(tree: &Tree) -> Result<Vec<Diagnostic>, CheckError> {
    let mut diagnostics = Vec::new();
    for node in nodes_of_kind(tree, SyntaxKind::LIST) {
        if let Some(message) = separator_problem(&node) {
            diagnostics.push(
                Diagnostic::error(tree.node_range(&node), message)
                    .with_code(codes::LIST_SEPARATOR),
            );
        }
    }
    Ok(diagnostics)
}

/// Functions and pattern cases without `->`; the parser leaves the arrow out
/// of a pattern case whose body it could not find.
fn check_function_arrows(tree: &Tree) -> Result<Vec<Diagnostic>, CheckError> {
    let mut diagnostics = Vec::new();
    let mut nodes = Vec::new();
    walk(&tree.root(), |n| {
        if matches!(n.kind(), SyntaxKind::FUNCTION | SyntaxKind::PATTERN_CASE) {
            nodes.push(n.clone());
        }
    });

    for node in nodes {
        let message = if let Some(function) = Function::cast(node.clone()) {
            if function.arrow().is_some() {
                continue;
            }
            "Function is missing '->' between its parameter and body".to_string()
        } else if let Some(case) = PatternCase::cast(node.clone()) {
            if case.arrow().is_some() {
                continue;
            }
            let raw = text(tree.text(), &node)
                .ok_or(CheckError::RangeOutOfBounds(node.text_range()))?;
            format!("Pattern case '{}' is missing '->' before its body", raw.trim())
        } else {
            continue;
        };
        diagnostics.push(
            Diagnostic::error(tree.node_range(&node), message)
                .with_code(codes::FUNCTION_WITHOUT_ARROW),
        );
    }
    Ok(diagnostics)
}
