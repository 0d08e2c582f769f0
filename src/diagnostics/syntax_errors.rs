//! Wording for `ERROR` nodes, chosen by the construct they interrupt.

use crate::parser::{SyntaxKind, SyntaxNode};

/// Message for an `ERROR` node, based on its parent's kind.
pub fn syntax_error_message(error: &SyntaxNode) -> String {
    let Some(parent) = error.parent() else {
        return "Syntax error".to_string();
    };
    let message = match parent.kind() {
        SyntaxKind::WHERE => "Invalid where clause: expected '; name = expression'",
        SyntaxKind::DECLARATION => "Invalid declaration: expected 'name = expression'",
        SyntaxKind::PATTERN_MATCH | SyntaxKind::PATTERN_CASE => {
            "Invalid pattern match: expected '| pattern -> expression'"
        }
        SyntaxKind::FUNCTION => "Invalid function: expected 'pattern -> expression'",
        SyntaxKind::RECORD => "Invalid record: expected '{ field = value, ... }'",
        SyntaxKind::LIST => "Invalid list: expected '[ element, ... ]'",
        SyntaxKind::TAG => "Invalid tag: expected '#name'",
        SyntaxKind::INFIX => "Invalid operator expression: missing operand",
        SyntaxKind::APPLY => "Invalid function application",
        other => return format!("Syntax error in {}", other),
    };
    message.to_string()
}
