//! Expression parsing for Scrapscript
//!
//! This module implements the precedence chain, lowest binding first:
//!
//! ```text
//! Item → Expression(where) → Annotated → Function → Binary(Pratt)
//!     → Application → Postfix(record access) → Atom
//! ```
//!
//! Binary operator levels, lowest first: `|>`, `>> <<`, `||`, `&&`,
//! comparisons, `++ >+ +<`, `+ -`, `* / %`, `^` (right associative).
//!
//! Every cycle through the chain passes `parse_function` or `parse_binary`,
//! so those two count nesting depth.

use super::atoms::{parse_atom, parse_identifier};
use super::{ATOM_START, ExpressionParser, at_expression_start};
use crate::parser::syntax_kind::SyntaxKind;

/// Item = Expression ('=' Expression)?
///
/// A top-level item is either a bare expression or a declaration.
/// Returns false if nothing could be parsed.
pub fn parse_item<P: ExpressionParser>(p: &mut P) -> bool {
    let cp = p.checkpoint();
    if !parse_expression(p) {
        return false;
    }
    if p.at(SyntaxKind::EQ) {
        p.start_node_at(cp, SyntaxKind::DECLARATION);
        p.bump(); // =
        if !parse_expression(p) {
            p.missing("expected expression after '='");
        }
        p.finish_node();
    }
    true
}

/// Expression = Annotated (';' Binding)*
///
/// Where-clauses nest to the left: `a ; a = 1 ; b = 2` is
/// `where(where(a ; a = 1) ; b = 2)`.
pub fn parse_expression<P: ExpressionParser>(p: &mut P) -> bool {
    let cp = p.checkpoint();
    if !parse_annotated(p) {
        return false;
    }
    while p.at(SyntaxKind::SEMICOLON) {
        p.start_node_at(cp, SyntaxKind::WHERE);
        p.bump(); // ;
        parse_binding(p);
        p.finish_node();
    }
    true
}

/// Binding = Annotated ('=' Annotated)?
///
/// A binding without `=` is left as a bare expression under the where node;
/// the where-clause validator reports it.
fn parse_binding<P: ExpressionParser>(p: &mut P) {
    if !at_expression_start(p) {
        p.missing("expected binding after ';'");
        return;
    }
    let cp = p.checkpoint();
    parse_annotated(p);
    if p.at(SyntaxKind::EQ) {
        p.start_node_at(cp, SyntaxKind::DECLARATION);
        p.bump(); // =
        if !parse_annotated(p) {
            p.missing("expected expression after '='");
        }
        p.finish_node();
    }
}

/// Annotated = Function (':' Function)?
pub fn parse_annotated<P: ExpressionParser>(p: &mut P) -> bool {
    let cp = p.checkpoint();
    if !parse_function(p) {
        return false;
    }
    if p.at(SyntaxKind::COLON) {
        p.start_node_at(cp, SyntaxKind::TYPE_ANNOTATION);
        p.bump(); // :
        if !parse_function(p) {
            p.missing("expected type after ':'");
        }
        p.finish_node();
    }
    true
}

/// Function = Binary ('->' Function)?
pub fn parse_function<P: ExpressionParser>(p: &mut P) -> bool {
    if !p.enter() {
        return false;
    }
    let parsed = parse_function_inner(p);
    p.exit();
    parsed
}

fn parse_function_inner<P: ExpressionParser>(p: &mut P) -> bool {
    let cp = p.checkpoint();
    if !parse_binary(p, 0) {
        return false;
    }
    if p.at(SyntaxKind::ARROW) {
        p.start_node_at(cp, SyntaxKind::FUNCTION);
        p.bump(); // ->
        if !parse_function(p) {
            p.missing("expected function body after '->'");
        }
        p.finish_node();
    }
    true
}

/// Left and right binding power of a binary operator
fn infix_binding_power(kind: SyntaxKind) -> Option<(u8, u8)> {
    use SyntaxKind::*;
    let bp = match kind {
        PIPE_GT => (1, 2),
        GT_GT | LT_LT => (3, 4),
        PIPE_PIPE => (5, 6),
        AMP_AMP => (7, 8),
        EQ_EQ | BANG_EQ | LT | GT | LT_EQ | GT_EQ => (9, 10),
        PLUS_PLUS | GT_PLUS | PLUS_LT => (11, 12),
        PLUS | MINUS => (13, 14),
        STAR | SLASH | PERCENT => (15, 16),
        CARET => (18, 17),
        _ => return None,
    };
    Some(bp)
}

/// Binary = Application (op Application)*, by binding power.
///
/// `|>` builds a `pipeline` node, every other operator an `infix` node.
/// Both carry the operator as an `operator` child node.
pub fn parse_binary<P: ExpressionParser>(p: &mut P, min_bp: u8) -> bool {
    if !p.enter() {
        return false;
    }
    let parsed = parse_binary_inner(p, min_bp);
    p.exit();
    parsed
}

fn parse_binary_inner<P: ExpressionParser>(p: &mut P, min_bp: u8) -> bool {
    let cp = p.checkpoint();
    if !parse_application(p) {
        return false;
    }

    loop {
        let op = p.current_kind();
        let Some((left_bp, right_bp)) = infix_binding_power(op) else {
            break;
        };
        if left_bp < min_bp {
            break;
        }

        let kind = if op == SyntaxKind::PIPE_GT {
            SyntaxKind::PIPELINE
        } else {
            SyntaxKind::INFIX
        };
        p.start_node_at(cp, kind);
        p.start_node(SyntaxKind::OPERATOR);
        p.bump();
        p.finish_node();
        if !parse_binary(p, right_bp) {
            p.missing("expected expression after operator");
        }
        p.finish_node();
    }
    true
}

/// Application = Postfix Postfix*
///
/// An argument on a new line that starts with `identifier =` begins the next
/// declaration instead of extending the application.
pub fn parse_application<P: ExpressionParser>(p: &mut P) -> bool {
    let cp = p.checkpoint();
    if !parse_postfix(p) {
        return false;
    }
    while p.at_any(ATOM_START) && !at_declaration_boundary(p) {
        p.start_node_at(cp, SyntaxKind::APPLY);
        parse_postfix(p);
        p.finish_node();
    }
    true
}

fn at_declaration_boundary<P: ExpressionParser>(p: &P) -> bool {
    p.newline_before() && p.at(SyntaxKind::IDENT) && p.peek_kind(1) == SyntaxKind::EQ
}

/// Postfix = Atom ('.' identifier)*
pub fn parse_postfix<P: ExpressionParser>(p: &mut P) -> bool {
    let cp = p.checkpoint();
    if !parse_atom(p) {
        return false;
    }
    while p.at(SyntaxKind::DOT) {
        p.start_node_at(cp, SyntaxKind::RECORD_ACCESS);
        p.bump(); // .
        if p.at(SyntaxKind::IDENT) {
            parse_identifier(p);
        } else {
            p.missing("expected field name after '.'");
        }
        p.finish_node();
    }
    true
}
