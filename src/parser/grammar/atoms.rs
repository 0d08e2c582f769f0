//! Atom parsing: literals, tags, collections and pattern-matching functions
//!
//! ```text
//! Atom = identifier | '_' | number | text | bytes | Tag | Hole | Parenthesized
//!      | List | Record | PatternMatch
//! ```

use super::expressions::{parse_annotated, parse_binary, parse_expression, parse_function};
use super::{ExpressionParser, at_expression_start, at_negative_number};
use crate::parser::syntax_kind::SyntaxKind;

/// Parse an atom, returning false (without consuming) if none starts here
pub fn parse_atom<P: ExpressionParser>(p: &mut P) -> bool {
    match p.current_kind() {
        SyntaxKind::IDENT => parse_identifier(p),
        SyntaxKind::UNDERSCORE => leaf(p, SyntaxKind::PLACEHOLDER),
        SyntaxKind::INT_NUMBER | SyntaxKind::FLOAT_NUMBER => leaf(p, SyntaxKind::NUMBER),
        SyntaxKind::MINUS if at_negative_number(p) => {
            p.start_node(SyntaxKind::NUMBER);
            p.bump(); // -
            p.bump(); // digits
            p.finish_node();
        }
        SyntaxKind::STRING => leaf(p, SyntaxKind::TEXT),
        SyntaxKind::BYTES_LIT | SyntaxKind::BYTE_LIT => leaf(p, SyntaxKind::BYTES),
        SyntaxKind::HASH => parse_tag(p),
        SyntaxKind::L_PAREN => parse_parenthesized(p),
        SyntaxKind::L_BRACKET => parse_list(p),
        SyntaxKind::L_BRACE => parse_record(p),
        SyntaxKind::PIPE => parse_pattern_match(p),
        _ => return false,
    }
    true
}

/// Wrap the current token in a single-token node
fn leaf<P: ExpressionParser>(p: &mut P, kind: SyntaxKind) {
    p.start_node(kind);
    p.bump();
    p.finish_node();
}

/// Identifier = IDENT
pub fn parse_identifier<P: ExpressionParser>(p: &mut P) {
    leaf(p, SyntaxKind::IDENTIFIER);
}

/// Tag = '#' identifier
fn parse_tag<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::TAG);
    p.bump(); // #
    if p.at(SyntaxKind::IDENT) && !p.newline_before() {
        parse_identifier(p);
    } else {
        p.missing("expected tag name after '#'");
    }
    p.finish_node();
}

/// Hole = '(' ')'
/// Parenthesized = '(' Expression ')'
fn parse_parenthesized<P: ExpressionParser>(p: &mut P) {
    let cp = p.checkpoint();
    p.bump(); // (
    if p.at(SyntaxKind::R_PAREN) {
        p.start_node_at(cp, SyntaxKind::HOLE);
        p.bump(); // )
        p.finish_node();
        return;
    }

    p.start_node_at(cp, SyntaxKind::PARENTHESIZED);
    if !parse_expression(p) {
        p.missing("expected expression");
    }
    p.expect(SyntaxKind::R_PAREN, "expected ')'");
    p.finish_node();
}

/// Spread = '..' Binary?
fn parse_spread<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::SPREAD);
    p.bump(); // ..
    if at_expression_start(p) {
        parse_binary(p, 0);
    }
    p.finish_node();
}

/// Closers of enclosing constructs; a collection stops at these instead of
/// swallowing them.
const FOREIGN_CLOSERS: &[SyntaxKind] = &[
    SyntaxKind::R_PAREN,
    SyntaxKind::R_BRACKET,
    SyntaxKind::R_BRACE,
    SyntaxKind::SEMICOLON,
];

/// List = '[' (Element (',' Element)*)? ']'
///
/// Empty slots (`[1,,2]`, `[,1]`, `[1,]`) are accepted here and reported by
/// the list separator check.
fn parse_list<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::LIST);
    p.bump(); // [

    loop {
        match p.current_kind() {
            SyntaxKind::R_BRACKET => {
                p.bump();
                break;
            }
            SyntaxKind::COMMA => p.bump(),
            SyntaxKind::DOT_DOT => {
                parse_spread(p);
                expect_separator(p, SyntaxKind::R_BRACKET);
            }
            _ if p.at_eof() || p.at_any(FOREIGN_CLOSERS) => {
                p.missing("expected ']'");
                break;
            }
            _ if at_expression_start(p) => {
                parse_annotated(p);
                expect_separator(p, SyntaxKind::R_BRACKET);
            }
            _ => p.recover_one("unexpected token in list"),
        }
    }

    p.finish_node();
}

/// Record = '{' (Field (',' Field)*)? '}'
/// Field = identifier ('=' Annotated)? | Spread
fn parse_record<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::RECORD);
    p.bump(); // {

    loop {
        match p.current_kind() {
            SyntaxKind::R_BRACE => {
                p.bump();
                break;
            }
            SyntaxKind::COMMA => p.bump(),
            SyntaxKind::DOT_DOT => {
                parse_spread(p);
                expect_separator(p, SyntaxKind::R_BRACE);
            }
            SyntaxKind::IDENT => {
                parse_record_field(p);
                expect_separator(p, SyntaxKind::R_BRACE);
            }
            _ if p.at_eof() || p.at_any(FOREIGN_CLOSERS) => {
                p.missing("expected '}'");
                break;
            }
            _ => p.recover_one("expected record field"),
        }
    }

    p.finish_node();
}

/// A field without `= value` is accepted here and reported by the record
/// field check.
fn parse_record_field<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::RECORD_FIELD);
    parse_identifier(p);
    if p.at(SyntaxKind::EQ) {
        p.bump(); // =
        if !parse_annotated(p) {
            p.missing("expected field value after '='");
        }
    }
    p.finish_node();
}

/// After an element, the next token must close the collection or separate
/// elements; anything that starts another element means a missing comma.
fn expect_separator<P: ExpressionParser>(p: &mut P, closer: SyntaxKind) {
    if p.at(SyntaxKind::COMMA) || p.at(closer) {
        return;
    }
    if at_expression_start(p) || p.at(SyntaxKind::DOT_DOT) {
        p.missing("expected ','");
    }
}

/// PatternMatch = PatternCase+
/// PatternCase = '|' Binary Guard? '->' Function
/// Guard = '?' Binary
fn parse_pattern_match<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::PATTERN_MATCH);

    while p.at(SyntaxKind::PIPE) {
        p.start_node(SyntaxKind::PATTERN_CASE);
        p.bump(); // |

        if !parse_binary(p, 0) {
            p.missing("expected pattern after '|'");
        }

        if p.at(SyntaxKind::QUESTION) {
            p.start_node(SyntaxKind::GUARD);
            p.bump(); // ?
            if !parse_binary(p, 0) {
                p.missing("expected guard condition after '?'");
            }
            p.finish_node();
        }

        if p.expect(SyntaxKind::ARROW, "expected '->' after pattern") && !parse_function(p) {
            p.missing("expected expression after '->'");
        }

        p.finish_node();
    }

    p.finish_node();
}
