//! Operator and punctuation documentation.

use super::OperatorDoc;
use crate::parser::SyntaxKind;

const fn op(kind: SyntaxKind, symbol: &'static str, name: &'static str, doc: &'static str) -> OperatorDoc {
    OperatorDoc {
        kind,
        symbol,
        name,
        doc,
    }
}

/// Every operator token, binary operators first in precedence order.
pub static OPERATORS: &[OperatorDoc] = &[
    op(SyntaxKind::PIPE_GT, "|>", "Pipe", "Pass the left value as the last argument of the function on the right: `x |> f` is `f x`."),
    op(SyntaxKind::GT_GT, ">>", "Compose", "Left-to-right function composition: `(f >> g) x` is `g (f x)`."),
    op(SyntaxKind::LT_LT, "<<", "Compose backwards", "Right-to-left function composition: `(f << g) x` is `f (g x)`."),
    op(SyntaxKind::PIPE_PIPE, "||", "Logical or", "`#true` if either operand is `#true`."),
    op(SyntaxKind::AMP_AMP, "&&", "Logical and", "`#true` if both operands are `#true`."),
    op(SyntaxKind::EQ_EQ, "==", "Equal", "Structural equality."),
    op(SyntaxKind::BANG_EQ, "!=", "Not equal", "Structural inequality."),
    op(SyntaxKind::LT, "<", "Less than", "Compare two numbers."),
    op(SyntaxKind::GT, ">", "Greater than", "Compare two numbers."),
    op(SyntaxKind::LT_EQ, "<=", "Less than or equal", "Compare two numbers."),
    op(SyntaxKind::GT_EQ, ">=", "Greater than or equal", "Compare two numbers."),
    op(SyntaxKind::PLUS_PLUS, "++", "Concatenate", "Concatenate two texts, lists or byte strings."),
    op(SyntaxKind::GT_PLUS, ">+", "Cons", "Prepend an element to a list: `1 >+ [2, 3]`."),
    op(SyntaxKind::PLUS_LT, "+<", "Snoc", "Append an element to a list: `[1, 2] +< 3`."),
    op(SyntaxKind::PLUS, "+", "Addition", "Add two numbers."),
    op(SyntaxKind::MINUS, "-", "Subtraction", "Subtract the right number from the left."),
    op(SyntaxKind::STAR, "*", "Multiplication", "Multiply two numbers."),
    op(SyntaxKind::SLASH, "/", "Division", "Divide the left number by the right."),
    op(SyntaxKind::PERCENT, "%", "Remainder", "Remainder of integer division."),
    op(SyntaxKind::CARET, "^", "Exponentiation", "Raise the left number to the power of the right; right associative."),
    op(SyntaxKind::ARROW, "->", "Function", "Build a function from a pattern and a body: `x -> x + 1`."),
    op(SyntaxKind::EQ, "=", "Binding", "Bind a name to a value: `x = 1`."),
    op(SyntaxKind::COLON, ":", "Type annotation", "Annotate an expression with a type: `x : int`."),
    op(SyntaxKind::DOT, ".", "Field access", "Read a record field: `point.x`."),
    op(SyntaxKind::SEMICOLON, ";", "Where", "Introduce local bindings: `x + y ; x = 1 ; y = 2`."),
    op(SyntaxKind::PIPE, "|", "Pattern case", "Start a case of a pattern-matching function: `| 0 -> 1`."),
    op(SyntaxKind::QUESTION, "?", "Guard", "Add a condition to a pattern case: `| n ? n > 0 -> n`."),
    op(SyntaxKind::DOT_DOT, "..", "Spread", "Splice the rest of a list or record: `[x, ..xs]`."),
    op(SyntaxKind::HASH, "#", "Tag", "Build a tagged value: `#some 1`."),
];
