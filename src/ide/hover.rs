//! Hover information implementation.

use tracing::{debug, trace};

use crate::base::{Position, Range};
use crate::catalog::Catalog;
use crate::parser::{
    AstNode, Identifier, Infix, List, Number, NumberValue, Operator, PatternMatch, Record,
    SyntaxKind, SyntaxNode, Tag, Where, is_keyword,
};
use crate::syntax::{Tree, locate, parent_is, text};

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Range of the node the contents describe.
    pub range: Range,
}

/// Get hover information at a position.
///
/// Nodes without a renderer defer to their parent; reaching the root yields
/// `None`.
pub fn hover(tree: &Tree, catalog: &Catalog, position: Position) -> Option<HoverResult> {
    debug!(line = position.line, character = position.character, "hover");
    let node = locate(tree, position)?;

    for candidate in node.ancestors() {
        // The name inside a tag is described by the tag itself
        if candidate.kind() == SyntaxKind::IDENTIFIER && parent_is(&candidate, SyntaxKind::TAG) {
            continue;
        }
        if let Some(contents) = render(tree, catalog, &candidate) {
            trace!(kind = %candidate.kind(), "hover rendered");
            return Some(HoverResult {
                contents,
                range: tree.node_range(&candidate),
            });
        }
    }
    None
}

fn render(tree: &Tree, catalog: &Catalog, node: &SyntaxNode) -> Option<String> {
    let source = tree.text();
    match node.kind() {
        SyntaxKind::IDENTIFIER => render_identifier(catalog, &Identifier::cast(node.clone())?),
        SyntaxKind::OPERATOR => render_operator(catalog, &Operator::cast(node.clone())?),
        SyntaxKind::TAG => render_tag(catalog, &Tag::cast(node.clone())?),
        SyntaxKind::NUMBER => render_number(&Number::cast(node.clone())?),
        SyntaxKind::TEXT => {
            let raw = text(source, node)?.trim();
            let inner = raw.strip_prefix('"').unwrap_or(raw);
            let inner = inner.strip_suffix('"').unwrap_or(inner);
            Some(format!("**Text**\n\n{} characters", inner.chars().count()))
        }
        SyntaxKind::BYTES => Some(format!(
            "**Bytes** `{}`\n\nWritten `~~base64` or `~hh` for a single byte.",
            text(source, node)?.trim()
        )),
        SyntaxKind::FUNCTION => Some(
            "**Function**\n\nA single-parameter function: `pattern -> body`. \
             Curried: `a -> b -> a + b` takes `a` and returns a function of `b`."
                .to_string(),
        ),
        SyntaxKind::PATTERN_MATCH => {
            let cases = PatternMatch::cast(node.clone())?.cases().count();
            Some(format!(
                "**Pattern matching function**\n\n{cases} case{}; \
                 the first case whose pattern matches is taken.",
                plural(cases)
            ))
        }
        SyntaxKind::WHERE => {
            let binding = Where::cast(node.clone())?.binding();
            let name = binding
                .and_then(|b| b.first_child())
                .and_then(|pattern| text(source, &pattern).map(str::trim).map(str::to_string));
            Some(match name {
                Some(name) => {
                    format!("**Where clause**\n\nBinds `{name}` for the expression before `;`.")
                }
                None => "**Where clause**\n\nLocal bindings: `expr ; name = value`.".to_string(),
            })
        }
        SyntaxKind::RECORD => {
            let fields = Record::cast(node.clone())?.fields().count();
            Some(format!("**Record**\n\n{fields} field{}", plural(fields)))
        }
        SyntaxKind::LIST => {
            let elements = List::cast(node.clone())?.elements().count();
            Some(format!("**List**\n\n{elements} element{}", plural(elements)))
        }
        SyntaxKind::HOLE => Some("**Hole** `()`\n\nThe empty value.".to_string()),
        SyntaxKind::PIPELINE => Some(
            "**Pipeline**\n\n`x |> f` passes `x` as the argument of `f`.".to_string(),
        ),
        SyntaxKind::INFIX => {
            let symbol = Infix::cast(node.clone())?.operator()?.token()?;
            let name = catalog.operator(symbol.text()).map_or("Operator", |doc| doc.name);
            Some(format!("**{name}** expression (`{}`)", symbol.text()))
        }
        SyntaxKind::APPLY => Some(render_apply(tree, catalog, node)),
        _ => None,
    }
}

fn render_identifier(catalog: &Catalog, ident: &Identifier) -> Option<String> {
    let name = ident.name()?;
    if let Some(function) = catalog.function(&name) {
        return Some(format!(
            "**{}** : `{}`\n\n{}",
            function.name, function.signature, function.doc
        ));
    }
    if let Some(ty) = catalog.type_name(&name) {
        return Some(format!("**{}** (Type)\n\n{}", ty.name, ty.doc));
    }
    if is_keyword(&name) {
        return Some(format!("`{name}` (Keyword)"));
    }
    Some(format!("`{name}` (Identifier)"))
}

fn render_operator(catalog: &Catalog, op: &Operator) -> Option<String> {
    let token = op.token()?;
    let symbol = token.text();
    Some(match catalog.operator(symbol) {
        Some(doc) => format!("**{}** (`{}`)\n\n{}", doc.name, doc.symbol, doc.doc),
        None => format!("`{symbol}` (Operator)"),
    })
}

fn render_tag(catalog: &Catalog, tag: &Tag) -> Option<String> {
    let Some(name) = tag.name().and_then(|ident| ident.name()) else {
        return Some("`#` (Tag)".to_string());
    };
    Some(match catalog.tag(&name) {
        Some(entry) => format!("**#{}** (Tag)\n\n{}", entry.name, entry.doc),
        None => format!("`#{name}` (Tag)"),
    })
}

fn render_number(number: &Number) -> Option<String> {
    let literal = number.literal();
    match number.value() {
        Some(NumberValue::Int(n)) => {
            let mut contents = format!("**Integer** `{literal}`");
            if (0..=1_000_000).contains(&n) {
                contents.push_str(&format!("\n\nBinary: `{n:#b}`\n\nHex: `{n:#x}`"));
            }
            if (0..=255).contains(&n) {
                contents.push_str(&format!("\n\nByte: `~{n:02x}`"));
            }
            Some(contents)
        }
        Some(NumberValue::Float(value)) => Some(format!("**Float** `{literal}`\n\nValue: {value}")),
        None => Some(format!("**Number** `{literal}`")),
    }
}

fn render_apply(tree: &Tree, catalog: &Catalog, node: &SyntaxNode) -> String {
    // The head of a curried application is its leftmost descendant callee
    let mut head = node.first_child();
    while let Some(inner) = head.clone().filter(|n| n.kind() == SyntaxKind::APPLY) {
        head = inner.first_child();
    }
    let function = head
        .filter(|n| n.kind() == SyntaxKind::IDENTIFIER)
        .and_then(|n| text(tree.text(), &n).map(str::trim).and_then(|name| catalog.function(name)));
    match function {
        Some(function) => format!(
            "**Application** of `{}` : `{}`\n\n{}",
            function.name, function.signature, function.doc
        ),
        None => "**Function application**".to_string(),
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
