//! Document outline.

use std::sync::Arc;

use tracing::debug;

use crate::base::Range;
use crate::parser::{AstNode, Declaration, SyntaxKind, SyntaxNode, Tag};
use crate::syntax::{Tree, text, walk};

/// Kind of an outline entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Object,
    Array,
    Number,
    String,
    Enum,
    Variable,
    Class,
    Null,
}

impl SymbolKind {
    /// Convert to LSP symbol kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            SymbolKind::Class => 5,
            SymbolKind::Enum => 10,
            SymbolKind::Function => 12,
            SymbolKind::Variable => 13,
            SymbolKind::String => 15,
            SymbolKind::Number => 16,
            SymbolKind::Array => 18,
            SymbolKind::Object => 19,
            SymbolKind::Null => 21,
        }
    }
}

/// An entry of the document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSymbol {
    /// Name derived from the declaration's pattern.
    pub name: Arc<str>,
    pub kind: SymbolKind,
    /// The whole declaration.
    pub range: Range,
    /// Only the pattern.
    pub selection_range: Range,
    /// Short label for the bound expression; empty when unknown.
    pub detail: Arc<str>,
    /// Always empty: nested declarations are listed at the top level.
    pub children: Vec<DocumentSymbol>,
}

/// One entry per declaration, top-level and where-nested, in document order.
pub fn symbols(tree: &Tree) -> Vec<DocumentSymbol> {
    let mut symbols = Vec::new();
    walk(&tree.root(), |node| {
        if let Some(declaration) = Declaration::cast(node.clone()) {
            symbols.extend(symbol(tree, &declaration));
        }
    });
    debug!(count = symbols.len(), "document symbols");
    symbols
}

fn symbol(tree: &Tree, declaration: &Declaration) -> Option<DocumentSymbol> {
    let pattern = declaration.pattern()?;
    let (kind, detail) = match declaration.value() {
        Some(value) => classify(&value),
        None => (SymbolKind::Variable, ""),
    };
    Some(DocumentSymbol {
        name: pattern_name(tree.text(), &pattern).into(),
        kind,
        range: tree.node_range(declaration.syntax()),
        selection_range: tree.node_range(&pattern),
        detail: detail.into(),
        children: Vec::new(),
    })
}

fn pattern_name(source: &str, pattern: &SyntaxNode) -> String {
    match pattern.kind() {
        SyntaxKind::IDENTIFIER => text(source, pattern)
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        SyntaxKind::TAG => {
            let name = Tag::cast(pattern.clone())
                .and_then(|tag| tag.name())
                .and_then(|ident| ident.name())
                .unwrap_or_default();
            format!("#{name}")
        }
        SyntaxKind::RECORD => "{...}".to_string(),
        SyntaxKind::LIST => "[...]".to_string(),
        SyntaxKind::PARENTHESIZED => match pattern.first_child() {
            Some(inner) => format!("({})", pattern_name(source, &inner)),
            None => "()".to_string(),
        },
        SyntaxKind::TYPE_ANNOTATION => match pattern.first_child() {
            Some(subject) => pattern_name(source, &subject),
            None => pattern.kind().to_string(),
        },
        kind => kind.to_string(),
    }
}

fn classify(value: &SyntaxNode) -> (SymbolKind, &'static str) {
    match value.kind() {
        SyntaxKind::FUNCTION => (SymbolKind::Function, "Function"),
        SyntaxKind::PATTERN_MATCH => (SymbolKind::Function, "Pattern matching function"),
        SyntaxKind::RECORD => (SymbolKind::Object, "Record"),
        SyntaxKind::LIST => (SymbolKind::Array, "List"),
        SyntaxKind::NUMBER => (SymbolKind::Number, "Number"),
        SyntaxKind::TEXT => (SymbolKind::String, "Text"),
        SyntaxKind::BYTES => (SymbolKind::String, "Bytes"),
        SyntaxKind::TAG => (SymbolKind::Enum, "Tag"),
        SyntaxKind::HOLE => (SymbolKind::Null, "Hole"),
        _ if is_type_declaration(value) => (SymbolKind::Class, "Type"),
        _ => (SymbolKind::Variable, ""),
    }
}

/// `list int`: a head applied to a type name
fn is_type_declaration(value: &SyntaxNode) -> bool {
    let mut children = value.children();
    children.next().is_some()
        && children
            .next()
            .is_some_and(|second| second.kind() == SyntaxKind::IDENTIFIER)
}
