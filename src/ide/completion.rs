//! Completion suggestions implementation.
//!
//! The cursor is classified into a [`CompletionContext`] by a fixed list of
//! rules; the first rule that matches decides which catalog is offered.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::base::Position;
use crate::catalog::{
    Catalog, FunctionDoc, PATTERN_SNIPPETS, RECORD_FIELDS, Snippet, WHERE_SNIPPET,
};
use crate::parser::{SyntaxKind, SyntaxNode};
use crate::syntax::{Tree, ancestor_of_kind, locate, parent_is, previous_sibling_token, text};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Function,
    Operator,
    Keyword,
    EnumMember,
    Field,
    TypeParameter,
    Value,
    Snippet,
    Module,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Function => 3,
            CompletionKind::Field => 5,
            CompletionKind::Module => 9,
            CompletionKind::Value => 12,
            CompletionKind::Keyword => 14,
            CompletionKind::Snippet => 15,
            CompletionKind::EnumMember => 20,
            CompletionKind::Operator => 24,
            CompletionKind::TypeParameter => 25,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text shown in the list.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
    /// Text to insert (if different from label), in snippet syntax when
    /// `is_snippet` is set.
    pub insert_text: Option<Arc<str>>,
    pub is_snippet: bool,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            insert_text: None,
            is_snippet: false,
            sort_priority: 100,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Set the insert text.
    pub fn with_insert_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(text.into());
        self
    }

    /// Set the sort priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }

    /// Sort key for clients that order by text
    pub fn sort_text(&self) -> String {
        format!("{:04}", self.sort_priority)
    }

    fn from_function(function: &FunctionDoc) -> Self {
        Self::new(function.name, CompletionKind::Function)
            .with_detail(function.signature)
            .with_documentation(function.doc)
            .with_priority(PRIORITY_FUNCTION)
    }

    fn from_snippet(snippet: &Snippet, priority: u32) -> Self {
        let mut item = Self::new(snippet.label, CompletionKind::Snippet)
            .with_documentation(snippet.doc)
            .with_insert_text(snippet.insert_text)
            .with_priority(priority);
        item.is_snippet = true;
        item
    }
}

const PRIORITY_SNIPPET: u32 = 0;
const PRIORITY_BOOSTED: u32 = 10;
const PRIORITY_VALUE: u32 = 40;
const PRIORITY_FUNCTION: u32 = 50;
const PRIORITY_OPERATOR: u32 = 60;
const PRIORITY_TYPE: u32 = 70;

/// Element type suggested by the text of a pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementHint {
    List,
    Maybe,
    Result,
    Unknown,
}

impl ElementHint {
    fn from_text(text: &str) -> Self {
        if text.contains('[') || text.contains("list/") {
            ElementHint::List
        } else if text.contains("maybe/") || text.contains("#some") || text.contains("#none") {
            ElementHint::Maybe
        } else if text.contains("result/") || text.contains("#ok") || text.contains("#error") {
            ElementHint::Result
        } else {
            ElementHint::Unknown
        }
    }

    /// Module whose functions fit the hint
    pub fn module(self) -> Option<&'static str> {
        match self {
            ElementHint::List => Some("list"),
            ElementHint::Maybe => Some("maybe"),
            ElementHint::Result => Some("result"),
            ElementHint::Unknown => None,
        }
    }
}

/// What is being typed at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionContext {
    Tag,
    WhereClause,
    PatternMatch,
    RecordField,
    FunctionCall,
    Operator,
    TypeAnnotation,
    Pipeline(ElementHint),
    Import,
    Global,
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%' | '^' | '=' | '!' | '<' | '>' | '&' | '|')
}

/// Classify the cursor position. The first matching rule wins.
pub fn completion_context(tree: &Tree, position: Position) -> CompletionContext {
    let Some(node) = locate(tree, position) else {
        return CompletionContext::Global;
    };
    let prefix = tree.line_prefix(position);
    let trimmed = prefix.trim_start();

    let context = if prefix.contains('#')
        || node.kind() == SyntaxKind::TAG
        || parent_is(&node, SyntaxKind::TAG)
    {
        CompletionContext::Tag
    } else if trimmed.starts_with(';') || ancestor_of_kind(&node, SyntaxKind::WHERE).is_some() {
        CompletionContext::WhereClause
    } else if starts_pattern_case(trimmed)
        || ancestor_of_kind(&node, SyntaxKind::PATTERN_MATCH).is_some()
    {
        CompletionContext::PatternMatch
    } else if prefix.contains('.') || parent_is(&node, SyntaxKind::RECORD_ACCESS) {
        CompletionContext::RecordField
    } else if prefix.contains(" : ")
        || parent_is(&node, SyntaxKind::TYPE_ANNOTATION)
        || follows_dot_in_declaration(&node)
    {
        CompletionContext::TypeAnnotation
    } else if let Some(hint) = pipeline_hint(tree, &node, prefix) {
        CompletionContext::Pipeline(hint)
    } else if has_word(prefix, "import") || has_word(prefix, "use") {
        CompletionContext::Import
    } else if parent_is(&node, SyntaxKind::APPLY) {
        CompletionContext::FunctionCall
    } else if node.kind() == SyntaxKind::OPERATOR || prefix.ends_with(is_operator_char) {
        CompletionContext::Operator
    } else {
        CompletionContext::Global
    };

    trace!(?context, node = %node.kind(), "completion context");
    context
}

/// `word` appears as a whole identifier, so `user` does not count as `use`
fn has_word(prefix: &str, word: &str) -> bool {
    prefix
        .split(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '/')))
        .any(|w| w == word)
}

/// `|` opening a case, as opposed to `|>` or `||`
fn starts_pattern_case(trimmed: &str) -> bool {
    trimmed.starts_with('|') && !trimmed.starts_with("|>") && !trimmed.starts_with("||")
}

fn follows_dot_in_declaration(node: &SyntaxNode) -> bool {
    previous_sibling_token(node).is_some_and(|t| t.kind() == SyntaxKind::DOT)
        && ancestor_of_kind(node, SyntaxKind::DECLARATION).is_some()
}

fn pipeline_hint(tree: &Tree, node: &SyntaxNode, prefix: &str) -> Option<ElementHint> {
    if let Some(pipeline) = ancestor_of_kind(node, SyntaxKind::PIPELINE) {
        let raw = text(tree.text(), &pipeline).unwrap_or_default();
        return Some(ElementHint::from_text(raw));
    }
    prefix.contains("|>").then(|| ElementHint::from_text(prefix))
}

/// Get completion suggestions at a position.
///
/// Never fails: anything unrecognised gets the global catalog.
pub fn complete(tree: &Tree, catalog: &Catalog, position: Position) -> Vec<CompletionItem> {
    debug!(line = position.line, character = position.character, "completion");
    complete_in(completion_context(tree, position), catalog)
}

/// Completion items offered in a context, best first.
pub fn complete_in(context: CompletionContext, catalog: &Catalog) -> Vec<CompletionItem> {
    let mut items = items_for(context, catalog);

    // Sort by priority; table order is kept within a priority
    items.sort_by_key(|item| item.sort_priority);

    // Deduplicate by label
    items.dedup_by(|a, b| a.label == b.label);

    items
}

fn items_for(context: CompletionContext, catalog: &Catalog) -> Vec<CompletionItem> {
    match context {
        CompletionContext::Tag => catalog
            .tags()
            .iter()
            .map(|tag| {
                CompletionItem::new(tag.name, CompletionKind::EnumMember)
                    .with_detail("Tag")
                    .with_documentation(tag.doc)
            })
            .collect(),
        CompletionContext::WhereClause => {
            let mut items = vec![CompletionItem::from_snippet(&WHERE_SNIPPET, PRIORITY_SNIPPET)];
            items.extend(global_items(catalog));
            items
        }
        CompletionContext::PatternMatch => PATTERN_SNIPPETS
            .iter()
            .enumerate()
            .map(|(i, snippet)| CompletionItem::from_snippet(snippet, PRIORITY_SNIPPET + i as u32))
            .collect(),
        CompletionContext::RecordField => RECORD_FIELDS
            .iter()
            .map(|field| {
                CompletionItem::new(field.name, CompletionKind::Field)
                    .with_detail("Field")
                    .with_documentation(field.doc)
            })
            .collect(),
        CompletionContext::FunctionCall => function_items(catalog, None),
        CompletionContext::Pipeline(hint) => function_items(catalog, hint.module()),
        CompletionContext::Operator => operator_items(catalog),
        CompletionContext::TypeAnnotation => type_items(catalog),
        CompletionContext::Import => catalog
            .modules()
            .iter()
            .map(|module| {
                CompletionItem::new(module.name, CompletionKind::Module)
                    .with_detail("Module")
                    .with_documentation(module.doc)
            })
            .collect(),
        CompletionContext::Global => global_items(catalog),
    }
}

/// Built-in functions, with those of `boost` first
fn function_items(catalog: &Catalog, boost: Option<&str>) -> Vec<CompletionItem> {
    catalog
        .functions()
        .iter()
        .map(|function| {
            let item = CompletionItem::from_function(function);
            if boost.is_some() && function.module() == boost {
                item.with_priority(PRIORITY_BOOSTED)
            } else {
                item
            }
        })
        .collect()
}

fn operator_items(catalog: &Catalog) -> Vec<CompletionItem> {
    catalog
        .operators()
        .iter()
        .map(|op| {
            CompletionItem::new(op.symbol, CompletionKind::Operator)
                .with_detail(op.name)
                .with_documentation(op.doc)
                .with_priority(PRIORITY_OPERATOR)
        })
        .collect()
}

fn type_items(catalog: &Catalog) -> Vec<CompletionItem> {
    catalog
        .types()
        .iter()
        .map(|ty| {
            CompletionItem::new(ty.name, CompletionKind::TypeParameter)
                .with_detail("Type")
                .with_documentation(ty.doc)
                .with_priority(PRIORITY_TYPE)
        })
        .collect()
}

fn global_items(catalog: &Catalog) -> Vec<CompletionItem> {
    let mut items = function_items(catalog, None);
    items.extend(operator_items(catalog));
    items.extend(type_items(catalog));
    for (label, doc) in [
        ("#true", "Boolean true."),
        ("#false", "Boolean false."),
        ("()", "The hole: the empty value."),
    ] {
        items.push(
            CompletionItem::new(label, CompletionKind::Value)
                .with_detail("Value")
                .with_documentation(doc)
                .with_priority(PRIORITY_VALUE),
        );
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_at(source: &str, line: u32, character: u32) -> CompletionContext {
        let tree = Tree::parse(source).unwrap();
        completion_context(&tree, Position::new(line, character))
    }

    fn labels(source: &str, line: u32, character: u32) -> Vec<String> {
        let tree = Tree::parse(source).unwrap();
        complete(&tree, &Catalog::load(), Position::new(line, character))
            .into_iter()
            .map(|i| i.label.to_string())
            .collect()
    }

    #[test]
    fn test_tag_context_after_hash() {
        assert_eq!(context_at("x = #", 0, 5), CompletionContext::Tag);
        let labels = labels("x = #", 0, 5);
        for tag in ["true", "false", "ok", "error"] {
            assert!(labels.iter().any(|l| l == tag), "missing {tag}");
        }
    }

    #[test]
    fn test_where_context() {
        assert_eq!(context_at("x\n; y", 1, 3), CompletionContext::WhereClause);
        let labels = labels("x\n; y", 1, 3);
        assert_eq!(labels[0], "; identifier = expression");
        assert!(labels.iter().any(|l| l == "list/map"));
    }

    #[test]
    fn test_pattern_context_lists_snippets_in_order() {
        let source = "f =\n  | 0 -> 1\n  | ";
        assert_eq!(context_at(source, 2, 4), CompletionContext::PatternMatch);
        let labels = labels(source, 2, 4);
        assert_eq!(labels.len(), 10);
        assert_eq!(labels[0], "| pattern -> expression");
        assert_eq!(labels[9], "| \"text\" -> expression");
    }

    #[test]
    fn test_record_field_context() {
        assert_eq!(context_at("p = point.", 0, 10), CompletionContext::RecordField);
    }

    #[test]
    fn test_type_annotation_context() {
        assert_eq!(context_at("x : i", 0, 5), CompletionContext::TypeAnnotation);
    }

    #[test]
    fn test_pipeline_context_with_hint() {
        assert_eq!(
            context_at("[1, 2] |> list/map f", 0, 12),
            CompletionContext::Pipeline(ElementHint::List)
        );
        assert_eq!(
            context_at("x |> f", 0, 5),
            CompletionContext::Pipeline(ElementHint::Unknown)
        );
        let tree = Tree::parse("xs |> maybe/map f").unwrap();
        let items = complete(&tree, &Catalog::load(), Position::new(0, 17));
        assert_eq!(items[0].label.as_ref(), "maybe/map");
    }

    #[test]
    fn test_import_context() {
        assert_eq!(context_at("import li", 0, 9), CompletionContext::Import);
        assert_eq!(context_at("x = use", 0, 7), CompletionContext::Import);
    }

    #[test]
    fn test_import_needs_whole_word() {
        assert_eq!(context_at("x = user", 0, 8), CompletionContext::Global);
        assert_eq!(context_at("x = reuse", 0, 9), CompletionContext::Global);
    }

    #[test]
    fn test_function_call_context() {
        assert_eq!(context_at("f x", 0, 3), CompletionContext::FunctionCall);
    }

    #[test]
    fn test_operator_context() {
        assert_eq!(context_at("x = 1 +", 0, 7), CompletionContext::Operator);
    }

    #[test]
    fn test_global_context() {
        assert_eq!(context_at("x", 0, 1), CompletionContext::Global);
        let labels = labels("x", 0, 1);
        assert!(labels.iter().any(|l| l == "#true"));
        assert!(labels.iter().any(|l| l == "()"));
        assert!(labels.iter().any(|l| l == "int"));
        assert!(labels.iter().any(|l| l == "++"));
    }

    #[test]
    fn test_outside_document_is_global() {
        assert_eq!(context_at("x", 5, 0), CompletionContext::Global);
    }

    #[test]
    fn test_sort_text_is_zero_padded() {
        let item = CompletionItem::new("x", CompletionKind::Value).with_priority(7);
        assert_eq!(item.sort_text(), "0007");
    }
}
