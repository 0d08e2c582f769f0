//! Find references and rename.
//!
//! References are textual: every identifier with the same text matches,
//! whatever binding it belongs to. Tag names are not identifiers for this
//! purpose; `#ok` never matches a variable named `ok`.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::base::{Position, Range};
use crate::catalog::Catalog;
use crate::parser::{SyntaxKind, SyntaxNode, is_keyword};
use crate::syntax::{Tree, locate, parent_is, text};

/// A range in a specific document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub uri: Arc<str>,
    pub range: Range,
}

/// Replace the text of `range` with `new_text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

/// Edits grouped by document, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkspaceEdit {
    pub changes: IndexMap<Arc<str>, Vec<TextEdit>>,
}

impl WorkspaceEdit {
    /// Total number of edits across documents
    pub fn len(&self) -> usize {
        self.changes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.values().all(Vec::is_empty)
    }
}

/// Answer to a prepare-rename request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrepareRename {
    /// Range of the identifier under the cursor.
    pub range: Range,
    /// Its current text.
    pub placeholder: String,
}

/// Identifier node under the cursor, unless it names a tag
fn target_identifier(tree: &Tree, position: Position) -> Option<SyntaxNode> {
    let node = locate(tree, position)?;
    (node.kind() == SyntaxKind::IDENTIFIER && !parent_is(&node, SyntaxKind::TAG)).then_some(node)
}

/// Find every identifier spelled like the one at `position`, in document order.
pub fn find_references(tree: &Tree, uri: &str, position: Position) -> Vec<Location> {
    let Some(target) = target_identifier(tree, position) else {
        return Vec::new();
    };
    let Some(name) = text(tree.text(), &target) else {
        return Vec::new();
    };
    let uri: Arc<str> = Arc::from(uri);

    let locations: Vec<_> = tree
        .root()
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::IDENTIFIER && !parent_is(n, SyntaxKind::TAG))
        .filter(|n| text(tree.text(), n) == Some(name))
        .map(|n| Location {
            uri: uri.clone(),
            range: tree.node_range(&n),
        })
        .collect();

    debug!(name, count = locations.len(), "find references");
    locations
}

/// Check that the identifier at `position` can be renamed.
///
/// Keywords and built-in function names cannot.
pub fn prepare_rename(tree: &Tree, catalog: &Catalog, position: Position) -> Option<PrepareRename> {
    let target = target_identifier(tree, position)?;
    let name = text(tree.text(), &target)?;
    if is_keyword(name) || catalog.is_builtin(name) {
        debug!(name, "identifier cannot be renamed");
        return None;
    }
    Some(PrepareRename {
        range: tree.node_range(&target),
        placeholder: name.to_string(),
    })
}

/// Rename every reference of the identifier at `position` to `new_name`.
///
/// `new_name` is inserted as given.
pub fn rename(tree: &Tree, uri: &str, position: Position, new_name: &str) -> Option<WorkspaceEdit> {
    let references = find_references(tree, uri, position);
    if references.is_empty() {
        return None;
    }

    let mut edit = WorkspaceEdit::default();
    for location in references {
        edit.changes.entry(location.uri).or_default().push(TextEdit {
            range: location.range,
            new_text: new_name.to_string(),
        });
    }
    Some(edit)
}
