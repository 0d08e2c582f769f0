//! Static catalogs: built-in functions, operators, tags, types and modules.
//!
//! The tables are the single source for completion, hover, rename checks and
//! highlighting. [`Catalog::load`] indexes them by name.

mod functions;
mod names;
mod operators;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::parser::SyntaxKind;

pub use functions::FUNCTIONS;
pub use names::{MODULES, PATTERN_SNIPPETS, RECORD_FIELDS, TAGS, TYPES, WHERE_SNIPPET};
pub use operators::OPERATORS;

/// A built-in function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionDoc {
    pub name: &'static str,
    pub signature: &'static str,
    pub doc: &'static str,
}

impl FunctionDoc {
    /// Module prefix (`list` for `list/map`); none for bare conversions
    pub fn module(&self) -> Option<&'static str> {
        self.name.split_once('/').map(|(module, _)| module)
    }
}

/// An operator or punctuation token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorDoc {
    pub kind: SyntaxKind,
    pub symbol: &'static str,
    pub name: &'static str,
    pub doc: &'static str,
}

/// A named entry with a one-line description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: &'static str,
    pub doc: &'static str,
}

/// A completion template in snippet syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snippet {
    pub label: &'static str,
    pub insert_text: &'static str,
    pub doc: &'static str,
}

/// Indexed view of the static tables.
#[derive(Clone, Debug)]
pub struct Catalog {
    functions: FxHashMap<&'static str, &'static FunctionDoc>,
    operators: FxHashMap<&'static str, &'static OperatorDoc>,
    tags: FxHashMap<&'static str, &'static Entry>,
    types: FxHashMap<&'static str, &'static Entry>,
    modules: FxHashMap<&'static str, &'static Entry>,
}

fn index<T>(
    table: &'static [T],
    key: impl Fn(&T) -> &'static str,
) -> FxHashMap<&'static str, &'static T> {
    table.iter().map(|item| (key(item), item)).collect()
}

impl Catalog {
    pub fn load() -> Self {
        let catalog = Self {
            functions: index(FUNCTIONS, |f| f.name),
            operators: index(OPERATORS, |o| o.symbol),
            tags: index(TAGS, |e| e.name),
            types: index(TYPES, |e| e.name),
            modules: index(MODULES, |e| e.name),
        };
        debug!(
            functions = catalog.functions.len(),
            operators = catalog.operators.len(),
            tags = catalog.tags.len(),
            "catalog loaded"
        );
        catalog
    }

    pub fn function(&self, name: &str) -> Option<&'static FunctionDoc> {
        self.functions.get(name).copied()
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn operator(&self, symbol: &str) -> Option<&'static OperatorDoc> {
        self.operators.get(symbol).copied()
    }

    /// Tag by name, without the leading `#`
    pub fn tag(&self, name: &str) -> Option<&'static Entry> {
        self.tags.get(name).copied()
    }

    pub fn type_name(&self, name: &str) -> Option<&'static Entry> {
        self.types.get(name).copied()
    }

    pub fn module(&self, name: &str) -> Option<&'static Entry> {
        self.modules.get(name).copied()
    }

    /// Functions in table order
    pub fn functions(&self) -> &'static [FunctionDoc] {
        FUNCTIONS
    }

    pub fn operators(&self) -> &'static [OperatorDoc] {
        OPERATORS
    }

    pub fn tags(&self) -> &'static [Entry] {
        TAGS
    }

    pub fn types(&self) -> &'static [Entry] {
        TYPES
    }

    pub fn modules(&self) -> &'static [Entry] {
        MODULES
    }
}
