//! IDE features: high-level APIs for editor requests.
//!
//! Each function takes a parsed [`Tree`](crate::syntax::Tree), the
//! [`Catalog`](crate::catalog::Catalog) where it needs one and a cursor
//! position, and returns plain data. Converting to protocol types happens at
//! the transport boundary.
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use scrap::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.initialize(Settings::default());
//!
//! let analysis = host.analysis("file:///main.scrap")?;
//! let symbols = analysis.document_symbols("a = 1\nb = 2");
//! ```

mod analysis;
mod completion;
mod hover;
mod references;
mod semantic_tokens;
mod symbols;

pub use analysis::{Analysis, AnalysisError, AnalysisHost};
pub use completion::{
    CompletionContext, CompletionItem, CompletionKind, ElementHint, complete, complete_in,
    completion_context,
};
pub use hover::{HoverResult, hover};
pub use references::{
    Location, PrepareRename, TextEdit, WorkspaceEdit, find_references, prepare_rename, rename,
};
pub use semantic_tokens::{
    SemanticToken, TOKEN_MODIFIERS, TOKEN_TYPES, TokenType, semantic_tokens,
};
pub use symbols::{DocumentSymbol, SymbolKind, symbols};
