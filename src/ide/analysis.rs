//! AnalysisHost and Analysis: state management for the IDE layer.
//!
//! The `AnalysisHost` owns the catalog and the settings cache; it must be
//! initialized before it hands out `Analysis` snapshots. A snapshot is bound
//! to one document and reparses the text it is given on every request.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::new();
//! host.initialize(Settings::default());
//!
//! let analysis = host.analysis("file:///main.scrap")?;
//! let diagnostics = analysis.diagnostics(text);
//! let hover = analysis.hover(text, Position::new(0, 4));
//! ```

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::base::Position;
use crate::catalog::Catalog;
use crate::config::{Settings, SettingsCache};
use crate::diagnostics::{Diagnostic, diagnose_with};
use crate::syntax::{ParseFailure, Tree};

use super::{
    CompletionContext, CompletionItem, DocumentSymbol, HoverResult, Location, PrepareRename,
    SemanticToken, WorkspaceEdit,
};

/// A request could not be answered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A request arrived before [`AnalysisHost::initialize`].
    #[error("analysis host is not initialized")]
    NotInitialized,

    #[error(transparent)]
    Parse(#[from] ParseFailure),
}

/// Owns all cross-request state for the IDE layer.
#[derive(Debug, Default)]
pub struct AnalysisHost {
    catalog: Option<Catalog>,
    settings: SettingsCache,
}

impl AnalysisHost {
    /// Create an uninitialized host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog and install the global settings.
    pub fn initialize(&mut self, settings: Settings) {
        self.catalog = Some(Catalog::load());
        self.settings = SettingsCache::new(settings);
        info!("analysis host initialized");
    }

    pub fn is_initialized(&self) -> bool {
        self.catalog.is_some()
    }

    /// Get a snapshot for querying one document.
    pub fn analysis(&mut self, uri: &str) -> Result<Analysis<'_>, AnalysisError> {
        let Some(catalog) = self.catalog.as_ref() else {
            return Err(AnalysisError::NotInitialized);
        };
        let settings = self.settings.document_settings(uri).clone();
        Ok(Analysis {
            catalog,
            settings,
            uri: Arc::from(uri),
        })
    }

    /// Settings in effect for a document
    pub fn document_settings(&mut self, uri: &str) -> &Settings {
        self.settings.document_settings(uri)
    }

    /// Settings the client scoped to a single document.
    pub fn set_document_settings(&mut self, uri: &str, settings: Settings) {
        self.settings.set_document_settings(uri, settings);
    }

    pub fn did_close(&mut self, uri: &str) {
        self.settings.did_close(uri);
    }

    pub fn did_change_configuration(&mut self, settings: Settings) {
        self.settings.did_change_configuration(settings);
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }
}

/// A snapshot of the host for one document.
///
/// Every method parses `text` afresh; nothing is kept between requests.
pub struct Analysis<'a> {
    catalog: &'a Catalog,
    settings: Settings,
    uri: Arc<str>,
}

impl<'a> Analysis<'a> {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Parse the document text.
    pub fn parse(&self, text: &str) -> Result<Tree, AnalysisError> {
        debug!(uri = %self.uri, len = text.len(), "parsing document");
        Ok(Tree::parse(text)?)
    }

    /// Parse for a request that degrades to "no information" when the
    /// document cannot be parsed.
    fn tree(&self, text: &str) -> Option<Tree> {
        match self.parse(text) {
            Ok(tree) => Some(tree),
            Err(error) => {
                warn!(uri = %self.uri, %error, "request answered without a tree");
                None
            }
        }
    }

    /// Diagnostics for the document, honouring the feature toggles.
    ///
    /// A document that cannot be parsed yields a single diagnostic.
    pub fn diagnostics(&self, text: &str) -> Vec<Diagnostic> {
        diagnose_with(text, &self.settings)
    }

    /// Completions at a position; the global catalog when the document
    /// cannot be parsed.
    pub fn completions(&self, text: &str, position: Position) -> Vec<CompletionItem> {
        match self.tree(text) {
            Some(tree) => super::complete(&tree, self.catalog, position),
            None => super::complete_in(CompletionContext::Global, self.catalog),
        }
    }

    pub fn hover(&self, text: &str, position: Position) -> Option<HoverResult> {
        let tree = self.tree(text)?;
        super::hover(&tree, self.catalog, position)
    }

    pub fn document_symbols(&self, text: &str) -> Vec<DocumentSymbol> {
        self.tree(text)
            .map(|tree| super::symbols(&tree))
            .unwrap_or_default()
    }

    pub fn find_references(&self, text: &str, position: Position) -> Vec<Location> {
        self.tree(text)
            .map(|tree| super::find_references(&tree, &self.uri, position))
            .unwrap_or_default()
    }

    pub fn prepare_rename(&self, text: &str, position: Position) -> Option<PrepareRename> {
        let tree = self.tree(text)?;
        super::prepare_rename(&tree, self.catalog, position)
    }

    pub fn rename(&self, text: &str, position: Position, new_name: &str) -> Option<WorkspaceEdit> {
        let tree = self.tree(text)?;
        super::rename(&tree, &self.uri, position, new_name)
    }

    /// Semantic tokens; empty when highlighting is switched off.
    pub fn semantic_tokens(&self, text: &str) -> Vec<SemanticToken> {
        if !self.settings.semantic_tokens {
            return Vec::new();
        }
        self.tree(text)
            .map(|tree| super::semantic_tokens(&tree, self.catalog))
            .unwrap_or_default()
    }
}
