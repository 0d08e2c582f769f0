//! Diagnostics: syntax and structural error reporting.
//!
//! [`diagnose`] parses a document and reports, in order:
//! 1. one diagnostic per `ERROR` node, worded by the enclosing construct
//! 2. the output of each structural check, in registration order
//!
//! The ordering is a convention of this module, not a guarantee callers
//! should depend on beyond "syntax errors come first".

mod checks;
mod engine;
mod syntax_errors;

use std::sync::Arc;

use crate::base::Range;

pub use checks::{CheckError, element_type};
pub use engine::{diagnose, diagnose_with};
pub use syntax_errors::syntax_error_message;

/// Source tag attached to every diagnostic.
pub const SOURCE: &str = "scrapscript";

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Information,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Information => 3,
            Severity::Hint => 4,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: Severity,
    /// Error/warning code (e.g., "E0001").
    pub code: Option<Arc<str>>,
    pub message: Arc<str>,
    pub source: &'static str,
}

impl Diagnostic {
    pub fn new(severity: Severity, range: Range, message: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            severity,
            code: None,
            message: message.into(),
            source: SOURCE,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(range: Range, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Error, range, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(range: Range, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Warning, range, message)
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Standard diagnostic codes.
///
/// ## Code Ranges
///
/// - **E0000**: the document could not be parsed at all
/// - **E0001-E0099**: syntax and structural errors
/// - **W0001-W0099**: warnings
pub mod codes {
    /// Catastrophic parse failure.
    pub const PARSE_FAILURE: &str = "E0000";
    /// Recoverable syntax error (an `ERROR` node).
    pub const SYNTAX_ERROR: &str = "E0001";
    /// List elements of different kinds.
    pub const LIST_TYPE_MISMATCH: &str = "E0002";
    /// Where clause not of the form `; identifier = expression`.
    pub const MALFORMED_WHERE: &str = "E0003";
    /// Record field without a value.
    pub const RECORD_FIELD_WITHOUT_VALUE: &str = "E0004";
    /// Empty or dangling list separator.
    pub const LIST_SEPARATOR: &str = "E0005";
    /// Function literal without `->`.
    pub const FUNCTION_WITHOUT_ARROW: &str = "E0006";

    /// Pattern match without a catch-all case.
    pub const NON_EXHAUSTIVE_MATCH: &str = "W0001";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during analysis.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Finish collecting, keeping at most `max` diagnostics.
    pub fn finish(mut self, max: usize) -> Vec<Diagnostic> {
        self.diagnostics.truncate(max);
        self.diagnostics
    }
}
