//! Client configuration.
//!
//! Deserialised from the `scrapscript` section of the client's settings.
//! Missing fields take their defaults; unknown fields are ignored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The payload is not valid JSON or has the wrong shape.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-document analysis settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Diagnostic cap; entries beyond it are dropped.
    pub max_number_of_problems: usize,

    /// Where-clause, record, list separator and function arrow checks.
    pub enhanced_validation: bool,

    /// List element homogeneity.
    pub type_checking: bool,

    /// Pattern-match catch-all warning.
    pub exhaustiveness_checking: bool,

    pub semantic_tokens: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_number_of_problems: 1000,
            enhanced_validation: true,
            type_checking: true,
            exhaustiveness_checking: true,
            semantic_tokens: true,
        }
    }
}

/// Name of the client configuration section
pub const SECTION: &str = "scrapscript";

impl Settings {
    /// Settings with a different diagnostic cap.
    pub fn with_max_problems(mut self, max: usize) -> Self {
        self.max_number_of_problems = max;
        self
    }

    /// Read settings from a JSON value, either bare or as
    /// `{ "scrapscript": { ... } }`.
    pub fn from_value(mut value: serde_json::Value) -> Result<Self, ConfigError> {
        if let Some(section) = value.get_mut(SECTION) {
            let section = section.take();
            return Ok(serde_json::from_value(section)?);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Read settings from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }
}
