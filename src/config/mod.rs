//! Analysis configuration.
//!
//! [`Settings`] holds the diagnostic cap and the feature toggles;
//! [`SettingsCache`] resolves them per document.

mod cache;
mod settings;

pub use cache::SettingsCache;
pub use settings::{ConfigError, SECTION, Settings};
