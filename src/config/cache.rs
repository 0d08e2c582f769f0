//! Per-document settings cache.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::Settings;

/// Settings resolved per document, falling back to the global settings.
///
/// Entries are dropped when their document closes; a configuration change
/// replaces the global settings and clears every entry.
#[derive(Clone, Debug, Default)]
pub struct SettingsCache {
    global: Settings,
    documents: FxHashMap<String, Settings>,
}

impl SettingsCache {
    pub fn new(global: Settings) -> Self {
        Self {
            global,
            documents: FxHashMap::default(),
        }
    }

    pub fn global(&self) -> &Settings {
        &self.global
    }

    /// Settings for a document, caching the global settings on first use
    pub fn document_settings(&mut self, uri: &str) -> &Settings {
        if !self.documents.contains_key(uri) {
            debug!(uri, "caching settings for document");
            self.documents.insert(uri.to_string(), self.global.clone());
        }
        &self.documents[uri]
    }

    /// Settings the client scoped to a single document
    pub fn set_document_settings(&mut self, uri: impl Into<String>, settings: Settings) {
        self.documents.insert(uri.into(), settings);
    }

    pub fn did_close(&mut self, uri: &str) {
        self.documents.remove(uri);
    }

    pub fn did_change_configuration(&mut self, global: Settings) {
        debug!(cached = self.documents.len(), "configuration changed; clearing settings cache");
        self.global = global;
        self.documents.clear();
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_settings_default_to_global() {
        let mut cache = SettingsCache::new(Settings::default().with_max_problems(7));
        assert_eq!(cache.document_settings("file:///a.scrap").max_number_of_problems, 7);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_did_close_evicts_document() {
        let mut cache = SettingsCache::default();
        cache.set_document_settings("a", Settings::default().with_max_problems(1));
        cache.did_close("a");
        assert!(cache.is_empty());
        assert_eq!(cache.document_settings("a").max_number_of_problems, 1000);
    }

    #[test]
    fn test_configuration_change_clears_all() {
        let mut cache = SettingsCache::default();
        cache.document_settings("a");
        cache.document_settings("b");
        cache.did_change_configuration(Settings::default().with_max_problems(3));
        assert!(cache.is_empty());
        assert_eq!(cache.document_settings("b").max_number_of_problems, 3);
    }
}
