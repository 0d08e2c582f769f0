//! Helpers for setting up an analysis host and querying it.

use scrap::Position;
use scrap::config::Settings;
use scrap::ide::{Analysis, AnalysisHost};
use scrap::syntax::Tree;

pub const URI: &str = "file:///test.scrap";

/// Creates an initialized AnalysisHost with default settings.
pub fn initialized_host() -> AnalysisHost {
    let mut host = AnalysisHost::new();
    host.initialize(Settings::default());
    host
}

/// Snapshot for the test document.
pub fn analysis(host: &mut AnalysisHost) -> Analysis<'_> {
    host.analysis(URI).expect("host is initialized")
}

/// Parses a source string, panicking on catastrophic failure.
pub fn tree(source: &str) -> Tree {
    Tree::parse(source).unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"))
}

/// Position of the first occurrence of `needle`, offset by `delta` characters.
///
/// Only valid for ASCII sources.
pub fn position_of(source: &str, needle: &str, delta: u32) -> Position {
    let offset = source
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in {source:?}"));
    let before = &source[..offset];
    let line = before.matches('\n').count() as u32;
    let column = before.rfind('\n').map_or(offset, |nl| offset - nl - 1) as u32;
    Position::new(line, column + delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_of() {
        assert_eq!(position_of("a = 1\nbb = 2", "bb", 1), Position::new(1, 1));
        assert_eq!(position_of("a = 1", "1", 0), Position::new(0, 4));
    }
}
