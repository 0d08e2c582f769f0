//! Reserved words.
//!
//! Scrapscript has no keyword tokens: these words lex as identifiers, but
//! they are reserved for the module system and common syntax so the IDE
//! layer refuses to rename them and highlights them as keywords.

/// Reserved words, alphabetical.
pub const KEYWORDS: &[&str] = &[
    "else", "if", "import", "in", "let", "match", "then", "type", "use", "where", "with",
];

/// Check whether an identifier is a reserved word.
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.binary_search(&text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_sorted_for_binary_search() {
        assert!(KEYWORDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_is_keyword() {
        assert!(is_keyword("import"));
        assert!(is_keyword("where"));
        assert!(!is_keyword("list/map"));
        assert!(!is_keyword("x"));
    }
}
