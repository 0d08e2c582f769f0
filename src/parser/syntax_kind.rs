//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Leaf values (identifiers, numbers, text, operators) are wrapped in their
//! own node so that every meaningful element of the tree is a node; tokens
//! are left for punctuation and trivia.

/// All syntax kinds (tokens and nodes) in Scrapscript
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    COMMENT,            // -- to end of line

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,              // list/map, to-float, x
    UNDERSCORE,         // _
    INT_NUMBER,         // 42
    FLOAT_NUMBER,       // 3.14
    STRING,             // "hello"
    BYTES_LIT,          // ~~aGVsbG8=
    BYTE_LIT,           // ~2a

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,            // (
    R_PAREN,            // )
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_BRACE,            // {
    R_BRACE,            // }
    COMMA,              // ,
    SEMICOLON,          // ;
    COLON,              // :
    DOT,                // .
    DOT_DOT,            // ..
    HASH,               // #
    EQ,                 // =
    ARROW,              // ->
    PIPE,               // |
    QUESTION,           // ?

    // =========================================================================
    // BINARY OPERATORS
    // =========================================================================
    PLUS,               // +
    MINUS,              // -
    STAR,               // *
    SLASH,              // /
    PERCENT,            // %
    CARET,              // ^
    EQ_EQ,              // ==
    BANG_EQ,            // !=
    LT,                 // <
    GT,                 // >
    LT_EQ,              // <=
    GT_EQ,              // >=
    AMP_AMP,            // &&
    PIPE_PIPE,          // ||
    PLUS_PLUS,          // ++
    GT_PLUS,            // >+
    PLUS_LT,            // +<
    PIPE_GT,            // |>
    GT_GT,              // >>
    LT_LT,              // <<

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE,

    // Bindings
    DECLARATION,        // pattern = expression
    WHERE,              // body ; declaration

    // Compound expressions
    TYPE_ANNOTATION,    // expr : type
    FUNCTION,           // pattern -> body
    PIPELINE,           // lhs |> rhs
    INFIX,              // lhs op rhs
    APPLY,              // f x
    RECORD_ACCESS,      // rec.field
    PARENTHESIZED,      // (expr)

    // Leaves
    IDENTIFIER,
    PLACEHOLDER,
    NUMBER,
    TEXT,
    BYTES,
    HOLE,               // ()
    OPERATOR,
    TAG,                // #name

    // Collections
    LIST,
    SPREAD,             // ..rest
    RECORD,
    RECORD_FIELD,

    // Pattern matching
    PATTERN_MATCH,      // | p -> e | p -> e
    PATTERN_CASE,
    GUARD,              // ? condition

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::COMMENT)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_PAREN as u16) && (self as u16) <= (Self::QUESTION as u16)
    }

    /// Check if this is a binary operator token
    pub fn is_binary_operator(self) -> bool {
        (self as u16) >= (Self::PLUS as u16) && (self as u16) <= (Self::LT_LT as u16)
    }

    /// Check if this is a literal token
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::INT_NUMBER | Self::FLOAT_NUMBER | Self::STRING | Self::BYTES_LIT | Self::BYTE_LIT
        )
    }

    /// Check if this kind is a node (as opposed to a token)
    pub fn is_node(self) -> bool {
        (self as u16) >= (Self::SOURCE_FILE as u16) && (self as u16) <= (Self::ERROR as u16)
    }

    /// Stable tag for the kind.
    ///
    /// Nodes use snake-case production names (`declaration`, `pattern_case`);
    /// tokens use their source spelling where they have a fixed one.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WHITESPACE => "whitespace",
            Self::COMMENT => "comment",
            Self::IDENT => "ident",
            Self::UNDERSCORE => "_",
            Self::INT_NUMBER => "int_number",
            Self::FLOAT_NUMBER => "float_number",
            Self::STRING => "string",
            Self::BYTES_LIT => "bytes_lit",
            Self::BYTE_LIT => "byte_lit",
            Self::L_PAREN => "(",
            Self::R_PAREN => ")",
            Self::L_BRACKET => "[",
            Self::R_BRACKET => "]",
            Self::L_BRACE => "{",
            Self::R_BRACE => "}",
            Self::COMMA => ",",
            Self::SEMICOLON => ";",
            Self::COLON => ":",
            Self::DOT => ".",
            Self::DOT_DOT => "..",
            Self::HASH => "#",
            Self::EQ => "=",
            Self::ARROW => "->",
            Self::PIPE => "|",
            Self::QUESTION => "?",
            Self::PLUS => "+",
            Self::MINUS => "-",
            Self::STAR => "*",
            Self::SLASH => "/",
            Self::PERCENT => "%",
            Self::CARET => "^",
            Self::EQ_EQ => "==",
            Self::BANG_EQ => "!=",
            Self::LT => "<",
            Self::GT => ">",
            Self::LT_EQ => "<=",
            Self::GT_EQ => ">=",
            Self::AMP_AMP => "&&",
            Self::PIPE_PIPE => "||",
            Self::PLUS_PLUS => "++",
            Self::GT_PLUS => ">+",
            Self::PLUS_LT => "+<",
            Self::PIPE_GT => "|>",
            Self::GT_GT => ">>",
            Self::LT_LT => "<<",
            Self::SOURCE_FILE => "source_file",
            Self::DECLARATION => "declaration",
            Self::WHERE => "where",
            Self::TYPE_ANNOTATION => "type_annotation",
            Self::FUNCTION => "function",
            Self::PIPELINE => "pipeline",
            Self::INFIX => "infix",
            Self::APPLY => "apply",
            Self::RECORD_ACCESS => "record_access",
            Self::PARENTHESIZED => "parenthesized",
            Self::IDENTIFIER => "identifier",
            Self::PLACEHOLDER => "placeholder",
            Self::NUMBER => "number",
            Self::TEXT => "text",
            Self::BYTES => "bytes",
            Self::HOLE => "hole",
            Self::OPERATOR => "operator",
            Self::TAG => "tag",
            Self::LIST => "list",
            Self::SPREAD => "spread",
            Self::RECORD => "record",
            Self::RECORD_FIELD => "record_field",
            Self::PATTERN_MATCH => "pattern_match",
            Self::PATTERN_CASE => "pattern_case",
            Self::GUARD => "guard",
            Self::ERROR => "ERROR",
            Self::__LAST => "__last",
        }
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScrapLanguage {}

impl rowan::Language for ScrapLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<ScrapLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ScrapLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ScrapLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<ScrapLanguage>;
