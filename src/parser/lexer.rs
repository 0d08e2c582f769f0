//! Logos-based lexer for Scrapscript
//!
//! Fast tokenization using the logos crate.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Numeric literal flavour, decided by the number callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Int,
    Float,
}

/// Extend an identifier over `/` and `-` joined segments (`list/map`, `to-float`).
///
/// A joiner only continues the identifier when a letter follows it, so
/// `x-1` and `x/2` stay arithmetic.
fn ident_segments(lex: &mut logos::Lexer<LogosToken>) -> bool {
    loop {
        let bytes = lex.remainder().as_bytes();
        let joins = bytes.len() >= 2
            && (bytes[0] == b'/' || bytes[0] == b'-')
            && bytes[1].is_ascii_alphabetic();
        if !joins {
            return true;
        }
        let segment = 1 + bytes[1..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
            .count();
        lex.bump(segment);
    }
}

/// Decide between integer and float, consuming a `.digits` fraction if present.
fn number_kind(lex: &mut logos::Lexer<LogosToken>) -> NumberKind {
    let bytes = lex.remainder().as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'.' && bytes[1].is_ascii_digit() {
        let fraction = 1 + bytes[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        lex.bump(fraction);
        NumberKind::Float
    } else {
        NumberKind::Int
    }
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"--[^\n]*")]
    Comment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*|_[a-zA-Z0-9_]+", ident_segments)]
    Ident,

    #[token("_")]
    Underscore,

    #[regex(r"[0-9]+", number_kind)]
    Number(NumberKind),

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    #[regex(r"~~[A-Za-z0-9+/=]*")]
    Bytes,

    #[regex(r"~[0-9a-fA-F][0-9a-fA-F]")]
    Byte,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("..")]
    DotDot,
    #[token("->")]
    Arrow,
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("++")]
    PlusPlus,
    #[token(">+")]
    GtPlus,
    #[token("+<")]
    PlusLt,
    #[token("|>")]
    PipeGt,
    #[token(">>")]
    GtGt,
    #[token("<<")]
    LtLt,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("#")]
    Hash,
    #[token("=")]
    Eq,
    #[token("|")]
    Pipe,
    #[token("?")]
    Question,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::Comment => SyntaxKind::COMMENT,
            LogosToken::Ident => SyntaxKind::IDENT,
            LogosToken::Underscore => SyntaxKind::UNDERSCORE,
            LogosToken::Number(NumberKind::Int) => SyntaxKind::INT_NUMBER,
            LogosToken::Number(NumberKind::Float) => SyntaxKind::FLOAT_NUMBER,
            LogosToken::String => SyntaxKind::STRING,
            LogosToken::Bytes => SyntaxKind::BYTES_LIT,
            LogosToken::Byte => SyntaxKind::BYTE_LIT,
            LogosToken::DotDot => SyntaxKind::DOT_DOT,
            LogosToken::Arrow => SyntaxKind::ARROW,
            LogosToken::EqEq => SyntaxKind::EQ_EQ,
            LogosToken::BangEq => SyntaxKind::BANG_EQ,
            LogosToken::LtEq => SyntaxKind::LT_EQ,
            LogosToken::GtEq => SyntaxKind::GT_EQ,
            LogosToken::AmpAmp => SyntaxKind::AMP_AMP,
            LogosToken::PipePipe => SyntaxKind::PIPE_PIPE,
            LogosToken::PlusPlus => SyntaxKind::PLUS_PLUS,
            LogosToken::GtPlus => SyntaxKind::GT_PLUS,
            LogosToken::PlusLt => SyntaxKind::PLUS_LT,
            LogosToken::PipeGt => SyntaxKind::PIPE_GT,
            LogosToken::GtGt => SyntaxKind::GT_GT,
            LogosToken::LtLt => SyntaxKind::LT_LT,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::LBracket => SyntaxKind::L_BRACKET,
            LogosToken::RBracket => SyntaxKind::R_BRACKET,
            LogosToken::LBrace => SyntaxKind::L_BRACE,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Semicolon => SyntaxKind::SEMICOLON,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::Hash => SyntaxKind::HASH,
            LogosToken::Eq => SyntaxKind::EQ,
            LogosToken::Pipe => SyntaxKind::PIPE,
            LogosToken::Question => SyntaxKind::QUESTION,
            LogosToken::Plus => SyntaxKind::PLUS,
            LogosToken::Minus => SyntaxKind::MINUS,
            LogosToken::Star => SyntaxKind::STAR,
            LogosToken::Slash => SyntaxKind::SLASH,
            LogosToken::Percent => SyntaxKind::PERCENT,
            LogosToken::Caret => SyntaxKind::CARET,
            LogosToken::Lt => SyntaxKind::LT,
            LogosToken::Gt => SyntaxKind::GT,
        }
    }
}
