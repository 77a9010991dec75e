use std::collections::HashMap;
use std::fmt::Display;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Surface keywords, loaded from `data/keywords.json` so the mapping from
/// source words to keyword kinds stays data-driven.
static KEYWORDS: LazyLock<HashMap<String, Keyword>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../data/keywords.json"))
        .expect("data/keywords.json is part of the build and must parse")
});

/// Looks up an identifier in the keyword table.
pub fn lookup_keyword(identifier: &str) -> Option<Keyword> {
    KEYWORDS.get(identifier).copied()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Prep,
    Sketch,
    Needs,
    Finished,
    Loop,
    Through,
    While,
    If,
    Elif,
    Else,
    Prepare,
    As,
    Brush,
    Has,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prep => "prep",
            Self::Sketch => "sketch",
            Self::Needs => "needs",
            Self::Finished => "finished",
            Self::Loop => "loop",
            Self::Through => "through",
            Self::While => "while",
            Self::If => "if",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::Prepare => "prepare",
            Self::As => "as",
            Self::Brush => "brush",
            Self::Has => "has",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TokenKind {
    // punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Colon,
    Period,

    // operators
    Plus,
    Minus,
    Asterisk,
    Slash,
    Equiv,
    NotEquiv,
    Lt,
    Lte,
    Gt,
    Gte,
    And,
    Or,
    Not,

    // literals
    Number,
    Str,
    Boolean,

    Identifier,
    Keyword(Keyword),

    Comment,
    Newline,
    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::LeftBrace => "'{'",
            Self::RightBrace => "'}'",
            Self::LeftBracket => "'['",
            Self::RightBracket => "']'",
            Self::Comma => "','",
            Self::Colon => "':'",
            Self::Period => "'.'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Asterisk => "'*'",
            Self::Slash => "'/'",
            Self::Equiv => "'=='",
            Self::NotEquiv => "'!='",
            Self::Lt => "'<'",
            Self::Lte => "'<='",
            Self::Gt => "'>'",
            Self::Gte => "'>='",
            Self::And => "'&&'",
            Self::Or => "'||'",
            Self::Not => "'!'",
            Self::Number => "number",
            Self::Str => "string",
            Self::Boolean => "boolean",
            Self::Identifier => "identifier",
            Self::Keyword(keyword) => return write!(f, "keyword '{keyword}'"),
            Self::Comment => "comment",
            Self::Newline => "newline",
            Self::Eof => "end of file",
        };
        write!(f, "{text}")
    }
}

/// A literal value carried by `Number`, `Str`, and `Boolean` tokens. The
/// parser reuses it as the payload of literal expression nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Number(f64),
    Str(String),
    Bool(bool),
}

/// One classified lexical unit. Immutable once produced by the lexer; every
/// token except the synthetic `Eof` carries the position it was scanned at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal: Option<Literal>,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
            column,
        }
    }

    pub fn with_literal(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Literal,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: Some(literal),
            line,
            column,
        }
    }
}
