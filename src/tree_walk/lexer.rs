use thiserror::Error;

use crate::tree_walk::token::{lookup_keyword, Literal, Token, TokenKind};

pub type Result<T> = std::result::Result<T, LexError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("error on {line}:{column}: unexpected character '{character}'")]
    UnexpectedCharacter {
        character: char,
        line: u32,
        column: u32,
    },
    #[error("error on {line}:{column}: unexpected end of file; unterminated string")]
    UnterminatedString { line: u32, column: u32 },
}

/// Scans a source string into its full token sequence, `Eof` included.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source).scan_tokens()
}

/// Single-pass cursor over the source. One token is produced per
/// `scan_token` call; whitespace is discarded, newlines are kept as tokens
/// so later stages can choose to drop them.
#[derive(Debug)]
pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    current: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            current: 0,
            line: 1,
            column: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += 1;
        self.column += 1;
        Some(c)
    }

    /// Consumes the next character only if it matches.
    fn consume_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind, lexeme: impl Into<String>) {
        self.tokens
            .push(Token::new(kind, lexeme, self.line, self.column));
    }

    fn add_literal(&mut self, kind: TokenKind, lexeme: impl Into<String>, literal: Literal) {
        self.tokens
            .push(Token::with_literal(kind, lexeme, literal, self.line, self.column));
    }

    fn unexpected(&self, character: char) -> LexError {
        LexError::UnexpectedCharacter {
            character,
            line: self.line,
            column: self.column,
        }
    }

    fn scan_string(&mut self, quote: char) -> Result<String> {
        let mut text = String::new();
        while self.peek() != Some(quote) {
            match self.advance() {
                Some(c) => text.push(c),
                None => {
                    return Err(LexError::UnterminatedString {
                        line: self.line,
                        column: self.column,
                    })
                }
            }
        }
        self.advance();
        Ok(text)
    }

    /// Consumes up to, not including, the next newline.
    fn scan_comment(&mut self) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.advance();
        }
        text
    }

    /// Digits with at most one decimal point.
    fn scan_number(&mut self, first: char) -> String {
        let mut text = String::from(first);
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || (c == '.' && !text.contains('.')) {
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }
        text
    }

    fn scan_identifier(&mut self, first: char) -> String {
        let mut text = String::from(first);
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }
        text
    }

    fn scan_token(&mut self, c: char) -> Result<()> {
        match c {
            '(' => self.add_token(TokenKind::LeftParen, "("),
            ')' => self.add_token(TokenKind::RightParen, ")"),
            '{' => self.add_token(TokenKind::LeftBrace, "{"),
            '}' => self.add_token(TokenKind::RightBrace, "}"),
            '[' => self.add_token(TokenKind::LeftBracket, "["),
            ']' => self.add_token(TokenKind::RightBracket, "]"),
            ',' => self.add_token(TokenKind::Comma, ","),
            ':' => self.add_token(TokenKind::Colon, ":"),
            '.' => self.add_token(TokenKind::Period, "."),
            '+' => self.add_token(TokenKind::Plus, "+"),
            '-' => self.add_token(TokenKind::Minus, "-"),
            '*' => self.add_token(TokenKind::Asterisk, "*"),
            '/' => self.add_token(TokenKind::Slash, "/"),

            '\n' => {
                self.line += 1;
                self.column = 0;
                self.add_token(TokenKind::Newline, "\n");
            }
            ' ' | '\t' | '\r' => (),

            '~' => {
                let comment = self.scan_comment();
                self.add_token(TokenKind::Comment, comment);
            }

            '\'' | '"' => {
                let text = self.scan_string(c)?;
                self.add_literal(TokenKind::Str, text.clone(), Literal::Str(text));
            }

            '>' if self.consume_if('=') => self.add_token(TokenKind::Gte, ">="),
            '>' => self.add_token(TokenKind::Gt, ">"),
            '<' if self.consume_if('=') => self.add_token(TokenKind::Lte, "<="),
            '<' => self.add_token(TokenKind::Lt, "<"),
            '!' if self.consume_if('=') => self.add_token(TokenKind::NotEquiv, "!="),
            '!' => self.add_token(TokenKind::Not, "!"),

            '|' if self.consume_if('|') => self.add_token(TokenKind::Or, "||"),
            '&' if self.consume_if('&') => self.add_token(TokenKind::And, "&&"),
            '|' | '&' => return Err(self.unexpected(c)),

            '=' if self.consume_if('=') => self.add_token(TokenKind::Equiv, "=="),
            // A bare '=' has no token kind; assignment goes through
            // 'prepare ... as'. The character is consumed and dropped.
            '=' => (),

            c if c.is_ascii_digit() => {
                let text = self.scan_number(c);
                let value = text
                    .parse::<f64>()
                    .expect("digit-and-dot runs form valid numbers");
                self.add_literal(TokenKind::Number, text, Literal::Number(value));
            }

            c if c.is_ascii_alphabetic() || c == '_' => {
                let text = self.scan_identifier(c);
                if let Some(keyword) = lookup_keyword(&text) {
                    self.add_token(TokenKind::Keyword(keyword), text);
                } else if text == "true" || text == "false" {
                    let value = text == "true";
                    self.add_literal(TokenKind::Boolean, text, Literal::Bool(value));
                } else {
                    self.add_token(TokenKind::Identifier, text);
                }
            }

            c => return Err(self.unexpected(c)),
        }
        Ok(())
    }

    pub fn scan_tokens(mut self) -> Result<Vec<Token>> {
        while !self.at_end() {
            if let Some(c) = self.advance() {
                self.scan_token(c)?;
            }
        }
        self.tokens
            .push(Token::new(TokenKind::Eof, "", self.line, self.column));
        Ok(self.tokens)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tree_walk::token::Keyword;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("source should scan")
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn empty_source_is_just_eof() {
        assert_eq!(vec![TokenKind::Eof], kinds(""));
    }

    #[test]
    fn single_char_tokens() {
        assert_eq!(
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::Comma,
                TokenKind::Colon,
                TokenKind::Period,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Asterisk,
                TokenKind::Slash,
                TokenKind::Eof,
            ],
            kinds("(){}[],:.+-*/")
        );
    }

    #[test]
    fn one_and_two_char_operators() {
        assert_eq!(
            vec![
                TokenKind::Gt,
                TokenKind::Gte,
                TokenKind::Lt,
                TokenKind::Lte,
                TokenKind::Not,
                TokenKind::NotEquiv,
                TokenKind::Equiv,
                TokenKind::Or,
                TokenKind::And,
                TokenKind::Eof,
            ],
            kinds("> >= < <= ! != == || &&")
        );
    }

    #[test]
    fn bare_equal_emits_nothing() {
        assert_eq!(vec![TokenKind::Eof], kinds("="));
        assert_eq!(
            vec![TokenKind::Identifier, TokenKind::Number, TokenKind::Eof],
            kinds("x = 1")
        );
    }

    #[test]
    fn lone_pipe_and_ampersand_are_errors() {
        assert!(matches!(
            tokenize("|"),
            Err(LexError::UnexpectedCharacter { character: '|', .. })
        ));
        assert!(matches!(
            tokenize("&"),
            Err(LexError::UnexpectedCharacter { character: '&', .. })
        ));
    }

    #[test]
    fn number_literals() {
        let tokens = tokenize("12 3.5 0.25").expect("should scan");
        let values: Vec<_> = tokens
            .iter()
            .filter_map(|token| match token.literal {
                Some(Literal::Number(n)) => Some(n),
                _ => None,
            })
            .collect();
        assert_eq!(vec![12.0, 3.5, 0.25], values);
    }

    #[test]
    fn number_consumes_at_most_one_decimal_point() {
        assert_eq!(
            vec![
                TokenKind::Number,
                TokenKind::Period,
                TokenKind::Number,
                TokenKind::Eof
            ],
            kinds("1.2.3")
        );
    }

    #[test]
    fn string_literals_with_both_quotes() {
        let tokens = tokenize("'hello' \"world\"").expect("should scan");
        assert_eq!(Some(Literal::Str("hello".into())), tokens[0].literal);
        assert_eq!(Some(Literal::Str("world".into())), tokens[1].literal);
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert!(matches!(
            tokenize("'never closed"),
            Err(LexError::UnterminatedString { .. })
        ));
    }

    #[test]
    fn keywords_booleans_and_identifiers() {
        let tokens = tokenize("sketch add true false count").expect("should scan");
        assert_eq!(TokenKind::Keyword(Keyword::Sketch), tokens[0].kind);
        assert_eq!(TokenKind::Identifier, tokens[1].kind);
        assert_eq!(Some(Literal::Bool(true)), tokens[2].literal);
        assert_eq!(Some(Literal::Bool(false)), tokens[3].literal);
        assert_eq!(TokenKind::Identifier, tokens[4].kind);
    }

    #[test]
    fn comment_runs_to_end_of_line() {
        assert_eq!(
            vec![
                TokenKind::Comment,
                TokenKind::Newline,
                TokenKind::Number,
                TokenKind::Eof
            ],
            kinds("~ a comment\n1")
        );
    }

    #[test]
    fn positions_are_monotonic_and_columns_reset() {
        let tokens = tokenize("a b\nc\n  d").expect("should scan");
        let mut last_line = 0;
        for token in &tokens {
            assert!(token.line >= last_line);
            last_line = token.line;
        }
        let newline = tokens
            .iter()
            .find(|token| token.kind == TokenKind::Newline)
            .expect("newline token");
        assert_eq!(0, newline.column);
        assert_eq!(2, newline.line);
    }

    #[test]
    fn unexpected_character_reports_position() {
        assert_eq!(
            Err(LexError::UnexpectedCharacter {
                character: '#',
                line: 1,
                column: 3,
            }),
            tokenize("ab#")
        );
    }
}
