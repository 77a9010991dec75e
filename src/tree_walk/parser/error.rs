use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("syntax error on {line}:{column}: expected {expected} but got {found}")]
    UnexpectedToken {
        line: u32,
        column: u32,
        expected: String,
        found: String,
    },
    #[error("syntax error on {line}:{column}: expected expression but got {found}")]
    ExpectedExpression {
        line: u32,
        column: u32,
        found: String,
    },
    #[error("syntax error on {line}:{column}: expected 2 values in range (start, end) but got {found}")]
    MalformedRange {
        line: u32,
        column: u32,
        found: usize,
    },
    #[error("syntax error: unexpected end of input")]
    UnexpectedEnd,
}
