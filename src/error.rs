use thiserror::Error;

use crate::tree_walk::interpreter::RuntimeError;
use crate::tree_walk::lexer::LexError;
use crate::tree_walk::parser::ParseError;

pub type Result<T> = std::result::Result<T, Error>;

/// Any failure a program can produce across the three pipeline stages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
