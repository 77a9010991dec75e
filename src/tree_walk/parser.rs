mod ast;
mod error;
#[allow(clippy::module_inception)]
mod parser;

pub use ast::{Access, BinOp, Node};
pub use error::{ParseError, Result};
pub use parser::{parse, Parser};
