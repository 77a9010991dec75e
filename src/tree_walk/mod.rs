//! The front end and execution engine: characters to tokens, tokens to a
//! statement tree, and a tree walk over copied scopes.

pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod token;

pub use interpreter::{Interpreter, Scope};
pub use lexer::tokenize;
pub use parser::parse;
pub use token::Token;
