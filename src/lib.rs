//! Easel is a small dynamically typed scripting language for short
//! creative-coding sketches over a pixel canvas.
//!
//! The pipeline is three stages run left to right: [`tokenize`] turns source
//! text into tokens, [`parse`] turns tokens into a statement tree, and
//! [`run`] walks the tree against a scope. [`interpret`] wires all three
//! together over the standard prelude.

use std::io::Write;

pub mod easel;
pub mod error;
pub mod tree_walk;

pub use easel::prelude;
pub use error::{Error, Result};
pub use tree_walk::{parse, tokenize};

use tracing::debug;
use tree_walk::interpreter::{Interpreter, Scope};
use tree_walk::parser::Node;

/// Executes an already-parsed program against `scope`, printing to stdout.
pub fn run(program: &[Node], scope: &Scope) -> Result<()> {
    let mut interpreter = Interpreter::new();
    interpreter.run(program, scope)?;
    Ok(())
}

/// Runs a source string through the whole pipeline over the prelude scope.
pub fn interpret(source: &str) -> Result<()> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "tokenized");
    let program = parse(tokens)?;
    debug!(statements = program.len(), "parsed");
    run(&program, &prelude())
}

/// Like [`interpret`] but with program output redirected, so callers can
/// capture what `ink` writes.
pub fn interpret_with_output(source: &str, output: Box<dyn Write + '_>) -> Result<()> {
    let tokens = tokenize(source)?;
    let program = parse(tokens)?;
    let mut interpreter = Interpreter::new_with_output(output);
    interpreter.run(&program, &prelude())?;
    Ok(())
}
