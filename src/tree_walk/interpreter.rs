mod error;
#[allow(clippy::module_inception)]
mod interpreter;
mod scope;

pub use error::{Result, RuntimeError};
pub use interpreter::{Flow, Interpreter};
pub use scope::Scope;
