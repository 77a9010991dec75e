//! The Easel runtime model: values, the callable seam, the canvas, and the
//! builtin prelude the interpreter evaluates against.

pub mod builtins;
pub mod callable;
pub mod canvas;
pub mod value;

pub use builtins::{prelude, Builtin};
pub use callable::Callable;
pub use canvas::Canvas;
pub use value::Value;
