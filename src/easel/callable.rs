use super::value::Value;
use crate::tree_walk::interpreter::{Flow, Interpreter, Result, RuntimeError};

/// Anything a `Call` node can invoke. The interpreter is threaded through
/// so builtins can reach its output stream.
pub trait Callable {
    fn call(&self, interpreter: &mut Interpreter<'_>, arguments: Vec<Value>) -> Result<Value>;
}

impl Callable for Value {
    fn call(&self, interpreter: &mut Interpreter<'_>, arguments: Vec<Value>) -> Result<Value> {
        match self {
            Self::Function {
                params,
                body,
                closure,
                ..
            } => {
                // Each call runs over a copy of the defining scope, so
                // writes inside the body never leak back out.
                let scope = closure.duplicate();
                let mut arguments = arguments.into_iter();
                for param in params {
                    // missing arguments bind as nothing, extras are dropped
                    scope.put(param, arguments.next().unwrap_or(Value::Nil));
                }
                match interpreter.run_block(body, &scope)? {
                    Flow::Return(value) => Ok(value),
                    Flow::Normal => Ok(Value::Nil),
                }
            }
            Self::Builtin(builtin) => builtin.call(interpreter, arguments),
            other => Err(RuntimeError::NotCallable {
                found: other.type_name().to_string(),
            }),
        }
    }
}
