use std::fmt::Display;

use rand::Rng;

use super::callable::Callable;
use super::canvas::Canvas;
use super::value::Value;
use crate::tree_walk::interpreter::{Interpreter, Result, RuntimeError, Scope};

/// Host-provided functions. The canvas variants carry the canvas they were
/// plucked off of, so `canvas.fill` stays callable after being stored in a
/// variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Builtin {
    Ink,
    Random,
    Round,
    CanvasGet(Canvas),
    CanvasFill(Canvas),
    CanvasErase(Canvas),
}

impl Builtin {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ink => "ink",
            Self::Random => "random",
            Self::Round => "round",
            Self::CanvasGet(_) => "Canvas.get",
            Self::CanvasFill(_) => "Canvas.fill",
            Self::CanvasErase(_) => "Canvas.erase",
        }
    }

    /// `None` means variadic.
    fn arity(&self) -> Option<usize> {
        match self {
            Self::Ink => None,
            Self::Random => Some(2),
            Self::Round => Some(1),
            Self::CanvasGet(_) | Self::CanvasErase(_) => Some(2),
            Self::CanvasFill(_) => Some(3),
        }
    }

    fn check_arity(&self, received: usize) -> Result<()> {
        match self.arity() {
            Some(expected) if expected != received => Err(RuntimeError::InvalidArity {
                name: self.name().to_string(),
                expected,
                received,
            }),
            _ => Ok(()),
        }
    }

    fn number_arg(&self, value: &Value) -> Result<f64> {
        match value {
            Value::Number(n) => Ok(*n),
            other => Err(RuntimeError::InvalidArgument {
                builtin: self.name().to_string(),
                details: format!("expected a number, got {}", other.type_name()),
            }),
        }
    }
}

impl Callable for Builtin {
    fn call(&self, interpreter: &mut Interpreter<'_>, arguments: Vec<Value>) -> Result<Value> {
        self.check_arity(arguments.len())?;
        match self {
            Self::Ink => {
                let line = arguments
                    .iter()
                    .map(Value::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                interpreter.print_line(&line);
                Ok(Value::Nil)
            }
            Self::Random => {
                let min = self.number_arg(&arguments[0])?;
                let max = self.number_arg(&arguments[1])?;
                if min > max {
                    return Err(RuntimeError::InvalidArgument {
                        builtin: self.name().to_string(),
                        details: format!("empty range {min} to {max}"),
                    });
                }
                // the 0..1 pair asks for a raw float; anything else draws
                // a whole number from the inclusive range, never stepping
                // outside fractional bounds
                let (lo, hi) = (min.ceil() as i64, max.floor() as i64);
                let drawn = if min == 0.0 && max == 1.0 {
                    rand::thread_rng().gen::<f64>()
                } else if lo > hi {
                    // no whole number fits between the bounds
                    rand::thread_rng().gen_range(min..=max)
                } else {
                    rand::thread_rng().gen_range(lo..=hi) as f64
                };
                Ok(Value::Number(drawn))
            }
            Self::Round => {
                let n = self.number_arg(&arguments[0])?;
                Ok(Value::Number(n.round()))
            }
            Self::CanvasGet(canvas) => canvas.get(&arguments[0], &arguments[1]),
            Self::CanvasFill(canvas) => {
                canvas.fill(&arguments[0], &arguments[1], &arguments[2])?;
                Ok(Value::Nil)
            }
            Self::CanvasErase(canvas) => {
                canvas.erase(&arguments[0], &arguments[1])?;
                Ok(Value::Nil)
            }
        }
    }
}

impl Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<builtin-fn {}>", self.name())
    }
}

/// The scope every program starts from.
pub fn prelude() -> Scope {
    let scope = Scope::new();
    scope.put("ink", Value::Builtin(Builtin::Ink));
    scope.put("random", Value::Builtin(Builtin::Random));
    scope.put("round", Value::Builtin(Builtin::Round));
    scope.put("Canvas", Value::Canvas(Canvas::new(64, 64)));
    scope.put(
        "Color",
        Value::StructDef {
            name: "Color".to_string(),
            members: vec!["r".to_string(), "g".to_string(), "b".to_string()],
        },
    );
    scope
}
