use std::collections::BTreeMap;
use std::fmt::Display;

use super::builtins::Builtin;
use super::canvas::Canvas;
use crate::tree_walk::interpreter::Scope;
use crate::tree_walk::parser::Node;
use crate::tree_walk::token::Literal;

/// A runtime value. Arrays and records have plain value semantics, so scope
/// duplication copies them outright; the canvas is the one shared host
/// resource and keeps its handle semantics.
#[derive(Debug, Clone)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    Array(Vec<Value>),
    Record(BTreeMap<String, Value>),
    Function {
        name: String,
        params: Vec<String>,
        body: Vec<Node>,
        /// Live handle to the defining scope; copied on every invocation.
        closure: Scope,
    },
    StructDef {
        name: String,
        members: Vec<String>,
    },
    Builtin(Builtin),
    Canvas(Canvas),
    Nil,
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Array(_) => "array",
            Self::Record(_) => "record",
            Self::Function { .. } => "sketch",
            Self::StructDef { .. } => "brush",
            Self::Builtin(_) => "builtin",
            Self::Canvas(_) => "canvas",
            Self::Nil => "nothing",
        }
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number(n) => Self::Number(*n),
            Literal::Str(s) => Self::Str(s.clone()),
            Literal::Bool(b) => Self::Bool(*b),
        }
    }
}

impl From<&Value> for bool {
    fn from(value: &Value) -> Self {
        match value {
            Value::Nil => false,
            Value::Bool(v) => *v,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            _ => true,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(l), Self::Number(r)) => l == r,
            (Self::Str(l), Self::Str(r)) => l == r,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Array(l), Self::Array(r)) => l == r,
            (Self::Record(l), Self::Record(r)) => l == r,
            (
                Self::Function {
                    name: l_name,
                    params: l_params,
                    body: l_body,
                    closure: l_closure,
                },
                Self::Function {
                    name: r_name,
                    params: r_params,
                    body: r_body,
                    closure: r_closure,
                },
                // closures compare by identity; comparing their contents
                // would recurse through self-referential scopes
            ) => {
                l_name == r_name
                    && l_params == r_params
                    && l_body == r_body
                    && l_closure.ptr_eq(r_closure)
            }
            (
                Self::StructDef {
                    name: l_name,
                    members: l_members,
                },
                Self::StructDef {
                    name: r_name,
                    members: r_members,
                },
            ) => l_name == r_name && l_members == r_members,
            (Self::Builtin(l), Self::Builtin(r)) => l == r,
            (Self::Canvas(l), Self::Canvas(r)) => l == r,
            (Self::Nil, Self::Nil) => true,
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                write!(f, "{}", *n as i64)
            }
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Record(fields) => {
                write!(f, "{{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Self::Function { name, params, .. } => {
                write!(f, "<sketch {name}({})>", params.join(", "))
            }
            Self::StructDef { name, .. } => write!(f, "<brush {name}>"),
            Self::Builtin(builtin) => write!(f, "{builtin}"),
            Self::Canvas(canvas) => write!(f, "{canvas}"),
            Self::Nil => write!(f, "nothing"),
        }
    }
}
