use thiserror::Error;

use crate::tree_walk::parser::BinOp;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Any of these aborts the whole `run()`; there is no recovery.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("runtime error: variable not in scope: {name}")]
    NotInScope { name: String },

    #[error("runtime error: {found} is not callable")]
    NotCallable { found: String },

    #[error("runtime error: {name} expected {expected} arguments but got {received}")]
    InvalidArity {
        name: String,
        expected: usize,
        received: usize,
    },

    #[error("runtime error: {name} is not a brush")]
    NotAStruct { name: String },

    #[error("runtime error: invalid key: {member} found while creating instance of {name}")]
    InvalidMember { member: String, name: String },

    #[error("runtime error: no property {property} on value")]
    UnknownProperty { property: String },

    #[error("runtime error: {found} has no properties")]
    HasNoProperties { found: String },

    #[error("runtime error: cannot index into {found}")]
    NotIndexable { found: String },

    #[error("runtime error: invalid index {found}")]
    InvalidIndex { found: String },

    #[error("runtime error: index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: f64, len: usize },

    #[error("runtime error: '{operator}' not supported for {left} and {right}")]
    OperationNotSupported {
        operator: BinOp,
        left: String,
        right: String,
    },

    #[error("runtime error: cannot set property on {found} bound to {name}")]
    SetTargetNotRecord { name: String, found: String },

    #[error("runtime error: loop bound must be a number, got {found}")]
    InvalidLoopBound { found: String },

    #[error("runtime error: invalid canvas coordinates: {x}, {y}")]
    InvalidCoordinates { x: String, y: String },

    #[error("runtime error: {builtin}: {details}")]
    InvalidArgument { builtin: String, details: String },

    #[error("runtime error: expected expression but got {found}")]
    ExpectedExpression { found: String },

    #[error("runtime error: 'finished' outside of a sketch")]
    ReturnOutsideFunction,
}
