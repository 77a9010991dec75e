use std::fmt::Display;

use serde::Serialize;

use crate::tree_walk::token::{Literal, TokenKind};

/// One element of the parsed program tree. A single closed union covers both
/// expression-shaped and statement-shaped nodes; the interpreter dispatches
/// `evaluate` and `execute` over it exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Literal(Literal),
    ArrayLiteral(Vec<Node>),
    /// Declaration form when `initializer` is present, reference form when
    /// absent.
    Variable {
        name: String,
        initializer: Option<Box<Node>>,
    },
    Set {
        target: String,
        property: String,
        value: Box<Node>,
    },
    Get {
        object: Box<Node>,
        property: Access,
    },
    Call {
        callee: Box<Node>,
        args: Vec<Node>,
    },
    BinaryExpr {
        left: Box<Node>,
        operator: BinOp,
        right: Box<Node>,
    },
    FunctionStatement {
        name: String,
        params: Vec<String>,
        body: Vec<Node>,
    },
    ReturnStatement {
        value: Box<Node>,
    },
    ForStatement {
        variable: String,
        start: Box<Node>,
        end: Box<Node>,
        body: Vec<Node>,
    },
    WhileStatement {
        condition: Box<Node>,
        body: Vec<Node>,
    },
    /// `elif`/`else` links live in `otherwise`, each as a nested
    /// `ConditionalStatement`; a final `else` carries a literal `true` guard.
    ConditionalStatement {
        condition: Box<Node>,
        body: Vec<Node>,
        otherwise: Vec<Node>,
    },
    StructStatement {
        name: String,
        members: Vec<String>,
    },
    Instance {
        name: String,
        members: Vec<(String, Node)>,
    },
}

impl Node {
    /// Short tag used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::ArrayLiteral(_) => "array literal",
            Self::Variable {
                initializer: Some(_),
                ..
            } => "variable declaration",
            Self::Variable { .. } => "variable",
            Self::Set { .. } => "property assignment",
            Self::Get { .. } => "property access",
            Self::Call { .. } => "call",
            Self::BinaryExpr { .. } => "binary expression",
            Self::FunctionStatement { .. } => "sketch statement",
            Self::ReturnStatement { .. } => "finished statement",
            Self::ForStatement { .. } => "loop statement",
            Self::WhileStatement { .. } => "while statement",
            Self::ConditionalStatement { .. } => "if statement",
            Self::StructStatement { .. } => "brush statement",
            Self::Instance { .. } => "prep expression",
        }
    }
}

/// Property access off an object: `.name` or `[expression]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Access {
    Dotted(String),
    Indexed(Box<Node>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Equiv,
    NotEquiv,
    Lt,
    Lte,
    Gt,
    Gte,
    And,
    Or,
}

impl BinOp {
    /// The flat rank table driving the parser's one-step reordering:
    /// comparison/equality/logical bind loosest, then `+`/`-`, then `*`/`/`.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 1,
            _ => 0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equiv => "==",
            Self::NotEquiv => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    pub fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Asterisk => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::Equiv => Some(Self::Equiv),
            TokenKind::NotEquiv => Some(Self::NotEquiv),
            TokenKind::Lt => Some(Self::Lt),
            TokenKind::Lte => Some(Self::Lte),
            TokenKind::Gt => Some(Self::Gt),
            TokenKind::Gte => Some(Self::Gte),
            TokenKind::And => Some(Self::And),
            TokenKind::Or => Some(Self::Or),
            _ => None,
        }
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
