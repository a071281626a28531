//! Syntax tree for Rinha programs.
//!
//! The tree is never produced from source text here. It arrives as a JSON
//! document written by an external parser and is rebuilt by the
//! [`decoder`](crate::decoder) inside a `bumpalo::Bump` arena, so every node,
//! identifier and string literal shares the arena's lifetime `'a`.

mod builder;
mod serialization;

#[cfg(test)]
mod serialization_test;

pub use builder::TermBuilder;

use alloc::string::String;
use core::{fmt, str::FromStr};

/// Position of a term in the original source file.
///
/// `start` and `end` are byte offsets as reported by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location<'a> {
    pub start: usize,
    pub end: usize,
    pub filename: &'a str,
}

impl<'a> Location<'a> {
    pub fn new(start: usize, end: usize, filename: &'a str) -> Self {
        Self {
            start,
            end,
            filename,
        }
    }

    /// Owned copy of this location that can outlive the arena.
    pub fn to_span(&self) -> Span {
        Span {
            filename: String::from(self.filename),
            start: self.start,
            end: self.end,
        }
    }
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.start, self.end)
    }
}

/// Arena-independent source location carried by errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub filename: String,
    pub start: usize,
    pub end: usize,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.start, self.end)
    }
}

/// A named binder: a function parameter or the name introduced by `let`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter<'a> {
    pub text: &'a str,
    pub location: Location<'a>,
}

/// Binary operators, tagged in documents by their variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
    And,
    Or,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 13] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Rem,
        BinaryOp::Eq,
        BinaryOp::Neq,
        BinaryOp::Lt,
        BinaryOp::Gt,
        BinaryOp::Lte,
        BinaryOp::Gte,
        BinaryOp::And,
        BinaryOp::Or,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "Add",
            BinaryOp::Sub => "Sub",
            BinaryOp::Mul => "Mul",
            BinaryOp::Div => "Div",
            BinaryOp::Rem => "Rem",
            BinaryOp::Eq => "Eq",
            BinaryOp::Neq => "Neq",
            BinaryOp::Lt => "Lt",
            BinaryOp::Gt => "Gt",
            BinaryOp::Lte => "Lte",
            BinaryOp::Gte => "Gte",
            BinaryOp::And => "And",
            BinaryOp::Or => "Or",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag does not name one of the 13 operators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid binary operator: {0}")]
pub struct InvalidBinaryOp(pub String);

impl FromStr for BinaryOp {
    type Err = InvalidBinaryOp;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        BinaryOp::ALL
            .into_iter()
            .find(|op| op.as_str() == tag)
            .ok_or_else(|| InvalidBinaryOp(String::from(tag)))
    }
}

/// A node of the syntax tree together with its source location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term<'a> {
    pub kind: TermKind<'a>,
    pub location: Location<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TermKind<'a> {
    Int(i32),
    Str(&'a str),
    Bool(bool),
    Var(&'a str),
    Function {
        parameters: &'a [Parameter<'a>],
        body: &'a Term<'a>,
    },
    Call {
        callee: &'a Term<'a>,
        arguments: &'a [&'a Term<'a>],
    },
    Let {
        name: Parameter<'a>,
        value: &'a Term<'a>,
        next: &'a Term<'a>,
    },
    If {
        condition: &'a Term<'a>,
        then: &'a Term<'a>,
        otherwise: &'a Term<'a>,
    },
    Binary {
        lhs: &'a Term<'a>,
        op: BinaryOp,
        rhs: &'a Term<'a>,
    },
    Tuple {
        first: &'a Term<'a>,
        second: &'a Term<'a>,
    },
    Print(&'a Term<'a>),
    First(&'a Term<'a>),
    Second(&'a Term<'a>),
}

impl TermKind<'_> {
    /// The `kind` discriminant used in documents.
    pub fn tag(&self) -> &'static str {
        match self {
            TermKind::Int(_) => "Int",
            TermKind::Str(_) => "Str",
            TermKind::Bool(_) => "Bool",
            TermKind::Var(_) => "Var",
            TermKind::Function { .. } => "Function",
            TermKind::Call { .. } => "Call",
            TermKind::Let { .. } => "Let",
            TermKind::If { .. } => "If",
            TermKind::Binary { .. } => "Binary",
            TermKind::Tuple { .. } => "Tuple",
            TermKind::Print(_) => "Print",
            TermKind::First(_) => "First",
            TermKind::Second(_) => "Second",
        }
    }
}

/// The outermost document: a named program and its root expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Program<'a> {
    pub name: &'a str,
    pub expression: &'a Term<'a>,
    pub location: Location<'a>,
}
