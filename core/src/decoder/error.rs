//! Errors raised while rebuilding a syntax tree from a document.
//!
//! A decode error always aborts the whole document: no partial tree is
//! returned to the caller.

use alloc::string::String;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input is not valid JSON.
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    /// A term or sub-document that must be an object is something else.
    #[error("expected {context} to be an object")]
    NotAnObject { context: &'static str },

    #[error("missing field `{field}` in {kind}")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("invalid field `{field}` in {kind}: {reason}")]
    InvalidField {
        kind: &'static str,
        field: &'static str,
        reason: String,
    },

    /// The `kind` discriminant names no known term.
    #[error("invalid term kind: {0}")]
    InvalidTermKind(String),

    #[error("invalid binary operator: {0}")]
    InvalidBinaryOperator(String),

    /// The document nests terms deeper than the decoder allows.
    #[error("document nested deeper than {max_depth} terms")]
    NestingTooDeep { max_depth: usize },
}

impl From<crate::ast::InvalidBinaryOp> for DecodeError {
    fn from(err: crate::ast::InvalidBinaryOp) -> Self {
        DecodeError::InvalidBinaryOperator(err.0)
    }
}
