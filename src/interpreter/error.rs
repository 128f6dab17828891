use std::io;

use lachs::Span;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("unbound symbol {name}")]
    UnboundSymbol { name: String, span: Span },

    #[error("bad application {expr}")]
    BadApplication { expr: String, span: Span },

    #[error("bad name {name} in {stmt}")]
    BadExpression { name: String, stmt: String, span: Span },

    #[error("{builtin} cannot be applied to {value}")]
    BuiltinArgument { builtin: &'static str, value: String },

    #[error("condition evaluated to {value}, not a boolean")]
    NonBooleanCondition { value: String, span: Span },

    #[error("integer overflow in {builtin}")]
    Overflow { builtin: &'static str },

    #[error("recursion limit of {limit} reached")]
    RecursionLimit { limit: usize },

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

impl RuntimeError {
    pub fn span(&self) -> Option<&Span> {
        match self {
            RuntimeError::UnboundSymbol { span, .. }
            | RuntimeError::BadApplication { span, .. }
            | RuntimeError::BadExpression { span, .. }
            | RuntimeError::NonBooleanCondition { span, .. } => Some(span),
            RuntimeError::BuiltinArgument { .. }
            | RuntimeError::Overflow { .. }
            | RuntimeError::RecursionLimit { .. }
            | RuntimeError::Output(_) => None,
        }
    }
}
