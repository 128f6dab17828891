//! # Type errors
//!
//! Failures of the type checking phase. Unification failures are relabeled
//! with the enclosing expression so the message points at the source of the
//! conflict, while the [`UnifyError`] kind stays available as the `source`.

use lachs::Span;
use thiserror::Error;

use super::unify::UnifyError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeError {
    #[error("unbound variable {name}")]
    UnboundVariable { name: String, span: Span },

    #[error("type error {source} in `{expr}'")]
    Unification {
        source: UnifyError,
        expr: String,
        span: Span,
    },
}

impl TypeError {
    pub fn unbound_variable(name: impl Into<String>, span: Span) -> Self {
        TypeError::UnboundVariable {
            name: name.into(),
            span,
        }
    }

    pub fn unification(source: UnifyError, expr: impl Into<String>, span: Span) -> Self {
        TypeError::Unification {
            source,
            expr: expr.into(),
            span,
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            TypeError::UnboundVariable { span, .. } | TypeError::Unification { span, .. } => span,
        }
    }

    /// Message with the source excerpt, when the span has one attached.
    pub fn report(&self) -> String {
        let msg = self.to_string();
        let span = self.span();
        if span.source.is_empty() {
            format!("Type error: {msg}")
        } else {
            span.to_string(&msg)
        }
    }
}
